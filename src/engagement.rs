//! Truck/trailer collision and the docking protocol.
//!
//! The trailer is always in exactly one of three states:
//!
//! * `Free`: moves with directional input. While the robot is in truck mode,
//!   every tentative move is tested against the truck bounds; an overlap
//!   starts the docking animation instead of accepting the move.
//! * `Engaging`: the trailer is animated towards a docking target fixed at
//!   the moment of contact. Input cannot interrupt it, and it always runs
//!   until the scaled elapsed time reaches the configured duration.
//!   On completion the position is snapped to the target exactly.
//! * `Engaged`: the trailer holds its docked position. It returns to `Free`
//!   as soon as the robot leaves truck mode, or the bounds stop overlapping.

use cgmath::{EuclideanSpace, InnerSpace, Point3, Vector3};

use mode::Mode;
use trailer::Trailer;
use vehicle::VehiclePose;

/// Parameters of the docking animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Docking {
    /// Docked trailer position relative to the truck origin.
    pub offset: Vector3<f32>,
    /// Scaled time the animation lasts.
    pub duration: f32,
    /// Multiplier applied to both the approach velocity and elapsed time.
    pub speedup: f32,
}

impl Default for Docking {
    fn default() -> Self {
        Docking {
            offset: Vector3::new(-125.0, 30.0, 0.0),
            duration: 5.0,
            speedup: 2.0,
        }
    }
}

/// Engagement status of the trailer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Engagement {
    /// Moves freely.
    Free,
    /// Docking animation in progress.
    Engaging {
        /// Docked position, fixed when the animation started.
        target: Point3<f32>,
        /// Scaled time since the animation started.
        elapsed: f32,
    },
    /// Locked to the truck.
    Engaged,
}

impl Engagement {
    /// Whether the trailer moves freely.
    pub fn is_free(&self) -> bool {
        *self == Engagement::Free
    }

    /// Whether the docking animation is running.
    pub fn is_engaging(&self) -> bool {
        match *self {
            Engagement::Engaging { .. } => true,
            _ => false,
        }
    }

    /// Whether the trailer is hitched.
    pub fn is_engaged(&self) -> bool {
        *self == Engagement::Engaged
    }
}

/// Displacement to apply this frame while approaching `target`.
///
/// The step is proportional to the remaining distance, and never longer
/// than it, so large frame times cannot overshoot the target.
pub fn displacement(
    position: Point3<f32>,
    target: Point3<f32>,
    docking: &Docking,
    delta_time: f32,
) -> Vector3<f32> {
    let remaining = target - position;
    let velocity = remaining / docking.duration * docking.speedup;
    let step = velocity * delta_time;
    if step.magnitude2() > remaining.magnitude2() {
        remaining
    } else {
        step
    }
}

/// Unhitch the trailer if it is engaged. Returns `true` if it was.
pub fn decouple(trailer: &mut Trailer) -> bool {
    if trailer.status.is_engaged() {
        info!("Trailer decoupled at {:?}", trailer.position);
        trailer.status = Engagement::Free;
        true
    } else {
        false
    }
}

/// Advance the trailer by one tick.
///
/// `tentative` is the position requested by free motion, ignored unless the
/// trailer is `Free`; `None` means "stay put".
pub fn resolve(
    trailer: &mut Trailer,
    mode: Mode,
    truck: &VehiclePose,
    tentative: Option<Point3<f32>>,
    docking: &Docking,
    delta_time: f32,
) {
    match trailer.status {
        Engagement::Free => {
            let tentative = tentative.unwrap_or(trailer.position);
            if mode == Mode::Truck && truck.bounds().overlaps(&trailer.bounds_at(tentative)) {
                let target = Point3::from_vec(truck.offset() + docking.offset);
                info!("Trailer contact at {:?}, docking towards {:?}", tentative, target);
                trailer.status = Engagement::Engaging { target, elapsed: 0.0 };
            } else {
                trailer.position = tentative;
            }
        }
        Engagement::Engaging { target, elapsed } => {
            let step = displacement(trailer.position, target, docking, delta_time);
            trailer.position = trailer.position + step;
            let elapsed = elapsed + delta_time * docking.speedup;
            if elapsed >= docking.duration {
                trailer.position = target;
                trailer.status = Engagement::Engaged;
                info!("Trailer engaged at {:?}", target);
            } else {
                trailer.status = Engagement::Engaging { target, elapsed };
            }
        }
        Engagement::Engaged => {
            if mode == Mode::Robot {
                decouple(trailer);
            } else if !truck.bounds().overlaps(&trailer.bounds()) {
                info!("Trailer lost contact with the truck");
                decouple(trailer);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aabb::Aabb;
    use cgmath::Point2;

    fn truck() -> VehiclePose {
        VehiclePose::new(
            Point2::new(0.0, 0.0),
            Aabb::new(Point3::new(-100.0, 0.0, -35.0), Point3::new(20.0, 80.0, 35.0)),
        )
    }

    fn trailer_at(position: Point3<f32>) -> Trailer {
        Trailer::new(
            position,
            Aabb::new(Point3::new(-75.0, -30.0, -35.0), Point3::new(75.0, 60.0, 35.0)),
        )
    }

    fn engaging(trailer: &mut Trailer, docking: &Docking) {
        let position = trailer.position;
        resolve(trailer, Mode::Truck, &truck(), Some(position), docking, 0.0);
        assert!(trailer.status.is_engaging());
    }

    #[test]
    fn contact_in_truck_mode_starts_docking() {
        let docking = Docking::default();
        let mut trailer = trailer_at(Point3::new(-150.0, 30.0, -200.0));
        resolve(&mut trailer, Mode::Truck, &truck(), Some(Point3::new(-150.0, 30.0, -60.0)), &docking, 0.1);
        // contact rejects the move
        assert_eq!(trailer.position, Point3::new(-150.0, 30.0, -200.0));
        match trailer.status {
            Engagement::Engaging { target, elapsed } => {
                assert_eq!(target, Point3::new(-125.0, 30.0, 0.0));
                assert_eq!(elapsed, 0.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn robot_mode_passes_through() {
        let docking = Docking::default();
        let mut trailer = trailer_at(Point3::new(-150.0, 30.0, -200.0));
        let inside = Point3::new(-50.0, 30.0, 0.0);
        resolve(&mut trailer, Mode::Robot, &truck(), Some(inside), &docking, 0.1);
        assert_eq!(trailer.position, inside);
        assert!(trailer.status.is_free());
    }

    #[test]
    fn docking_completes_exactly() {
        let docking = Docking { offset: Vector3::new(-125.0, 30.0, 0.0), duration: 5.0, speedup: 2.0 };
        let mut trailer = trailer_at(Point3::new(-125.0, 30.0, -50.0));
        engaging(&mut trailer, &docking);
        let target = Point3::new(-125.0, 30.0, 0.0);

        let dt = 0.125;
        for _ in 0..19 {
            resolve(&mut trailer, Mode::Truck, &truck(), None, &docking, dt);
            assert!(trailer.status.is_engaging());
        }
        // 20 * 0.125 = 2.5s, scaled to 5s
        resolve(&mut trailer, Mode::Truck, &truck(), None, &docking, dt);
        assert!(trailer.status.is_engaged());
        assert_eq!(trailer.position, target);
        assert_eq!(trailer.position.z.to_bits(), target.z.to_bits());
    }

    #[test]
    fn approach_never_overshoots() {
        let docking = Docking::default();
        let mut trailer = trailer_at(Point3::new(-170.0, 30.0, -40.0));
        engaging(&mut trailer, &docking);
        let target = match trailer.status {
            Engagement::Engaging { target, .. } => target,
            _ => unreachable!(),
        };
        let frames = [0.016, 0.033, 0.1, 0.25, 0.016, 0.5, 0.07];
        for &dt in frames.iter() {
            let before = (target - trailer.position).magnitude();
            resolve(&mut trailer, Mode::Truck, &truck(), None, &docking, dt);
            let after = (target - trailer.position).magnitude();
            assert!(after <= before, "{} > {}", after, before);
        }
    }

    #[test]
    fn displacement_is_clamped_to_remaining() {
        let docking = Docking::default();
        let position = Point3::new(0.0, 0.0, 0.0);
        let target = Point3::new(3.0, 0.0, 4.0);
        let step = displacement(position, target, &docking, 100.0);
        assert_eq!(step, Vector3::new(3.0, 0.0, 4.0));
        let small = displacement(position, target, &docking, 0.5);
        assert!(small.magnitude() < 5.0);
    }

    #[test]
    fn engaging_ignores_tentative_moves() {
        let docking = Docking::default();
        let mut trailer = trailer_at(Point3::new(-125.0, 30.0, -50.0));
        engaging(&mut trailer, &docking);
        let start = trailer.position;
        resolve(&mut trailer, Mode::Truck, &truck(), Some(Point3::new(500.0, 30.0, 500.0)), &docking, 0.0);
        assert_eq!(trailer.position, start);
        assert!(trailer.status.is_engaging());
    }

    #[test]
    fn engaged_decouples_on_robot_mode() {
        let docking = Docking::default();
        let mut trailer = trailer_at(Point3::new(-125.0, 30.0, 0.0));
        trailer.status = Engagement::Engaged;
        resolve(&mut trailer, Mode::Truck, &truck(), None, &docking, 0.1);
        assert!(trailer.status.is_engaged());
        resolve(&mut trailer, Mode::Robot, &truck(), None, &docking, 0.1);
        assert!(trailer.status.is_free());
    }

    #[test]
    fn engaged_decouples_when_truck_leaves() {
        let docking = Docking::default();
        let mut trailer = trailer_at(Point3::new(-125.0, 30.0, 0.0));
        trailer.status = Engagement::Engaged;
        let mut far = truck();
        far.set_position(Point2::new(0.0, 400.0));
        resolve(&mut trailer, Mode::Truck, &far, None, &docking, 0.1);
        assert!(trailer.status.is_free());
        assert_eq!(trailer.position, Point3::new(-125.0, 30.0, 0.0));
    }

    #[test]
    fn decouple_only_affects_engaged() {
        let mut trailer = trailer_at(Point3::new(0.0, 30.0, 0.0));
        assert!(!decouple(&mut trailer));
        trailer.status = Engagement::Engaged;
        assert!(decouple(&mut trailer));
        assert!(trailer.status.is_free());
    }
}
