//! Free-standing trailer and its input-driven motion.

use cgmath::{EuclideanSpace, InnerSpace, Point3, Vector3};

use aabb::Aabb;
use engagement::Engagement;
use input::{Action, Latch};

/// Trailer position, bounds and engagement status.
#[derive(Clone, Debug)]
pub struct Trailer {
    pub(crate) position: Point3<f32>,
    pub(crate) local_bounds: Aabb,
    pub(crate) status: Engagement,
}

impl Trailer {
    /// A free trailer at `position`.
    pub fn new(
        position: Point3<f32>,
        local_bounds: Aabb,
    ) -> Self {
        Trailer {
            position,
            local_bounds,
            status: Engagement::Free,
        }
    }

    /// Current world position.
    pub fn position(&self) -> Point3<f32> {
        self.position
    }

    /// Current engagement status.
    pub fn status(&self) -> &Engagement {
        &self.status
    }

    /// World-space bounds at the current position.
    pub fn bounds(&self) -> Aabb {
        self.bounds_at(self.position)
    }

    /// World-space bounds if the trailer stood at `position`.
    pub fn bounds_at(
        &self,
        position: Point3<f32>,
    ) -> Aabb {
        self.local_bounds.translated(position.to_vec())
    }
}

/// Direction of travel requested by the held movement actions, before scaling.
///
/// Opposite actions on one axis cancel. When both axes are active the vector
/// is normalized, so diagonal travel is no faster than straight travel.
pub fn movement_direction(latch: &Latch) -> Vector3<f32> {
    let axis = |pos: Action, neg: Action| -> f32 {
        match (latch.is_active(pos), latch.is_active(neg)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    };
    let dir = Vector3::new(
        axis(Action::TrailerDown, Action::TrailerUp),
        0.0,
        axis(Action::TrailerLeft, Action::TrailerRight),
    );
    if dir.x != 0.0 && dir.z != 0.0 {
        dir.normalize()
    } else {
        dir
    }
}

/// Candidate next position of the trailer. Does not touch the trailer itself.
pub fn tentative_position(
    trailer: &Trailer,
    latch: &Latch,
    speed: f32,
    delta_time: f32,
) -> Point3<f32> {
    trailer.position + movement_direction(latch) * (speed * delta_time)
}
