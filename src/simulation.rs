//! The simulation context and its per-frame step.

use cgmath::{Point2, Point3};

use aabb::Aabb;
use config::Config;
use engagement::{self, Engagement};
use input::{Action, Latch};
use joint::JointModel;
use mode::{self, Mode};
use nudge::{self, PendingNudges};
use trailer::{self, Trailer};
use vehicle::VehiclePose;
use view::View;

/// Owns every piece of mutable state: joints, held input, truck and trailer.
///
/// The external frame loop feeds input edges through [`activate`] and
/// [`deactivate`] (or [`press_key`] and [`release_key`]) and calls [`tick`]
/// once per frame. Input only affects the next tick.
///
/// ```rust
/// # extern crate robotruck;
/// # fn main() {
/// use robotruck::{Action, Config, Mode, Simulation};
///
/// let mut sim = Simulation::new(Config::default());
/// for &action in &[Action::HeadIn, Action::LegsIn, Action::FeetIn, Action::ArmsIn] {
///     sim.activate(action);
/// }
/// sim.tick(1.0);
/// assert_eq!(sim.mode(), Mode::Truck);
/// # }
/// ```
///
/// [`activate`]: #method.activate
/// [`deactivate`]: #method.deactivate
/// [`press_key`]: #method.press_key
/// [`release_key`]: #method.release_key
/// [`tick`]: #method.tick
pub struct Simulation {
    config: Config,
    joints: JointModel,
    latch: Latch,
    pending: PendingNudges,
    mode: Mode,
    truck: VehiclePose,
    trailer: Trailer,
    view: View,
}

impl Simulation {
    /// Build the scene described by `config`, robot unfolded and trailer free.
    pub fn new(config: Config) -> Self {
        let joints = JointModel::new(|id| config.joint(id));
        let mode = mode::classify(&joints);
        let truck = VehiclePose::new(config.truck_position, config.truck_bounds);
        let trailer = Trailer::new(config.trailer_position, config.trailer_bounds);
        let view = View::new(config.camera_count);
        Simulation {
            config,
            joints,
            latch: Latch::new(),
            pending: PendingNudges::new(),
            mode,
            truck,
            trailer,
            view,
        }
    }

    /// Start holding `action`.
    ///
    /// Movement actions are dropped while the trailer is docking. Camera and
    /// wireframe actions take effect right away, once per activation.
    pub fn activate(
        &mut self,
        action: Action,
    ) {
        if action.is_movement() && self.trailer.status.is_engaging() {
            debug!("Ignoring {:?} while the trailer is docking", action);
            return;
        }
        if !self.latch.on_activate(action) {
            return;
        }
        match action {
            Action::SwitchCamera(index) => {
                self.view.switch_camera(index);
            }
            Action::ToggleWireframe => {
                self.view.toggle_wireframe();
            }
            _ => (),
        }
    }

    /// Stop holding `action`.
    pub fn deactivate(
        &mut self,
        action: Action,
    ) {
        self.latch.on_deactivate(action);
    }

    /// Activate whatever action `code` is bound to. Unbound controls are ignored.
    pub fn press_key(
        &mut self,
        code: &str,
    ) {
        match self.config.bindings.action(code) {
            Some(action) => self.activate(action),
            None => trace!("Unbound control {}", code),
        }
    }

    /// Deactivate whatever action `code` is bound to.
    pub fn release_key(
        &mut self,
        code: &str,
    ) {
        if let Some(action) = self.config.bindings.action(code) {
            self.deactivate(action);
        }
    }

    /// Advance the simulation by `delta_time` seconds.
    ///
    /// Steps run in a fixed order: joint nudges, mode classification,
    /// trailer motion intent, then collision and engagement.
    pub fn tick(
        &mut self,
        delta_time: f32,
    ) {
        let dt = if delta_time.is_finite() && delta_time >= 0.0 {
            delta_time
        } else {
            warn!("Treating frame time {} as zero", delta_time);
            0.0
        };

        // the docking animation holds the robot as well as the trailer
        let docking = self.trailer.status.is_engaging();
        if docking {
            self.latch.release_movement();
        } else {
            self.pending = PendingNudges::collect(&self.latch);
            nudge::apply(&mut self.joints, &mut self.pending, dt);
        }

        let mode = mode::classify(&self.joints);
        if mode != self.mode {
            info!("Now in {:?} mode", mode);
            self.mode = mode;
        }
        if mode == Mode::Robot {
            engagement::decouple(&mut self.trailer);
        }

        let tentative = if self.trailer.status.is_free() {
            Some(trailer::tentative_position(
                &self.trailer,
                &self.latch,
                self.config.trailer_speed,
                dt,
            ))
        } else {
            None
        };

        engagement::resolve(
            &mut self.trailer,
            mode,
            &self.truck,
            tentative,
            &self.config.docking,
            dt,
        );
    }

    /// Move the truck on the ground plane.
    pub fn set_truck_position(
        &mut self,
        x: f32,
        z: f32,
    ) {
        self.truck.set_position(Point2::new(x, z));
    }

    /// Configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Joint values.
    pub fn joints(&self) -> &JointModel {
        &self.joints
    }

    /// Held actions.
    pub fn latch(&self) -> &Latch {
        &self.latch
    }

    /// Mode as of the last tick.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Truck pose.
    pub fn truck(&self) -> &VehiclePose {
        &self.truck
    }

    /// Truck bounds in world space.
    pub fn truck_bounds(&self) -> Aabb {
        self.truck.bounds()
    }

    /// Trailer state.
    pub fn trailer(&self) -> &Trailer {
        &self.trailer
    }

    /// Trailer world position.
    pub fn trailer_position(&self) -> Point3<f32> {
        self.trailer.position
    }

    /// Trailer bounds in world space.
    pub fn trailer_bounds(&self) -> Aabb {
        self.trailer.bounds()
    }

    /// Trailer engagement status.
    pub fn engagement(&self) -> &Engagement {
        &self.trailer.status
    }

    /// Camera and wireframe state.
    pub fn view(&self) -> &View {
        &self.view
    }
}
