//! Tunable constants of the simulation.

use cgmath::{Point2, Point3, Vector3};

use aabb::Aabb;
use engagement::Docking;
use input::{Action, Bindings, DEFAULT_BINDINGS};
use joint::{ALL_JOINTS, JOINT_COUNT, JointId, JointSpec};

#[cfg_attr(rustfmt, rustfmt_skip)]
quick_error! {
    #[doc = "Error encountered when validating a configuration."]
    #[derive(Debug, PartialEq)]
    pub enum ConfigError {
        #[doc = "Joint range is empty or inverted."]
        InvertedRange(joint: JointId, min: f32, max: f32) {
            description("Joint range is inverted")
            display("Joint {} range [{}, {}] is inverted", joint, min, max)
        }

        #[doc = "Initial joint value lies outside the joint range."]
        InitialOutOfRange(joint: JointId, value: f32) {
            description("Initial joint value out of range")
            display("Joint {} starts at {} outside its range", joint, value)
        }

        #[doc = "Truck value is not exactly one of the joint bounds."]
        TruckValueNotBound(joint: JointId, value: f32) {
            description("Truck value is not a joint bound")
            display("Joint {} truck value {} is not one of its bounds", joint, value)
        }

        #[doc = "Joint step rate is not positive."]
        NonPositiveRate(joint: JointId, rate: f32) {
            description("Joint rate must be positive")
            display("Joint {} rate {} must be positive", joint, rate)
        }

        #[doc = "Local bounding box is degenerate."]
        InvalidBounds(what: &'static str) {
            description("Degenerate bounding box")
            display("Bounding box of the {} is degenerate", what)
        }

        #[doc = "Docking duration is not positive."]
        NonPositiveDuration(duration: f32) {
            description("Docking duration must be positive")
            display("Docking duration {} must be positive", duration)
        }

        #[doc = "Docking speed-up is not positive."]
        NonPositiveSpeedup(speedup: f32) {
            description("Docking speed-up must be positive")
            display("Docking speed-up {} must be positive", speedup)
        }

        #[doc = "Trailer speed is negative."]
        NegativeSpeed(speed: f32) {
            description("Trailer speed must not be negative")
            display("Trailer speed {} must not be negative", speed)
        }

        #[doc = "Control bound to more than one action."]
        DuplicateBinding(code: String) {
            description("Control bound twice")
            display("Control {} is bound to more than one action", code)
        }

        #[doc = "There is no camera to select."]
        NoCameras {
            description("At least one camera is required")
        }
    }
}

/// Validated simulation constants.
///
/// Use [`ConfigBuilder`](struct.ConfigBuilder.html) to change anything,
/// `Config::default()` gives the stock robot and trailer.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) joints: [JointSpec; JOINT_COUNT],
    pub(crate) truck_position: Point2<f32>,
    pub(crate) truck_bounds: Aabb,
    pub(crate) trailer_position: Point3<f32>,
    pub(crate) trailer_bounds: Aabb,
    pub(crate) trailer_speed: f32,
    pub(crate) docking: Docking,
    pub(crate) camera_count: usize,
    pub(crate) bindings: Bindings,
}

impl Config {
    /// Start building a configuration from the defaults.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Spec of the given joint.
    pub fn joint(
        &self,
        id: JointId,
    ) -> JointSpec {
        self.joints[id.index()]
    }

    /// Docking animation parameters.
    pub fn docking(&self) -> &Docking {
        &self.docking
    }

    /// Trailer speed in units per second.
    pub fn trailer_speed(&self) -> f32 {
        self.trailer_speed
    }

    /// Control to action table.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }
}

impl Default for Config {
    fn default() -> Self {
        let builder = ConfigBuilder::new();
        let mut bindings = Bindings::default();
        for &(code, action) in builder.bindings.iter() {
            bindings.bind(code, action);
        }
        Config {
            joints: builder.joints,
            truck_position: builder.truck_position,
            truck_bounds: builder.truck_bounds,
            trailer_position: builder.trailer_position,
            trailer_bounds: builder.trailer_bounds,
            trailer_speed: builder.trailer_speed,
            docking: builder.docking,
            camera_count: builder.camera_count,
            bindings,
        }
    }
}

/// Chained setters over the stock configuration.
#[derive(Clone, Debug)]
pub struct ConfigBuilder {
    joints: [JointSpec; JOINT_COUNT],
    truck_position: Point2<f32>,
    truck_bounds: Aabb,
    trailer_position: Point3<f32>,
    trailer_bounds: Aabb,
    trailer_speed: f32,
    docking: Docking,
    camera_count: usize,
    bindings: Vec<(&'static str, Action)>,
}

impl ConfigBuilder {
    /// Builder primed with the stock robot and trailer.
    pub fn new() -> Self {
        let mut joints = [JointSpec::default_for(JointId::Head); JOINT_COUNT];
        for &id in ALL_JOINTS.iter() {
            joints[id.index()] = JointSpec::default_for(id);
        }
        ConfigBuilder {
            joints,
            truck_position: Point2::new(0.0, 0.0),
            truck_bounds: Aabb::new(Point3::new(-100.0, 0.0, -35.0), Point3::new(20.0, 80.0, 35.0)),
            trailer_position: Point3::new(-150.0, 30.0, -250.0),
            trailer_bounds: Aabb::new(Point3::new(-75.0, -30.0, -35.0), Point3::new(75.0, 60.0, 35.0)),
            trailer_speed: 100.0,
            docking: Docking::default(),
            camera_count: 4,
            bindings: DEFAULT_BINDINGS.to_vec(),
        }
    }

    /// Replace the spec of one joint.
    pub fn joint(
        &mut self,
        id: JointId,
        spec: JointSpec,
    ) -> &mut Self {
        self.joints[id.index()] = spec;
        self
    }

    /// Ground position of the truck.
    pub fn truck_position(
        &mut self,
        x: f32,
        z: f32,
    ) -> &mut Self {
        self.truck_position = Point2::new(x, z);
        self
    }

    /// Truck bounds relative to its origin.
    pub fn truck_bounds(
        &mut self,
        bounds: Aabb,
    ) -> &mut Self {
        self.truck_bounds = bounds;
        self
    }

    /// Starting position of the trailer.
    pub fn trailer_position(
        &mut self,
        position: Point3<f32>,
    ) -> &mut Self {
        self.trailer_position = position;
        self
    }

    /// Trailer bounds relative to its origin.
    pub fn trailer_bounds(
        &mut self,
        bounds: Aabb,
    ) -> &mut Self {
        self.trailer_bounds = bounds;
        self
    }

    /// Free trailer speed in units per second.
    pub fn trailer_speed(
        &mut self,
        speed: f32,
    ) -> &mut Self {
        self.trailer_speed = speed;
        self
    }

    /// Docked trailer position relative to the truck.
    pub fn docking_offset(
        &mut self,
        offset: Vector3<f32>,
    ) -> &mut Self {
        self.docking.offset = offset;
        self
    }

    /// Scaled duration of the docking animation.
    pub fn docking_duration(
        &mut self,
        duration: f32,
    ) -> &mut Self {
        self.docking.duration = duration;
        self
    }

    /// Speed-up of the docking animation.
    pub fn docking_speedup(
        &mut self,
        speedup: f32,
    ) -> &mut Self {
        self.docking.speedup = speedup;
        self
    }

    /// Number of selectable cameras.
    pub fn camera_count(
        &mut self,
        count: usize,
    ) -> &mut Self {
        self.camera_count = count;
        self
    }

    /// Bind a control to an action, replacing any binding of that action.
    pub fn bind(
        &mut self,
        code: &'static str,
        action: Action,
    ) -> &mut Self {
        self.bindings.retain(|&(_, bound)| bound != action);
        self.bindings.push((code, action));
        self
    }

    /// Remove every binding.
    pub fn clear_bindings(&mut self) -> &mut Self {
        self.bindings.clear();
        self
    }

    /// Validate and produce the configuration.
    pub fn build(&self) -> Result<Config, ConfigError> {
        for &id in ALL_JOINTS.iter() {
            let spec = self.joints[id.index()];
            if !(spec.min < spec.max) {
                return Err(ConfigError::InvertedRange(id, spec.min, spec.max));
            }
            if !(spec.initial >= spec.min && spec.initial <= spec.max) {
                return Err(ConfigError::InitialOutOfRange(id, spec.initial));
            }
            if spec.truck != spec.min && spec.truck != spec.max {
                return Err(ConfigError::TruckValueNotBound(id, spec.truck));
            }
            if !(spec.rate > 0.0) {
                return Err(ConfigError::NonPositiveRate(id, spec.rate));
            }
        }
        if !self.truck_bounds.is_valid() {
            return Err(ConfigError::InvalidBounds("truck"));
        }
        if !self.trailer_bounds.is_valid() {
            return Err(ConfigError::InvalidBounds("trailer"));
        }
        if !(self.docking.duration > 0.0) {
            return Err(ConfigError::NonPositiveDuration(self.docking.duration));
        }
        if !(self.docking.speedup > 0.0) {
            return Err(ConfigError::NonPositiveSpeedup(self.docking.speedup));
        }
        if !(self.trailer_speed >= 0.0) {
            return Err(ConfigError::NegativeSpeed(self.trailer_speed));
        }
        if self.camera_count == 0 {
            return Err(ConfigError::NoCameras);
        }

        let mut bindings = Bindings::default();
        for &(code, action) in self.bindings.iter() {
            if bindings.bind(code, action).is_some() {
                return Err(ConfigError::DuplicateBinding(code.to_string()));
            }
        }

        Ok(Config {
            joints: self.joints,
            truck_position: self.truck_position,
            truck_bounds: self.truck_bounds,
            trailer_position: self.trailer_position,
            trailer_bounds: self.trailer_bounds,
            trailer_speed: self.trailer_speed,
            docking: self.docking,
            camera_count: self.camera_count,
            bindings,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder::new()
    }
}
