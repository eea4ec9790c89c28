//! Articulated degrees of freedom of the robot.

use std::f32::consts::FRAC_PI_2;
use std::fmt;

use vec_map::VecMap;

/// Number of joints tracked by the [`JointModel`](struct.JointModel.html).
pub const JOINT_COUNT: usize = 5;

/// Identifier of a single articulated degree of freedom.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum JointId {
    /// Head pitch, rotation about the local Z axis.
    Head,
    /// Waist/leg rotation about the local Z axis.
    Legs,
    /// Foot rotation about the local Z axis.
    Feet,
    /// Lateral displacement of the left arm along Z.
    LeftArm,
    /// Lateral displacement of the right arm along Z.
    RightArm,
}

/// All joints, in storage order.
pub const ALL_JOINTS: [JointId; JOINT_COUNT] = [
    JointId::Head,
    JointId::Legs,
    JointId::Feet,
    JointId::LeftArm,
    JointId::RightArm,
];

impl JointId {
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for JointId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            JointId::Head => "head",
            JointId::Legs => "legs",
            JointId::Feet => "feet",
            JointId::LeftArm => "left arm",
            JointId::RightArm => "right arm",
        };
        f.write_str(name)
    }
}

/// Static description of a joint: its range, rest value,
/// value in the truck configuration and the step rate per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointSpec {
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
    /// Value at scene build.
    pub initial: f32,
    /// Canonical value in the truck configuration. Must be one of the bounds.
    pub truck: f32,
    /// Units (radians or scene units) per second.
    pub rate: f32,
}

impl JointSpec {
    /// Default spec of the given joint, as laid out in the robot model.
    pub fn default_for(id: JointId) -> Self {
        match id {
            JointId::Head => JointSpec {
                min: 0.0,
                max: FRAC_PI_2,
                initial: 0.0,
                truck: FRAC_PI_2,
                rate: 5.0,
            },
            JointId::Legs | JointId::Feet => JointSpec {
                min: -FRAC_PI_2,
                max: 0.0,
                initial: 0.0,
                truck: -FRAC_PI_2,
                rate: 5.0,
            },
            JointId::LeftArm => JointSpec {
                min: 25.0,
                max: 45.0,
                initial: 45.0,
                truck: 25.0,
                rate: 50.0,
            },
            JointId::RightArm => JointSpec {
                min: -45.0,
                max: -25.0,
                initial: -45.0,
                truck: -25.0,
                rate: 50.0,
            },
        }
    }
}

/// A single joint with its current value.
#[derive(Clone, Debug)]
pub struct Joint {
    spec: JointSpec,
    value: f32,
}

impl Joint {
    fn new(spec: JointSpec) -> Self {
        let mut joint = Joint { spec, value: spec.initial };
        joint.set(spec.initial);
        joint
    }

    fn set(&mut self, raw: f32) -> f32 {
        // Saturate, no wraparound. NaN leaves the value untouched.
        if !raw.is_nan() {
            self.value = raw.max(self.spec.min).min(self.spec.max);
        }
        self.value
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Static description.
    pub fn spec(&self) -> &JointSpec {
        &self.spec
    }

    /// Whether the joint sits exactly at its truck-canonical value.
    pub fn is_folded(&self) -> bool {
        self.value == self.spec.truck
    }
}

/// Fixed set of named joints.
///
/// The value of every joint always lies within its `[min, max]` range:
/// out-of-range requests are silently saturated.
#[derive(Clone, Debug)]
pub struct JointModel {
    joints: VecMap<Joint>,
}

impl JointModel {
    /// Create the model from one spec per joint.
    pub fn new<F>(spec_of: F) -> Self
    where
        F: Fn(JointId) -> JointSpec,
    {
        let mut joints = VecMap::with_capacity(JOINT_COUNT);
        for &id in ALL_JOINTS.iter() {
            joints.insert(id.index(), Joint::new(spec_of(id)));
        }
        JointModel { joints }
    }

    /// Set the joint to `raw`, saturated to its range. Returns the value actually stored.
    pub fn clamped_set(
        &mut self,
        id: JointId,
        raw: f32,
    ) -> f32 {
        self.joints[id.index()].set(raw)
    }

    /// Current value of the joint.
    pub fn get(
        &self,
        id: JointId,
    ) -> f32 {
        self.joints[id.index()].value
    }

    /// Access the joint itself.
    pub fn joint(
        &self,
        id: JointId,
    ) -> &Joint {
        &self.joints[id.index()]
    }

    /// Iterate over all joints in storage order.
    pub fn iter(&self) -> Joints {
        Joints {
            model: self,
            next: 0,
        }
    }
}

impl Default for JointModel {
    fn default() -> Self {
        JointModel::new(JointSpec::default_for)
    }
}

/// Iterator over `(JointId, &Joint)` pairs.
pub struct Joints<'a> {
    model: &'a JointModel,
    next: usize,
}

impl<'a> Iterator for Joints<'a> {
    type Item = (JointId, &'a Joint);

    fn next(&mut self) -> Option<Self::Item> {
        let id = *ALL_JOINTS.get(self.next)?;
        self.next += 1;
        Some((id, self.model.joint(id)))
    }
}
