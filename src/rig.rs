//! Explicit transform hierarchy for a scene-graph renderer.
//!
//! The rig never feeds back into the simulation: it is rebuilt from the
//! joint values and positions once per frame with [`Rig::update`], and a
//! renderer reads world transforms out of it.
//!
//! [`Rig::update`]: struct.Rig.html#method.update

use cgmath::{self, Point3, Quaternion, Rad, Rotation3, Vector3};
use cgmath::Transform as Transform_;
use froggy;
use mint;
use vec_map::VecMap;

use joint::JointId;
use simulation::Simulation;

pub(crate) type Transform = cgmath::Decomposed<Vector3<f32>, Quaternion<f32>>;

/// Named node of the rig.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Part {
    /// Robot root, placed at the vehicle pose.
    Body,
    /// Head pivot.
    Head,
    /// Waist/leg pivot.
    Legs,
    /// Foot pivot, child of `Legs`.
    Feet,
    /// Left arm anchor.
    LeftArm,
    /// Right arm anchor.
    RightArm,
    /// Trailer root.
    Trailer,
}

/// All parts, parents before children.
pub const ALL_PARTS: [Part; 7] = [
    Part::Body,
    Part::Head,
    Part::Legs,
    Part::Feet,
    Part::LeftArm,
    Part::RightArm,
    Part::Trailer,
];

/// Position, rotation and scale of a rig node.
#[derive(Clone, Debug)]
pub struct NodeTransform {
    /// Position.
    pub position: mint::Point3<f32>,
    /// Orientation.
    pub orientation: mint::Quaternion<f32>,
    /// Scale.
    pub scale: f32,
}

impl From<Transform> for NodeTransform {
    fn from(tf: Transform) -> Self {
        let pos: mint::Vector3<f32> = tf.disp.into();
        NodeTransform {
            position: pos.into(),
            orientation: tf.rot.into(),
            scale: tf.scale,
        }
    }
}

#[derive(Debug)]
struct RigNode {
    part: Part,
    transform: Transform,
    parent: Option<froggy::Pointer<RigNode>>,
}

/// Arena of named nodes with parent links.
pub struct Rig {
    nodes: froggy::Storage<RigNode>,
    parts: VecMap<froggy::Pointer<RigNode>>,
}

impl Rig {
    /// Build the robot and trailer hierarchy in rest pose.
    pub fn new() -> Self {
        let mut rig = Rig {
            nodes: froggy::Storage::new(),
            parts: VecMap::with_capacity(ALL_PARTS.len()),
        };
        for &part in ALL_PARTS.iter() {
            let parent = Rig::parent_of(part).map(|p| rig.parts[p as usize].clone());
            let transform = Transform {
                scale: 1.0,
                rot: Quaternion::new(1.0, 0.0, 0.0, 0.0),
                disp: Rig::anchor(part),
            };
            let ptr = rig.nodes.create(RigNode { part, transform, parent });
            rig.parts.insert(part as usize, ptr);
        }
        rig
    }

    fn parent_of(part: Part) -> Option<Part> {
        match part {
            Part::Body | Part::Trailer => None,
            Part::Feet => Some(Part::Legs),
            _ => Some(Part::Body),
        }
    }

    /// Rest offset of a node relative to its parent.
    fn anchor(part: Part) -> Vector3<f32> {
        match part {
            Part::Body | Part::Trailer => Vector3::new(0.0, 0.0, 0.0),
            Part::Head => Vector3::new(10.0, 60.0, 0.0),
            Part::Legs => Vector3::new(5.0, -5.0, 0.0),
            Part::Feet => Vector3::new(5.0, -95.0, 0.0),
            Part::LeftArm => Vector3::new(-10.0, 50.0, 45.0),
            Part::RightArm => Vector3::new(-10.0, 50.0, -45.0),
        }
    }

    /// Parent of `part` in the hierarchy.
    pub fn parent(
        &self,
        part: Part,
    ) -> Option<Part> {
        let node = &self.nodes[&self.parts[part as usize]];
        node.parent.as_ref().map(|ptr| self.nodes[ptr].part)
    }

    /// Pull joint values and positions out of the simulation.
    pub fn update(
        &mut self,
        sim: &Simulation,
    ) {
        let joints = sim.joints();
        let turn = |id: JointId| Quaternion::from_angle_z(Rad(joints.get(id)));

        self.node_mut(Part::Body).disp = sim.truck().offset();
        self.node_mut(Part::Head).rot = turn(JointId::Head);
        self.node_mut(Part::Legs).rot = turn(JointId::Legs);
        self.node_mut(Part::Feet).rot = turn(JointId::Feet);
        self.node_mut(Part::LeftArm).disp.z = joints.get(JointId::LeftArm);
        self.node_mut(Part::RightArm).disp.z = joints.get(JointId::RightArm);
        let trailer: Point3<f32> = sim.trailer().position();
        self.node_mut(Part::Trailer).disp = Vector3::new(trailer.x, trailer.y, trailer.z);
    }

    fn node_mut(
        &mut self,
        part: Part,
    ) -> &mut Transform {
        let ptr = &self.parts[part as usize];
        &mut self.nodes[ptr].transform
    }

    fn world(
        &self,
        ptr: &froggy::Pointer<RigNode>,
    ) -> Transform {
        let node = &self.nodes[ptr];
        match node.parent {
            Some(ref parent) => self.world(parent).concat(&node.transform),
            None => node.transform,
        }
    }

    /// Transform of `part` relative to its parent.
    pub fn local_transform(
        &self,
        part: Part,
    ) -> NodeTransform {
        self.nodes[&self.parts[part as usize]].transform.into()
    }

    /// Transform of `part` relative to the world origin.
    pub fn world_transform(
        &self,
        part: Part,
    ) -> NodeTransform {
        self.world(&self.parts[part as usize]).into()
    }
}

impl Default for Rig {
    fn default() -> Self {
        Rig::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Config;
    use input::Action;

    fn close(a: mint::Point3<f32>, b: [f32; 3]) -> bool {
        (a.x - b[0]).abs() < 1e-3 && (a.y - b[1]).abs() < 1e-3 && (a.z - b[2]).abs() < 1e-3
    }

    #[test]
    fn hierarchy_links() {
        let rig = Rig::new();
        assert_eq!(rig.parent(Part::Feet), Some(Part::Legs));
        assert_eq!(rig.parent(Part::Head), Some(Part::Body));
        assert_eq!(rig.parent(Part::Trailer), None);
    }

    #[test]
    fn rest_pose_world_positions() {
        let sim = Simulation::new(Config::default());
        let mut rig = Rig::new();
        rig.update(&sim);
        assert!(close(rig.world_transform(Part::Head).position, [10.0, 60.0, 0.0]));
        assert!(close(rig.world_transform(Part::Feet).position, [10.0, -100.0, 0.0]));
        assert!(close(rig.world_transform(Part::LeftArm).position, [-10.0, 50.0, 45.0]));
        assert!(close(rig.world_transform(Part::Trailer).position, [-150.0, 30.0, -250.0]));
    }

    #[test]
    fn folded_legs_carry_feet() {
        let mut sim = Simulation::new(Config::default());
        sim.activate(Action::LegsIn);
        sim.activate(Action::ArmsIn);
        sim.tick(1.0);
        let mut rig = Rig::new();
        rig.update(&sim);
        assert!(close(rig.world_transform(Part::Feet).position, [-90.0, -10.0, 0.0]));
        assert!(close(rig.world_transform(Part::LeftArm).position, [-10.0, 50.0, 25.0]));
        assert!(close(rig.world_transform(Part::RightArm).position, [-10.0, 50.0, -25.0]));
        assert!(close(rig.local_transform(Part::Feet).position, [5.0, -95.0, 0.0]));
    }
}
