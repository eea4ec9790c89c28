//! One-tick joint intents and the driver that applies them.

use arrayvec::ArrayVec;

use input::{Direction, Latch, TRANSFORM_ACTIONS};
use joint::{JOINT_COUNT, JointId, JointModel};

/// A one-tick signed intent to move a joint towards one of its bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nudge {
    /// Joint to move.
    pub joint: JointId,
    /// Which bound to move towards.
    pub direction: Direction,
}

/// At most one nudge per joint, built fresh every tick.
#[derive(Clone, Debug, Default)]
pub struct PendingNudges {
    nudges: ArrayVec<[Nudge; JOINT_COUNT]>,
}

impl PendingNudges {
    /// Empty set.
    pub fn new() -> Self {
        PendingNudges::default()
    }

    /// Collect the nudges requested by the transformation actions held in `latch`.
    ///
    /// Opposite intents on the same joint cancel out.
    pub fn collect(latch: &Latch) -> Self {
        let mut sum = [0i8; JOINT_COUNT];
        let mut order = ArrayVec::<[JointId; JOINT_COUNT]>::new();
        for &action in TRANSFORM_ACTIONS.iter() {
            if !latch.is_active(action) {
                continue;
            }
            for &(joint, direction) in action.nudges() {
                if !order.contains(&joint) {
                    let _ = order.try_push(joint);
                }
                sum[joint.index()] += direction.sign() as i8;
            }
        }

        let mut pending = PendingNudges::new();
        for &joint in order.iter() {
            let direction = match sum[joint.index()] {
                s if s > 0 => Direction::Increase,
                s if s < 0 => Direction::Decrease,
                _ => continue,
            };
            pending.insert(Nudge { joint, direction });
        }
        pending
    }

    /// Add a nudge, replacing any earlier one on the same joint.
    pub fn insert(
        &mut self,
        nudge: Nudge,
    ) {
        if let Some(existing) = self.nudges.iter_mut().find(|n| n.joint == nudge.joint) {
            *existing = nudge;
            return;
        }
        if let Err(err) = self.nudges.try_push(nudge) {
            error!("Nudge set overflow: {:?}", err.element());
        }
    }

    /// Nudge pending for `joint`, if any.
    pub fn get(
        &self,
        joint: JointId,
    ) -> Option<Direction> {
        self.nudges
            .iter()
            .find(|n| n.joint == joint)
            .map(|n| n.direction)
    }

    /// Pending nudges.
    pub fn as_slice(&self) -> &[Nudge] {
        &self.nudges
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.nudges.is_empty()
    }

    /// Drop all pending nudges.
    pub fn clear(&mut self) {
        self.nudges.clear();
    }
}

/// Apply every pending nudge to `joints`, then clear the set.
///
/// Each nudged joint moves by `rate * delta_time` towards the requested bound
/// and saturates there.
pub fn apply(
    joints: &mut JointModel,
    pending: &mut PendingNudges,
    delta_time: f32,
) {
    for nudge in pending.as_slice() {
        let rate = joints.joint(nudge.joint).spec().rate;
        let current = joints.get(nudge.joint);
        let step = nudge.direction.sign() * rate * delta_time;
        joints.clamped_set(nudge.joint, current + step);
    }
    pending.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use input::Action;

    #[test]
    fn collects_one_nudge_per_joint() {
        let mut latch = Latch::new();
        latch.on_activate(Action::HeadIn);
        latch.on_activate(Action::ArmsOut);
        let pending = PendingNudges::collect(&latch);
        assert_eq!(pending.as_slice().len(), 3);
        assert_eq!(pending.get(JointId::Head), Some(Direction::Increase));
        assert_eq!(pending.get(JointId::LeftArm), Some(Direction::Increase));
        assert_eq!(pending.get(JointId::RightArm), Some(Direction::Decrease));
        assert_eq!(pending.get(JointId::Feet), None);
    }

    #[test]
    fn opposite_intents_cancel() {
        let mut latch = Latch::new();
        latch.on_activate(Action::FeetIn);
        latch.on_activate(Action::FeetOut);
        latch.on_activate(Action::LegsIn);
        let pending = PendingNudges::collect(&latch);
        assert_eq!(pending.get(JointId::Feet), None);
        assert_eq!(pending.get(JointId::Legs), Some(Direction::Decrease));
    }

    #[test]
    fn insert_replaces() {
        let mut pending = PendingNudges::new();
        pending.insert(Nudge { joint: JointId::Head, direction: Direction::Increase });
        pending.insert(Nudge { joint: JointId::Head, direction: Direction::Decrease });
        assert_eq!(pending.as_slice().len(), 1);
        assert_eq!(pending.get(JointId::Head), Some(Direction::Decrease));
    }

    #[test]
    fn apply_scales_by_time_and_clears() {
        let mut joints = JointModel::default();
        let mut pending = PendingNudges::new();
        pending.insert(Nudge { joint: JointId::LeftArm, direction: Direction::Decrease });
        apply(&mut joints, &mut pending, 0.1);
        assert_eq!(joints.get(JointId::LeftArm), 40.0);
        assert!(pending.is_empty());
    }

    #[test]
    fn apply_never_leaves_range() {
        let mut joints = JointModel::default();
        let mut latch = Latch::new();
        latch.on_activate(Action::HeadIn);
        latch.on_activate(Action::LegsOut);
        latch.on_activate(Action::ArmsIn);
        for step in 0..200 {
            let mut pending = PendingNudges::collect(&latch);
            apply(&mut joints, &mut pending, 0.013 * (step % 7) as f32);
            for (_, joint) in joints.iter() {
                let spec = joint.spec();
                assert!(joint.value() >= spec.min && joint.value() <= spec.max);
            }
        }
        assert!(joints.joint(JointId::Head).is_folded());
        assert!(joints.joint(JointId::LeftArm).is_folded());
        assert!(joints.joint(JointId::RightArm).is_folded());
        assert_eq!(joints.get(JointId::Legs), 0.0);
    }
}
