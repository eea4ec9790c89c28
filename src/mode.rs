use joint::JointModel;

/// Configuration the robot is recognized in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Anything that is not exactly the truck configuration.
    Robot,
    /// Every joint sits at its truck-canonical value.
    Truck,
}

/// Classify the current joint configuration.
///
/// Comparison is exact: a joint only counts as folded when it holds the
/// very bound the driver saturates to. A value a single ulp away from the
/// bound classifies as `Robot`.
pub fn classify(joints: &JointModel) -> Mode {
    if joints.iter().all(|(_, joint)| joint.is_folded()) {
        Mode::Truck
    } else {
        Mode::Robot
    }
}
