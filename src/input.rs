//! Logical actions and the latch that tracks which ones are held.

use std::collections::{HashMap, HashSet};

use joint::JointId;

/// Logical action a physical control is bound to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    /// Rotate the head towards the truck configuration.
    HeadIn,
    /// Rotate the head towards the robot configuration.
    HeadOut,
    /// Rotate the legs towards the truck configuration.
    LegsIn,
    /// Rotate the legs towards the robot configuration.
    LegsOut,
    /// Rotate the feet towards the truck configuration.
    FeetIn,
    /// Rotate the feet towards the robot configuration.
    FeetOut,
    /// Pull both arms into the body.
    ArmsIn,
    /// Push both arms away from the body.
    ArmsOut,
    /// Move the trailer left (towards +Z).
    TrailerLeft,
    /// Move the trailer right (towards -Z).
    TrailerRight,
    /// Move the trailer up the screen (towards -X).
    TrailerUp,
    /// Move the trailer down the screen (towards +X).
    TrailerDown,
    /// Select the camera with the given index.
    SwitchCamera(usize),
    /// Flip wireframe rendering of all materials.
    ToggleWireframe,
}

/// Direction of a nudge along a joint's range.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Towards `max`.
    Increase,
    /// Towards `min`.
    Decrease,
}

impl Direction {
    /// `1.0` or `-1.0`.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Increase => 1.0,
            Direction::Decrease => -1.0,
        }
    }
}

impl Action {
    /// Joints moved by this action, with the direction each one is pushed.
    ///
    /// Arms are always moved together with mirrored signs.
    pub fn nudges(self) -> &'static [(JointId, Direction)] {
        use self::Direction::*;
        use joint::JointId::*;
        match self {
            Action::HeadIn => &[(Head, Increase)],
            Action::HeadOut => &[(Head, Decrease)],
            Action::LegsIn => &[(Legs, Decrease)],
            Action::LegsOut => &[(Legs, Increase)],
            Action::FeetIn => &[(Feet, Decrease)],
            Action::FeetOut => &[(Feet, Increase)],
            Action::ArmsIn => &[(LeftArm, Decrease), (RightArm, Increase)],
            Action::ArmsOut => &[(LeftArm, Increase), (RightArm, Decrease)],
            _ => &[],
        }
    }

    /// Whether this action drives free trailer motion.
    pub fn is_movement(self) -> bool {
        match self {
            Action::TrailerLeft | Action::TrailerRight | Action::TrailerUp | Action::TrailerDown => true,
            _ => false,
        }
    }

    /// Whether this action only matters on its activation edge.
    pub fn is_one_shot(self) -> bool {
        match self {
            Action::SwitchCamera(_) | Action::ToggleWireframe => true,
            _ => false,
        }
    }
}

/// Actions that transform the robot, in the order the driver polls them.
pub const TRANSFORM_ACTIONS: [Action; 8] = [
    Action::HeadIn,
    Action::HeadOut,
    Action::LegsIn,
    Action::LegsOut,
    Action::FeetIn,
    Action::FeetOut,
    Action::ArmsIn,
    Action::ArmsOut,
];

/// Tracks which logical actions are currently held.
#[derive(Clone, Debug, Default)]
pub struct Latch {
    active: HashSet<Action>,
}

impl Latch {
    /// Create a latch with nothing held.
    pub fn new() -> Self {
        Latch::default()
    }

    /// Mark `action` as held. Returns `true` on the activation edge,
    /// `false` if it was already held.
    pub fn on_activate(
        &mut self,
        action: Action,
    ) -> bool {
        self.active.insert(action)
    }

    /// Release `action`. Returns `true` if it was held.
    pub fn on_deactivate(
        &mut self,
        action: Action,
    ) -> bool {
        self.active.remove(&action)
    }

    /// Whether `action` is currently held.
    pub fn is_active(
        &self,
        action: Action,
    ) -> bool {
        self.active.contains(&action)
    }

    /// Release every held movement action.
    pub fn release_movement(&mut self) {
        self.active.retain(|action| !action.is_movement());
    }

    /// Release everything.
    pub fn reset(&mut self) {
        self.active.clear();
    }
}

/// One-to-one table from physical control names to logical actions.
///
/// Control names follow the DOM `KeyboardEvent.code` convention
/// (`"KeyQ"`, `"ArrowUp"`, `"Digit1"`, ...).
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    map: HashMap<String, Action>,
}

impl Bindings {
    /// Bind `code` to `action`. Returns the action previously bound to `code`, if any.
    pub fn bind<S: Into<String>>(
        &mut self,
        code: S,
        action: Action,
    ) -> Option<Action> {
        self.map.insert(code.into(), action)
    }

    /// Look up the action bound to `code`.
    pub fn action(
        &self,
        code: &str,
    ) -> Option<Action> {
        self.map.get(code).cloned()
    }

    /// Number of bound controls.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no control is bound.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// The default keyboard layout.
pub const DEFAULT_BINDINGS: [(&str, Action); 17] = [
    ("KeyQ", Action::FeetIn),
    ("KeyA", Action::FeetOut),
    ("KeyW", Action::LegsIn),
    ("KeyS", Action::LegsOut),
    ("KeyE", Action::ArmsIn),
    ("KeyD", Action::ArmsOut),
    ("KeyR", Action::HeadIn),
    ("KeyF", Action::HeadOut),
    ("ArrowLeft", Action::TrailerLeft),
    ("ArrowRight", Action::TrailerRight),
    ("ArrowUp", Action::TrailerUp),
    ("ArrowDown", Action::TrailerDown),
    ("Digit1", Action::SwitchCamera(0)),
    ("Digit2", Action::SwitchCamera(1)),
    ("Digit3", Action::SwitchCamera(2)),
    ("Digit4", Action::SwitchCamera(3)),
    ("Digit7", Action::ToggleWireframe),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_is_idempotent() {
        let mut latch = Latch::new();
        assert!(latch.on_activate(Action::HeadIn));
        assert!(!latch.on_activate(Action::HeadIn));
        assert!(latch.is_active(Action::HeadIn));
        assert!(latch.on_deactivate(Action::HeadIn));
        assert!(!latch.on_deactivate(Action::HeadIn));
        assert!(!latch.is_active(Action::HeadIn));
    }

    #[test]
    fn release_movement_keeps_transform_actions() {
        let mut latch = Latch::new();
        latch.on_activate(Action::TrailerUp);
        latch.on_activate(Action::TrailerLeft);
        latch.on_activate(Action::FeetIn);
        latch.release_movement();
        assert!(!latch.is_active(Action::TrailerUp));
        assert!(!latch.is_active(Action::TrailerLeft));
        assert!(latch.is_active(Action::FeetIn));
    }

    #[test]
    fn arms_move_mirrored() {
        let nudges = Action::ArmsIn.nudges();
        assert_eq!(nudges.len(), 2);
        assert_eq!(nudges[0].1.sign(), -nudges[1].1.sign());
        assert!(Action::TrailerUp.nudges().is_empty());
    }

    #[test]
    fn default_layout_is_one_to_one() {
        let mut bindings = Bindings::default();
        for &(code, action) in DEFAULT_BINDINGS.iter() {
            assert_eq!(bindings.bind(code, action), None);
        }
        assert_eq!(bindings.len(), DEFAULT_BINDINGS.len());
        assert_eq!(bindings.action("KeyQ"), Some(Action::FeetIn));
        assert_eq!(bindings.action("Digit4"), Some(Action::SwitchCamera(3)));
        assert_eq!(bindings.action("KeyZ"), None);
    }
}
