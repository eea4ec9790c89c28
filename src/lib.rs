//! Simulation core of a robot that folds into a truck and hitches a trailer.
//!
//! ## Overview
//!
//! The robot has five joints (head, legs, feet and both arms) driven by held
//! actions. When every joint sits exactly at its truck-canonical bound the
//! robot is in truck mode, and the trailer, moved around with directional
//! actions, docks on contact with the truck.
//!
//! Everything lives in a [`Simulation`], fed with input edges and ticked once
//! per frame by an external loop. A renderer reads joint values and positions
//! back, either directly or through the transform hierarchy of a [`Rig`].
//!
//! ```rust,no_run
//! # extern crate robotruck;
//! # fn main() {
//! let mut sim = robotruck::Simulation::new(robotruck::Config::default());
//! let mut rig = robotruck::Rig::new();
//! loop {
//!     // feed input: sim.press_key("KeyQ"), sim.release_key("KeyQ"), ...
//!     sim.tick(1.0 / 60.0);
//!     rig.update(&sim);
//!     let _head = rig.world_transform(robotruck::Part::Head);
//! }
//! # }
//! ```
//!
//! [`Simulation`]: struct.Simulation.html
//! [`Rig`]: struct.Rig.html

extern crate arrayvec;
extern crate cgmath;
extern crate froggy;
#[macro_use]
extern crate log;
extern crate mint;
#[macro_use]
extern crate quick_error;
extern crate vec_map;

mod aabb;
mod config;
pub mod engagement;
pub mod input;
mod joint;
mod mode;
mod nudge;
mod rig;
mod simulation;
pub mod trailer;
mod vehicle;
mod view;

pub use aabb::Aabb;
pub use config::{Config, ConfigBuilder, ConfigError};
pub use engagement::{Docking, Engagement};
pub use input::{Action, Bindings, Direction, Latch};
pub use joint::{ALL_JOINTS, JOINT_COUNT, Joint, JointId, JointModel, JointSpec};
pub use mode::{Mode, classify};
pub use nudge::{Nudge, PendingNudges};
pub use rig::{ALL_PARTS, NodeTransform, Part, Rig};
pub use simulation::Simulation;
pub use trailer::Trailer;
pub use vehicle::VehiclePose;
pub use view::View;

/// Position in world space.
pub type Position = cgmath::Point3<f32>;
/// Displacement in world space.
pub type Vector = cgmath::Vector3<f32>;
