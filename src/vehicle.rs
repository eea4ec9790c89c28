use cgmath::{Point2, Vector3};

use aabb::Aabb;

/// World-space placement of the robot/truck.
///
/// The vertical coordinate is fixed, so only the longitudinal (`x`) and
/// lateral (`y`, mapped to world Z) components are stored. The bounding box is
/// always derived from the current position.
#[derive(Clone, Debug)]
pub struct VehiclePose {
    position: Point2<f32>,
    local_bounds: Aabb,
}

impl VehiclePose {
    /// Place a vehicle with the given local bounds.
    pub fn new(
        position: Point2<f32>,
        local_bounds: Aabb,
    ) -> Self {
        VehiclePose { position, local_bounds }
    }

    /// Current ground position.
    pub fn position(&self) -> Point2<f32> {
        self.position
    }

    /// Move the vehicle on the ground plane.
    pub fn set_position(
        &mut self,
        position: Point2<f32>,
    ) {
        self.position = position;
    }

    /// Offset of the vehicle origin in world space.
    pub fn offset(&self) -> Vector3<f32> {
        Vector3::new(self.position.x, 0.0, self.position.y)
    }

    /// World-space bounding box.
    pub fn bounds(&self) -> Aabb {
        self.local_bounds.translated(self.offset())
    }
}
