use cgmath::{Point3, Vector3};

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3<f32>,
    /// Maximum corner.
    pub max: Point3<f32>,
}

impl Aabb {
    /// Create a box from its two corners.
    pub fn new(
        min: Point3<f32>,
        max: Point3<f32>,
    ) -> Self {
        Aabb { min, max }
    }

    /// Whether `min` lies strictly below `max` on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.x < self.max.x && self.min.y < self.max.y && self.min.z < self.max.z
    }

    /// The same box moved by `offset`.
    pub fn translated(
        &self,
        offset: Vector3<f32>,
    ) -> Self {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Strict overlap on all three axes. Boxes that merely touch do not overlap.
    pub fn overlaps(
        &self,
        other: &Aabb,
    ) -> bool {
        self.min.x < other.max.x && other.min.x < self.max.x &&
        self.min.y < other.max.y && other.min.y < self.max.y &&
        self.min.z < other.max.z && other.min.z < self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(x: f32, y: f32, z: f32, half: f32) -> Aabb {
        Aabb::new(
            Point3::new(x - half, y - half, z - half),
            Point3::new(x + half, y + half, z + half),
        )
    }

    #[test]
    fn overlap_needs_all_axes() {
        let a = cube(0.0, 0.0, 0.0, 1.0);
        assert!(a.overlaps(&cube(1.5, 0.5, -0.5, 1.0)));
        assert!(!a.overlaps(&cube(1.5, 0.5, 3.0, 1.0)));
        assert!(!a.overlaps(&cube(0.0, 2.5, 0.0, 1.0)));
    }

    #[test]
    fn touching_is_not_overlap() {
        let a = cube(0.0, 0.0, 0.0, 1.0);
        assert!(!a.overlaps(&cube(2.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn overlap_is_symmetric() {
        let boxes = [
            cube(0.0, 0.0, 0.0, 1.0),
            cube(1.0, 1.0, 1.0, 0.5),
            cube(2.0, 0.0, 0.0, 1.0),
            cube(-3.0, 0.2, 0.1, 2.5),
            Aabb::new(Point3::new(-10.0, 0.0, -10.0), Point3::new(10.0, 10.0, 10.0)),
        ];
        for a in boxes.iter() {
            for b in boxes.iter() {
                assert_eq!(a.overlaps(b), b.overlaps(a));
            }
        }
    }

    #[test]
    fn translation_moves_both_corners() {
        let a = cube(0.0, 0.0, 0.0, 1.0).translated(Vector3::new(5.0, 0.0, -2.0));
        assert_eq!(a.min, Point3::new(4.0, -1.0, -3.0));
        assert_eq!(a.max, Point3::new(6.0, 1.0, -1.0));
        assert!(a.is_valid());
    }
}
