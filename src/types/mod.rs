//! Shared types used throughout the library.

mod vertex_attributes;

pub use vertex_attributes::VertexAttributes;

use glam::Vec3;
use serde::Serialize;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl BoundingBox {
    /// Smallest box holding every point, or `None` for no points.
    pub fn from_points(points: impl IntoIterator<Item = [f32; 3]>) -> Option<Self> {
        let mut points = points.into_iter().map(Vec3::from_array);
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));

        Some(Self {
            min: min.to_array(),
            max: max.to_array(),
        })
    }

    /// Edge lengths along x, y and z.
    pub fn dimensions(&self) -> [f32; 3] {
        (Vec3::from_array(self.max) - Vec3::from_array(self.min)).to_array()
    }

    pub fn center(&self) -> [f32; 3] {
        Vec3::from_array(self.min)
            .lerp(Vec3::from_array(self.max), 0.5)
            .to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let points = [[1.0, -2.0, 0.5], [-1.0, 3.0, 0.0], [0.0, 0.0, 2.0]];
        let bounds = BoundingBox::from_points(points).unwrap();

        assert_eq!(bounds.min, [-1.0, -2.0, 0.0]);
        assert_eq!(bounds.max, [1.0, 3.0, 2.0]);
        assert_eq!(bounds.dimensions(), [2.0, 5.0, 2.0]);
        assert_eq!(bounds.center(), [0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_single_point_has_zero_size() {
        let bounds = BoundingBox::from_points([[4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(bounds.min, bounds.max);
        assert_eq!(bounds.dimensions(), [0.0; 3]);
        assert_eq!(bounds.center(), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_bounds_of_nothing() {
        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
    }
}
