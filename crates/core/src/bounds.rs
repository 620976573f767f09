//! Axis-aligned boxes on the bed plane and in bed space.
//!
//! The bed plane is spanned by `x` (across the trailer width) and `z` (along the
//! trailer length); `y` is vertical. Pallet footprints are [`AABB2D`] boxes on
//! that plane, render volumes are [`AABB3D`] boxes.

use nalgebra::RealField;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle on the bed plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB2D<S> {
    /// Minimum x coordinate.
    pub min_x: S,
    /// Minimum z coordinate.
    pub min_z: S,
    /// Maximum x coordinate.
    pub max_x: S,
    /// Maximum z coordinate.
    pub max_z: S,
}

impl<S: RealField + Copy> AABB2D<S> {
    /// Creates a rectangle from min/max coordinates.
    pub fn new(min_x: S, min_z: S, max_x: S, max_z: S) -> Self {
        Self {
            min_x,
            min_z,
            max_x,
            max_z,
        }
    }

    /// Creates a rectangle anchored at `(x, z)` extending `width` along x and
    /// `length` along z.
    pub fn from_origin(x: S, z: S, width: S, length: S) -> Self {
        Self::new(x, z, x + width, z + length)
    }

    /// Extent along x.
    pub fn width(&self) -> S {
        self.max_x - self.min_x
    }

    /// Extent along z.
    pub fn length(&self) -> S {
        self.max_z - self.min_z
    }

    /// Returns the area.
    pub fn area(&self) -> S {
        self.width() * self.length()
    }

    /// True when both extents are strictly positive.
    pub fn is_proper(&self) -> bool {
        self.max_x > self.min_x && self.max_z > self.min_z
    }

    /// Checks whether the interiors of two rectangles overlap by more than `tolerance`.
    ///
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Self, tolerance: S) -> bool {
        self.min_x + tolerance < other.max_x
            && other.min_x + tolerance < self.max_x
            && self.min_z + tolerance < other.max_z
            && other.min_z + tolerance < self.max_z
    }

    /// Checks whether `other` lies inside this rectangle, allowing `tolerance` slack.
    pub fn contains(&self, other: &Self, tolerance: S) -> bool {
        other.min_x >= self.min_x - tolerance
            && other.min_z >= self.min_z - tolerance
            && other.max_x <= self.max_x + tolerance
            && other.max_z <= self.max_z + tolerance
    }

    /// Shrinks the rectangle by `margin` on every side. May produce an improper box.
    pub fn shrink(&self, margin: S) -> Self {
        Self {
            min_x: self.min_x + margin,
            min_z: self.min_z + margin,
            max_x: self.max_x - margin,
            max_z: self.max_z - margin,
        }
    }
}

/// Axis-aligned box in bed space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB3D<S> {
    /// Minimum x coordinate.
    pub min_x: S,
    /// Minimum y coordinate.
    pub min_y: S,
    /// Minimum z coordinate.
    pub min_z: S,
    /// Maximum x coordinate.
    pub max_x: S,
    /// Maximum y coordinate.
    pub max_y: S,
    /// Maximum z coordinate.
    pub max_z: S,
}

impl<S: RealField + Copy> AABB3D<S> {
    /// Creates a box from min/max coordinates.
    pub fn new(min_x: S, min_y: S, min_z: S, max_x: S, max_y: S, max_z: S) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// Creates a box anchored at `(x, y, z)` sized `width` (x), `height` (y) and
    /// `length` (z).
    pub fn from_origin(x: S, y: S, z: S, width: S, height: S, length: S) -> Self {
        Self::new(x, y, z, x + width, y + height, z + length)
    }

    /// Extent along x.
    pub fn width(&self) -> S {
        self.max_x - self.min_x
    }

    /// Extent along y.
    pub fn height(&self) -> S {
        self.max_y - self.min_y
    }

    /// Extent along z.
    pub fn length(&self) -> S {
        self.max_z - self.min_z
    }

    /// Returns the volume.
    pub fn volume(&self) -> S {
        self.width() * self.height() * self.length()
    }

    /// Projects the box onto the bed plane.
    pub fn footprint(&self) -> AABB2D<S> {
        AABB2D::new(self.min_x, self.min_z, self.max_x, self.max_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_origin() {
        let r = AABB2D::from_origin(0.8, 1.2, 0.8, 1.2);
        assert_relative_eq!(r.max_x, 1.6);
        assert_relative_eq!(r.max_z, 2.4);
        assert_relative_eq!(r.area(), 0.96, epsilon = 1e-12);
        assert!(r.is_proper());
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = AABB2D::from_origin(0.0, 0.0, 0.8, 1.2);
        let b = AABB2D::from_origin(0.8, 0.0, 0.8, 1.2);
        let c = AABB2D::from_origin(0.0, 1.2, 0.8, 1.2);
        assert!(!a.overlaps(&b, 0.0));
        assert!(!a.overlaps(&c, 0.0));
    }

    #[test]
    fn test_overlap() {
        let a = AABB2D::new(0.0, 0.0, 10.0, 10.0);
        let b = AABB2D::new(5.0, 5.0, 15.0, 15.0);
        assert!(a.overlaps(&b, 1e-9));
        assert!(b.overlaps(&a, 1e-9));
        // Overlap smaller than the tolerance is ignored
        let touching = AABB2D::new(9.9999999999, 0.0, 12.0, 10.0);
        assert!(!a.overlaps(&touching, 1e-9));
    }

    #[test]
    fn test_contains_with_tolerance() {
        let bed = AABB2D::new(0.0, 0.0, 2.4, 13.6);
        let last = AABB2D::from_origin(0.8 + 0.8, 0.0, 0.8, 1.2);
        // 1.6 + 0.8 rounds slightly above 2.4
        assert!(bed.contains(&last, 1e-9));
        assert!(!bed.contains(&AABB2D::from_origin(2.0, 0.0, 0.8, 1.2), 1e-9));
    }

    #[test]
    fn test_shrink() {
        let r = AABB2D::new(0.0, 0.0, 2.5, 13.6).shrink(0.05);
        assert_relative_eq!(r.width(), 2.4, epsilon = 1e-12);
        assert_relative_eq!(r.length(), 13.5, epsilon = 1e-12);
        assert!(!AABB2D::new(0.0, 0.0, 1.0, 1.0).shrink(0.6).is_proper());
    }

    #[test]
    fn test_aabb3d() {
        let b = AABB3D::from_origin(0.0, 0.0, 0.0, 0.8, 0.6, 1.2);
        assert_relative_eq!(b.volume(), 0.576, epsilon = 1e-12);
        assert_relative_eq!(b.height(), 0.6);
        assert_eq!(b.footprint(), AABB2D::new(0.0, 0.0, 0.8, 1.2));
    }
}
