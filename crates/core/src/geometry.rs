//! Core footprint and surface traits.

use crate::bounds::AABB2D;
use crate::Result;
use nalgebra::RealField;

/// Display identity of a placed pallet, e.g. `pallet_3`.
pub type PalletId = String;

/// Builds the display name for a 0-based placement index.
pub fn pallet_name(index: usize) -> PalletId {
    format!("pallet_{}", index + 1)
}

/// Something with a rectangular footprint that can be placed on a [`Surface`].
pub trait Footprint: Clone + Send + Sync {
    /// The coordinate type.
    type Scalar: RealField + Copy;

    /// Extent across the bed (x axis).
    fn width(&self) -> Self::Scalar;

    /// Extent along the bed (z axis).
    fn length(&self) -> Self::Scalar;

    /// Vertical extent (y axis).
    fn height(&self) -> Self::Scalar;

    /// Area covered on the bed plane.
    fn area(&self) -> Self::Scalar {
        self.width() * self.length()
    }

    /// Footprint rectangle when anchored at `(x, z)`.
    fn footprint_at(&self, x: Self::Scalar, z: Self::Scalar) -> AABB2D<Self::Scalar> {
        AABB2D::from_origin(x, z, self.width(), self.length())
    }

    /// Validates the dimensions and returns an error if any is unusable.
    fn validate(&self) -> Result<()>;
}

/// A rectangular surface footprints are arranged on.
pub trait Surface: Clone + Send + Sync {
    /// The coordinate type.
    type Scalar: RealField + Copy;

    /// Extent across the surface (x axis).
    fn width(&self) -> Self::Scalar;

    /// Extent along the surface (z axis).
    fn length(&self) -> Self::Scalar;

    /// Area of the surface.
    fn area(&self) -> Self::Scalar {
        self.width() * self.length()
    }

    /// The whole surface as a rectangle anchored at the origin.
    fn bounds(&self) -> AABB2D<Self::Scalar> {
        AABB2D::from_origin(
            nalgebra::zero::<Self::Scalar>(),
            nalgebra::zero::<Self::Scalar>(),
            self.width(),
            self.length(),
        )
    }

    /// True when both extents are strictly positive. NaN extents are unusable.
    fn is_usable(&self) -> bool {
        let zero = nalgebra::zero::<Self::Scalar>();
        self.width() > zero && self.length() > zero
    }

    /// Validates the surface and returns an error if it is unusable.
    fn validate(&self) -> Result<()>;
}
