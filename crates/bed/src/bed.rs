//! The trailer loading bed.

use nalgebra::Vector3;
use pallet_layout_core::config::{Config, DEFAULT_TRAILER_HEIGHT};
use pallet_layout_core::geometry::Surface;
use pallet_layout_core::{ensure_bed_dimension, Result, AABB3D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rectangle pallets are arranged on.
///
/// Width runs along x, length along z. The height is not used for placement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bed {
    /// Dimensions (width, length, height).
    dimensions: Vector3<f64>,
}

impl Bed {
    /// Creates a bed with the default interior height.
    pub fn new(width: f64, length: f64) -> Self {
        Self {
            dimensions: Vector3::new(width, length, DEFAULT_TRAILER_HEIGHT),
        }
    }

    /// Creates the configured trailer bed.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.trailer_width, config.trailer_length)
            .with_height(config.trailer_height)
    }

    /// Sets the interior height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.dimensions.z = height;
        self
    }

    /// Returns the dimensions (width, length, height).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the interior height.
    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    pub(crate) fn set_width(&mut self, width: f64) {
        self.dimensions.x = width;
    }

    pub(crate) fn set_length(&mut self, length: f64) {
        self.dimensions.y = length;
    }

    pub(crate) fn set_height(&mut self, height: f64) {
        self.dimensions.z = height;
    }

    /// Interior volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// The cargo space as a box, for drawing the trailer outline.
    pub fn bounding_box(&self) -> AABB3D<f64> {
        AABB3D::from_origin(
            0.0,
            0.0,
            0.0,
            self.dimensions.x,
            self.dimensions.z,
            self.dimensions.y,
        )
    }
}

impl Default for Bed {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Surface for Bed {
    type Scalar = f64;

    fn width(&self) -> f64 {
        self.dimensions.x
    }

    fn length(&self) -> f64 {
        self.dimensions.y
    }

    fn validate(&self) -> Result<()> {
        ensure_bed_dimension("width", self.dimensions.x)?;
        ensure_bed_dimension("length", self.dimensions.y)?;
        ensure_bed_dimension("height", self.dimensions.z)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_bed() {
        let bed = Bed::default();
        assert_relative_eq!(bed.width(), 2.5);
        assert_relative_eq!(bed.length(), 13.6);
        assert_relative_eq!(bed.height(), 2.7);
        assert_relative_eq!(bed.area(), 34.0, epsilon = 1e-9);
        assert_relative_eq!(bed.volume(), 91.8, epsilon = 1e-9);
    }

    #[test]
    fn test_bounding_box_axes() {
        let bbox = Bed::new(2.5, 13.6).with_height(3.0).bounding_box();
        assert_relative_eq!(bbox.width(), 2.5);
        assert_relative_eq!(bbox.height(), 3.0);
        assert_relative_eq!(bbox.length(), 13.6);
    }

    #[test]
    fn test_validation() {
        assert!(Bed::new(2.5, 13.6).validate().is_ok());
        assert!(matches!(
            Bed::new(0.0, 13.6).validate(),
            Err(pallet_layout_core::Error::InvalidBed(_))
        ));
        assert!(Bed::new(2.5, -1.0).validate().is_err());
        assert!(Bed::new(2.5, 13.6).with_height(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_usable() {
        assert!(Bed::new(2.5, 13.6).is_usable());
        assert!(!Bed::new(0.0, 13.6).is_usable());
        assert!(!Bed::new(2.5, f64::NAN).is_usable());
    }
}
