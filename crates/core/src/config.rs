//! Load configuration: trailer size, default pallet dimensions and spacing.

use crate::error::{ensure_bed_dimension, ensure_positive};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default trailer bed width in meters.
pub const DEFAULT_TRAILER_WIDTH: f64 = 2.5;
/// Default trailer bed length in meters.
pub const DEFAULT_TRAILER_LENGTH: f64 = 13.6;
/// Default trailer interior height in meters.
pub const DEFAULT_TRAILER_HEIGHT: f64 = 2.7;
/// Default pallet width in meters (EUR pallet).
pub const DEFAULT_PALLET_WIDTH: f64 = 0.8;
/// Default pallet length in meters (EUR pallet).
pub const DEFAULT_PALLET_LENGTH: f64 = 1.2;
/// Default loaded pallet height in meters.
pub const DEFAULT_PALLET_HEIGHT: f64 = 0.6;

/// Configuration shared by the load plan, the arranger and the CLI.
///
/// Deserializing from a partial document fills missing fields from [`Config::default`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Usable bed width (x axis).
    pub trailer_width: f64,

    /// Usable bed length (z axis).
    pub trailer_length: f64,

    /// Interior height; only used for volume statistics and render bounds.
    pub trailer_height: f64,

    /// Width given to newly created pallets.
    pub pallet_width: f64,

    /// Length given to newly created pallets.
    pub pallet_length: f64,

    /// Height given to newly created pallets.
    pub pallet_height: f64,

    /// Requested number of pallets.
    pub pallet_count: usize,

    /// Clearance kept free along every bed edge.
    pub margin: f64,

    /// Gap between neighbouring pallets, both within a row and between rows.
    pub spacing: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trailer_width: DEFAULT_TRAILER_WIDTH,
            trailer_length: DEFAULT_TRAILER_LENGTH,
            trailer_height: DEFAULT_TRAILER_HEIGHT,
            pallet_width: DEFAULT_PALLET_WIDTH,
            pallet_length: DEFAULT_PALLET_LENGTH,
            pallet_height: DEFAULT_PALLET_HEIGHT,
            pallet_count: 1,
            margin: 0.0,
            spacing: 0.0,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trailer bed size.
    pub fn with_trailer(mut self, width: f64, length: f64) -> Self {
        self.trailer_width = width;
        self.trailer_length = length;
        self
    }

    /// Sets the trailer interior height.
    pub fn with_trailer_height(mut self, height: f64) -> Self {
        self.trailer_height = height;
        self
    }

    /// Sets the default pallet dimensions.
    pub fn with_pallet(mut self, width: f64, length: f64, height: f64) -> Self {
        self.pallet_width = width;
        self.pallet_length = length;
        self.pallet_height = height;
        self
    }

    /// Sets the requested pallet count.
    pub fn with_pallet_count(mut self, count: usize) -> Self {
        self.pallet_count = count;
        self
    }

    /// Sets the clearance from the bed edges.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the gap between pallets.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Checks every value the engine would otherwise accept permissively.
    pub fn validate(&self) -> Result<()> {
        ensure_bed_dimension("trailer width", self.trailer_width)?;
        ensure_bed_dimension("trailer length", self.trailer_length)?;
        ensure_bed_dimension("trailer height", self.trailer_height)?;

        ensure_positive("pallet width", self.pallet_width)?;
        ensure_positive("pallet length", self.pallet_length)?;
        ensure_positive("pallet height", self.pallet_height)?;

        for (what, value) in [("margin", self.margin), ("spacing", self.spacing)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::ConfigError(format!(
                    "{what} must be zero or positive, got {value}"
                )));
            }
        }

        if 2.0 * self.margin >= self.trailer_width.min(self.trailer_length) {
            return Err(Error::ConfigError(format!(
                "margin {} leaves no usable bed area",
                self.margin
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.trailer_width, 2.5);
        assert_eq!(config.trailer_length, 13.6);
        assert_eq!(config.pallet_width, 0.8);
        assert_eq!(config.pallet_length, 1.2);
        assert_eq!(config.pallet_height, 0.6);
        assert_eq!(config.pallet_count, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = Config::new()
            .with_trailer(2.45, 7.2)
            .with_trailer_height(2.5)
            .with_pallet(1.0, 1.2, 1.1)
            .with_pallet_count(12)
            .with_margin(0.02)
            .with_spacing(0.05);

        assert_eq!(config.trailer_width, 2.45);
        assert_eq!(config.trailer_length, 7.2);
        assert_eq!(config.trailer_height, 2.5);
        assert_eq!(config.pallet_height, 1.1);
        assert_eq!(config.pallet_count, 12);
        assert_eq!(config.spacing, 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_bed = Config::new().with_trailer(0.0, 13.6);
        assert!(matches!(bad_bed.validate(), Err(Error::InvalidBed(_))));

        let bad_pallet = Config::new().with_pallet(0.8, -1.2, 0.6);
        assert!(matches!(
            bad_pallet.validate(),
            Err(Error::InvalidDimension(_))
        ));

        let bad_spacing = Config::new().with_spacing(-0.1);
        assert!(matches!(bad_spacing.validate(), Err(Error::ConfigError(_))));

        let huge_margin = Config::new().with_margin(1.25);
        assert!(matches!(huge_margin.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_zero_count_is_valid() {
        assert!(Config::new().with_pallet_count(0).validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "trailer_length": 7.7, "pallet_count": 6 }"#).unwrap();
        assert_eq!(config.trailer_length, 7.7);
        assert_eq!(config.pallet_count, 6);
        assert_eq!(config.trailer_width, DEFAULT_TRAILER_WIDTH);
        assert_eq!(config.pallet_width, DEFAULT_PALLET_WIDTH);
    }
}
