//! The pallet model.

use nalgebra::{Point3, Vector3};
use pallet_layout_core::config::{
    Config, DEFAULT_PALLET_HEIGHT, DEFAULT_PALLET_LENGTH, DEFAULT_PALLET_WIDTH,
};
use pallet_layout_core::geometry::{pallet_name, Footprint, PalletId};
use pallet_layout_core::{ensure_positive, palette_color, Color, Placement, Result};
use pallet_layout_core::{AABB2D, AABB3D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One physical pallet: its size, where it sits on the bed and how it is displayed.
///
/// Dimension setters do not move the pallet; positions only change when an
/// arranger runs over the sequence again.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pallet {
    /// Dimensions (width, length, height).
    dimensions: Vector3<f64>,

    /// Corner closest to the bed origin; `y` is always 0 since stacking is not modeled.
    position: Point3<f64>,

    /// Name from the last arrangement pass.
    name: Option<PalletId>,

    /// Placement index from the last arrangement pass.
    index: Option<usize>,

    visible: bool,
    wireframe_enabled: bool,

    /// User-chosen color. Wins over the palette on every pass.
    custom_color: Option<Color>,

    /// Palette color resolved by the last arrangement pass.
    palette_color: Option<Color>,

    /// Set when the last arrangement pass could not place this pallet.
    overflow: bool,

    /// Set when this pallet was resized on its own; store-wide resizes skip it.
    individually_sized: bool,
}

impl Pallet {
    /// Creates a pallet with the default EUR dimensions.
    pub fn new() -> Self {
        Self::with_dimensions(
            DEFAULT_PALLET_WIDTH,
            DEFAULT_PALLET_LENGTH,
            DEFAULT_PALLET_HEIGHT,
        )
    }

    /// Creates a pallet with the given dimensions.
    ///
    /// The values are not checked; see [`Footprint::validate`].
    pub fn with_dimensions(width: f64, length: f64, height: f64) -> Self {
        Self {
            dimensions: Vector3::new(width, length, height),
            position: Point3::origin(),
            name: None,
            index: None,
            visible: true,
            wireframe_enabled: false,
            custom_color: None,
            palette_color: None,
            overflow: false,
            individually_sized: false,
        }
    }

    /// Creates a pallet with the configured default dimensions.
    pub fn from_config(config: &Config) -> Self {
        Self::with_dimensions(
            config.pallet_width,
            config.pallet_length,
            config.pallet_height,
        )
    }

    /// Sets a custom color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.custom_color = Some(color);
        self
    }

    /// Returns the dimensions (width, length, height).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Sets the width.
    pub fn set_width(&mut self, width: f64) {
        self.dimensions.x = width;
    }

    /// Sets the length.
    pub fn set_length(&mut self, length: f64) {
        self.dimensions.y = length;
    }

    /// Sets the height.
    pub fn set_height(&mut self, height: f64) {
        self.dimensions.z = height;
    }

    /// Returns the position assigned by the last arrangement pass.
    pub fn position(&self) -> &Point3<f64> {
        &self.position
    }

    /// Returns the name assigned by the last arrangement pass.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the placement index assigned by the last arrangement pass.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_wireframe_enabled(&self) -> bool {
        self.wireframe_enabled
    }

    pub fn toggle_wireframe(&mut self) {
        self.wireframe_enabled = !self.wireframe_enabled;
    }

    /// Returns the user-chosen color, if any.
    pub fn custom_color(&self) -> Option<Color> {
        self.custom_color
    }

    /// Sets or clears the user-chosen color.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.custom_color = color;
    }

    /// Returns the color to draw: the custom color, else the palette color from the
    /// last arrangement pass. `None` only before the first pass.
    pub fn color(&self) -> Option<Color> {
        self.custom_color.or(self.palette_color)
    }

    /// Returns true if the last arrangement pass could not place this pallet.
    pub fn is_overflow(&self) -> bool {
        self.overflow
    }

    /// Returns true if this pallet was resized on its own.
    pub fn is_individually_sized(&self) -> bool {
        self.individually_sized
    }

    pub(crate) fn set_individually_sized(&mut self, sized: bool) {
        self.individually_sized = sized;
    }

    /// Records identity for a placement index: name and palette color.
    pub(crate) fn assign_index(&mut self, index: usize) {
        self.index = Some(index);
        self.name = Some(pallet_name(index));
        self.palette_color = Some(palette_color(index));
    }

    /// Puts the pallet on the bed at `(x, 0, z)`.
    pub(crate) fn place_at(&mut self, x: f64, z: f64) {
        self.position = Point3::new(x, 0.0, z);
        self.overflow = false;
    }

    /// Flags the pallet as not placed and parks it at the origin.
    pub(crate) fn mark_overflow(&mut self) {
        self.position = Point3::origin();
        self.overflow = true;
    }

    /// Rectangle covered on the bed plane at the current position.
    pub fn footprint(&self) -> AABB2D<f64> {
        self.footprint_at(self.position.x, self.position.z)
    }

    /// Box the renderable occupies: `(width, height, length)` at the current position.
    pub fn bounding_box(&self) -> AABB3D<f64> {
        AABB3D::from_origin(
            self.position.x,
            self.position.y,
            self.position.z,
            self.width(),
            self.height(),
            self.length(),
        )
    }

    /// Builds the plain record a renderer consumes.
    ///
    /// `index` is the pallet's position in its sequence; it fills in the name and
    /// palette color if no arrangement pass has run yet.
    pub fn to_placement(&self, index: usize) -> Placement {
        Placement {
            name: self.name.clone().unwrap_or_else(|| pallet_name(index)),
            index: self.index.unwrap_or(index),
            position: [self.position.x, self.position.y, self.position.z],
            size: [self.width(), self.height(), self.length()],
            color: self.color().unwrap_or_else(|| palette_color(index)),
            visible: self.visible,
            wireframe: self.wireframe_enabled,
            overflow: self.overflow,
        }
    }
}

impl Default for Pallet {
    fn default() -> Self {
        Self::new()
    }
}

impl Footprint for Pallet {
    type Scalar = f64;

    fn width(&self) -> f64 {
        self.dimensions.x
    }

    fn length(&self) -> f64 {
        self.dimensions.y
    }

    fn height(&self) -> f64 {
        self.dimensions.z
    }

    fn validate(&self) -> Result<()> {
        ensure_positive("pallet width", self.dimensions.x)?;
        ensure_positive("pallet length", self.dimensions.y)?;
        ensure_positive("pallet height", self.dimensions.z)?;
        Ok(())
    }
}
