//! Plain placement records handed to the presentation layer.

use crate::bounds::{AABB2D, AABB3D};
use crate::color::Color;
use crate::geometry::PalletId;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where and how one pallet should be drawn.
///
/// An owned value with no references into engine state; renderers copy it into
/// their own scene objects.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Display name, `pallet_<n>`.
    pub name: PalletId,

    /// 0-based placement index.
    pub index: usize,

    /// Corner of the pallet closest to the bed origin, as `[x, y, z]`.
    pub position: [f64; 3],

    /// Render size as `[width, height, length]`.
    pub size: [f64; 3],

    /// Resolved color: custom if set, palette otherwise.
    pub color: Color,

    /// Whether the pallet should be drawn at all.
    pub visible: bool,

    /// Whether the pallet should be drawn as wireframe.
    pub wireframe: bool,

    /// Set when the pallet could not be placed on the bed.
    pub overflow: bool,
}

impl Placement {
    /// Width along x.
    pub fn width(&self) -> f64 {
        self.size[0]
    }

    /// Height along y.
    pub fn height(&self) -> f64 {
        self.size[1]
    }

    /// Length along z.
    pub fn length(&self) -> f64 {
        self.size[2]
    }

    /// Rectangle the pallet covers on the bed plane.
    pub fn footprint(&self) -> AABB2D<f64> {
        AABB2D::from_origin(
            self.position[0],
            self.position[2],
            self.width(),
            self.length(),
        )
    }

    /// Box the renderable occupies.
    pub fn bounding_box(&self) -> AABB3D<f64> {
        AABB3D::from_origin(
            self.position[0],
            self.position[1],
            self.position[2],
            self.width(),
            self.height(),
            self.length(),
        )
    }

    /// True when a renderer should draw this pallet.
    pub fn should_render(&self) -> bool {
        self.visible && !self.overflow
    }
}

/// Counts over a set of placements.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Placements flagged as overflow.
    pub overflow_count: usize,
    /// Placements with `visible == false`.
    pub hidden_count: usize,
    /// Placements drawn as wireframe.
    pub wireframe_count: usize,
    /// How many placements use each color.
    pub color_distribution: BTreeMap<Color, usize>,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[Placement]) -> Self {
        let mut stats = Self {
            count: placements.len(),
            ..Default::default()
        };

        for p in placements {
            if p.overflow {
                stats.overflow_count += 1;
            }
            if !p.visible {
                stats.hidden_count += 1;
            }
            if p.wireframe {
                stats.wireframe_count += 1;
            }
            *stats.color_distribution.entry(p.color).or_insert(0) += 1;
        }

        stats
    }

    /// Placements that are on the bed.
    pub fn placed_count(&self) -> usize {
        self.count - self.overflow_count
    }
}
