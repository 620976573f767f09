//! Row-major pallet arrangement.

use crate::bed::Bed;
use crate::pallet::Pallet;
use nalgebra::Vector3;
use pallet_layout_core::arranger::Arranger;
use pallet_layout_core::config::Config;
use pallet_layout_core::geometry::{pallet_name, Footprint, Surface};
use pallet_layout_core::ArrangeResult;

use std::cmp::Ordering;
use std::time::Instant;

/// Slack allowed when checking whether a pallet fits, so that accumulated float
/// error does not reject exact fits such as three 0.8 m pallets on a 2.4 m bed.
pub const FIT_TOLERANCE: f64 = 1e-9;

/// Fills rows across the bed width, then advances along its length.
///
/// Pallets are placed strictly in sequence order. Each row is as deep as its
/// longest pallet. A pallet that does not fit is flagged as overflow, parked at
/// the origin, and does not advance the cursor.
#[derive(Debug, Clone, Default)]
pub struct RowMajorArranger {
    margin: f64,
    spacing: f64,
}

impl RowMajorArranger {
    /// Creates an arranger with no margin and no spacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an arranger with the configured margin and spacing.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_margin(config.margin)
            .with_spacing(config.spacing)
    }

    /// Sets the clearance kept free along every bed edge.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the gap between neighbouring pallets.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Returns the margin.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Returns the spacing.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    fn row_major(&self, bed: &Bed, mut pallets: Vec<Pallet>) -> ArrangeResult<Pallet> {
        let start = Instant::now();
        let mut result = ArrangeResult::new();

        // Negative or NaN offsets count as zero
        let margin = self.margin.max(0.0);
        let spacing = self.spacing.max(0.0);

        let usable = bed.bounds().shrink(margin);
        let bed_usable = bed.is_usable() && usable.is_proper();
        if !bed_usable && !pallets.is_empty() {
            log::warn!(
                "Bed {}x{} (margin {}) has no usable area, all {} pallets overflow",
                bed.width(),
                bed.length(),
                margin,
                pallets.len()
            );
        }

        let mut cursor_x = usable.min_x;
        let mut cursor_z = usable.min_z;
        let mut row_depth = 0.0_f64;
        let mut row_open = false;

        for (index, pallet) in pallets.iter_mut().enumerate() {
            pallet.assign_index(index);

            let width = pallet.width();
            let length = pallet.length();

            // An empty row needs no wrap
            if row_open && cursor_x + width > usable.max_x + FIT_TOLERANCE {
                cursor_x = usable.min_x;
                cursor_z += row_depth + spacing;
                row_depth = 0.0;
                row_open = false;
            }

            let fits = bed_usable
                && width > 0.0
                && length > 0.0
                && width <= usable.width() + FIT_TOLERANCE
                && cursor_z + length <= usable.max_z + FIT_TOLERANCE;
            if !fits {
                pallet.mark_overflow();
                result.overflow.push(pallet_name(index));
                continue;
            }

            pallet.place_at(cursor_x, cursor_z);

            if !row_open {
                row_open = true;
                result.rows_used += 1;
            }
            cursor_x += width + spacing;
            row_depth = row_depth.max(length);

            result.placed += 1;
            result.placed_area += pallet.area();
            result.used_length = result.used_length.max(cursor_z + length);
        }

        if bed_usable {
            result.utilization = result.placed_area / bed.area();
        }

        log::debug!(
            "Arranged {} pallets on {}x{} bed: {} placed, {} overflow, {} rows, {:.2} m used",
            pallets.len(),
            bed.width(),
            bed.length(),
            result.placed,
            result.overflow.len(),
            result.rows_used,
            result.used_length
        );

        result.items = pallets;
        result.computation_time_us = start.elapsed().as_micros() as u64;
        result
    }
}

impl Arranger for RowMajorArranger {
    type Item = Pallet;
    type Surface = Bed;

    fn arrange(&self, bed: &Bed, pallets: Vec<Pallet>) -> ArrangeResult<Pallet> {
        self.row_major(bed, pallets)
    }
}

/// Arranges `pallets` on a `trailer_width` × `trailer_length` bed with no margin
/// or spacing, returning the same sequence with positions, names and colors
/// assigned and overflow flagged.
///
/// Never fails: a bed with a zero, negative or NaN dimension makes every pallet
/// overflow.
pub fn arrange_pallets(
    trailer_width: f64,
    trailer_length: f64,
    pallets: Vec<Pallet>,
) -> Vec<Pallet> {
    RowMajorArranger::new()
        .arrange(&Bed::new(trailer_width, trailer_length), pallets)
        .into_items()
}

/// Resizes a pallet sequence to `requested` entries.
///
/// Shrinking drops the most recently added pallets; growing appends new pallets
/// sized `dimensions` (width, length, height). Surviving pallets keep their
/// order and state.
pub fn apply_quantity(
    mut pallets: Vec<Pallet>,
    requested: usize,
    dimensions: &Vector3<f64>,
) -> Vec<Pallet> {
    match requested.cmp(&pallets.len()) {
        Ordering::Equal => {}
        Ordering::Less => pallets.truncate(requested),
        Ordering::Greater => {
            let missing = requested - pallets.len();
            pallets.extend(
                std::iter::repeat_with(|| {
                    Pallet::with_dimensions(dimensions.x, dimensions.y, dimensions.z)
                })
                .take(missing),
            );
        }
    }
    pallets
}
