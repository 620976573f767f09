//! Arrangement result representation.

use crate::geometry::PalletId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one arrangement pass.
///
/// `items` is the full sequence handed to the arranger, repositioned and in the same
/// order, overflowed items included. The remaining fields describe the pass.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArrangeResult<P> {
    /// The arranged items.
    pub items: Vec<P>,

    /// Number of items placed on the bed.
    pub placed: usize,

    /// Names of the items that did not fit, in placement order.
    pub overflow: Vec<PalletId>,

    /// Number of rows that hold at least one item.
    pub rows_used: usize,

    /// Bed length consumed, measured from the origin to the far edge of the
    /// furthest placed item (loading meters).
    pub used_length: f64,

    /// Total footprint area of placed items.
    pub placed_area: f64,

    /// Placed area over bed area (0.0 - 1.0).
    pub utilization: f64,

    /// Wall-clock time of the pass in microseconds.
    pub computation_time_us: u64,
}

impl<P> ArrangeResult<P> {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            placed: 0,
            overflow: Vec::new(),
            rows_used: 0,
            used_length: 0.0,
            placed_area: 0.0,
            utilization: 0.0,
            computation_time_us: 0,
        }
    }

    /// Returns true if every item was placed.
    pub fn all_placed(&self) -> bool {
        self.overflow.is_empty()
    }

    /// Total number of items, placed or not.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Number of items that did not fit.
    pub fn overflow_count(&self) -> usize {
        self.overflow.len()
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }

    /// Consumes the result, returning the arranged items.
    pub fn into_items(self) -> Vec<P> {
        self.items
    }
}

impl<P> Default for ArrangeResult<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of an arrangement pass without the items themselves.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArrangeSummary {
    /// Items handed to the arranger.
    pub total_requested: usize,
    /// Items placed on the bed.
    pub total_placed: usize,
    /// Names of the items that did not fit.
    pub overflow: Vec<PalletId>,
    /// Rows holding at least one item.
    pub rows_used: usize,
    /// Bed length consumed.
    pub loading_meters: f64,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Pass time in microseconds.
    pub time_us: u64,
}

impl<P> From<&ArrangeResult<P>> for ArrangeSummary {
    fn from(result: &ArrangeResult<P>) -> Self {
        Self {
            total_requested: result.items.len(),
            total_placed: result.placed,
            overflow: result.overflow.clone(),
            rows_used: result.rows_used,
            loading_meters: result.used_length,
            utilization_percent: result.utilization * 100.0,
            time_us: result.computation_time_us,
        }
    }
}
