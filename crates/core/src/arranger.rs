//! The arranger trait.

use crate::geometry::{Footprint, Surface};
use crate::result::ArrangeResult;

/// Assigns positions to a sequence of footprints on a surface.
///
/// Arrangers are total: a footprint that does not fit is flagged in the result,
/// never reported as an error. The sequence is moved in and handed back so that no
/// one else can observe it while positions are being rewritten.
pub trait Arranger {
    /// The item type this arranger positions.
    type Item: Footprint;
    /// The surface type items are arranged on.
    type Surface: Surface;

    /// Arranges `items` on `surface` in the given order.
    fn arrange(&self, surface: &Self::Surface, items: Vec<Self::Item>)
        -> ArrangeResult<Self::Item>;
}
