//! # Pallet Layout Bed
//!
//! Pallet arrangement on a trailer loading bed.
//!
//! This crate provides the pallet model, the bed, the row-major arranger and the
//! load plan that wraps them into a session a user interface can drive.
//!
//! ## Features
//!
//! - Row-major packing in caller order, with overflow flagged rather than raised
//! - Stable incremental updates: growing or shrinking the pallet count leaves
//!   surviving pallets where they were
//! - Deterministic names and palette colors; custom colors survive every pass
//! - Optional margin and spacing
//!
//! ## Quick Start
//!
//! ```rust
//! use pallet_layout_bed::{arrange_pallets, Pallet};
//!
//! let pallets = (0..4).map(|_| Pallet::new()).collect();
//! let pallets = arrange_pallets(2.5, 13.6, pallets);
//!
//! assert!(pallets.iter().all(|p| !p.is_overflow()));
//! assert_eq!(pallets[3].name(), Some("pallet_4"));
//! ```

pub mod arranger;
pub mod bed;
pub mod pallet;
pub mod plan;

// Re-exports
pub use arranger::{apply_quantity, arrange_pallets, RowMajorArranger, FIT_TOLERANCE};
pub use bed::Bed;
pub use pallet::Pallet;
pub use plan::LoadPlan;
pub use pallet_layout_core::{
    Arranger, ArrangeResult, ArrangeSummary, Color, Config, Error, Footprint, Placement,
    Result, Surface,
};
