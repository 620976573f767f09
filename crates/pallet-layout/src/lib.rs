//! # Pallet Layout
//!
//! Arranges rectangular pallets on the loading bed of a trailer.
//!
//! This crate provides:
//! - **Core types**: configuration, colors, placement records and traits
//! - **Bed arrangement**: the pallet model, row-major arranger and load plan
//!
//! ## Quick Start
//!
//! ```rust
//! use pallet_layout::{Config, LoadPlan};
//!
//! let mut plan = LoadPlan::new(Config::default())?;
//!
//! plan.set_pallet_number(34);
//! let summary = plan.update_pallet_quantity();
//!
//! assert_eq!(summary.total_placed, 33);
//! assert_eq!(summary.overflow, vec!["pallet_34".to_string()]);
//!
//! for placement in plan.placements().iter().filter(|p| p.should_render()) {
//!     // hand `placement` to a renderer
//!     let _ = placement.bounding_box();
//! }
//! # Ok::<(), pallet_layout::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core types and traits.
pub use pallet_layout_core as core;

/// Pallets, bed, arranger and load plan.
pub use pallet_layout_bed as bed;

// Re-export commonly used types at root level
pub use pallet_layout_bed::{arrange_pallets, Bed, LoadPlan, Pallet, RowMajorArranger};
pub use pallet_layout_core::{
    Arranger, ArrangeSummary, Color, Config, Error, Footprint, Placement, Result, Surface,
};
