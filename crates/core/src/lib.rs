//! # Pallet Layout Core
//!
//! Core types and traits for the pallet layout engine.
//!
//! This crate holds everything the arrangement engine and its callers share
//! without depending on a particular pallet representation.
//!
//! ## Core Components
//!
//! - **Traits**: [`Footprint`], [`Surface`], [`Arranger`]
//! - **Configuration**: [`Config`] with trailer and pallet defaults
//! - **Output records**: [`Placement`], [`ArrangeResult`], [`ArrangeSummary`]
//! - **Colors**: [`Color`] and the fixed [`PALETTE`]
//! - **Bounds**: [`AABB2D`] footprints and [`AABB3D`] render boxes
//!
//! ## Configuration
//!
//! ```rust
//! use pallet_layout_core::Config;
//!
//! let config = Config::new()
//!     .with_trailer(2.45, 13.6)
//!     .with_pallet(0.8, 1.2, 1.0)
//!     .with_pallet_count(33);
//!
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod arranger;
pub mod bounds;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;

// Re-exports
pub use arranger::Arranger;
pub use bounds::{AABB2D, AABB3D};
pub use color::{palette_color, Color, PALETTE};
pub use config::Config;
pub use error::{ensure_bed_dimension, ensure_positive, Error, Result};
pub use geometry::{pallet_name, Footprint, PalletId, Surface};
pub use placement::{Placement, PlacementStats};
pub use result::{ArrangeResult, ArrangeSummary};
