//! Support code for the `pallet-layout` command-line tool.

pub mod config_file;
pub mod report;

pub use config_file::{load_config, ConfigFileError};
pub use report::LayoutReport;
