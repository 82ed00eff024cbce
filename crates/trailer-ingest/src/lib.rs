//! Source table ingestion for the trailer attachment dashboard.
//!
//! This crate reads the two upstream CSV sources into Polars DataFrames,
//! checks the column contract, and converts rows into typed records:
//!
//! - **Load records**: one row per logistics load (`Lane`, `Trailer Id`, ...)
//! - **Region mapping**: `origin` site code to `origin_region`
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use trailer_ingest::load_sources;
//!
//! let tables = load_sources(Path::new("lazy_fmc_processed.csv"), Path::new("R_codes.csv"))?;
//! println!("{} loads, {} region rows", tables.loads.len(), tables.regions.len());
//! ```

mod csv;
mod error;
mod loader;
pub mod polars_utils;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{normalize_header, read_csv_frame};

// === Typed Loading ===
pub use loader::{
    SourceTables, load_records, load_region_mappings, load_sources, records_from_frame,
    region_mappings_from_frame, require_columns,
};

// === Cell Helpers ===
pub use polars_utils::{any_to_optional_string, any_to_string, any_to_string_non_empty};
