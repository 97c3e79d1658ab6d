//! # RoomSync seed - listing sheet to database import files
//!
//! Turns the flat room-rental listing sheet into two CSV files ready for
//! `COPY` into the `owners` and `properties` tables.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │ Listing CSV │────▶│   Parser    │────▶│  Transform  │────▶│ properties.csv   │
//! │  (any enc.) │     │  (auto-enc) │     │ (row+owner) │     │ owners.csv       │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roomsync_seed::{generate, SeedOptions};
//!
//! fn main() {
//!     let report = generate(&SeedOptions::default()).unwrap();
//!     println!("Generated {} properties", report.property_count);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Source row, owner and property records
//! - [`parser`] - CSV parsing with auto-detection
//! - [`transform`] - Field coercions, owner synthesis, pipeline
//! - [`writer`] - CSV output
//! - [`config`] - Run options
//! - [`logs`] - Console logging

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod writer;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, CsvResult, OutputError, OutputResult, SeedError, SeedResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Category, Owner, Property, SourceRow};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, parse_bytes_auto, parse_csv_file_auto,
    parse_str, ParseResult,
};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    build_description, clean_rent, map_category, parse_boolean, transform_row, OwnerRegistry,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use config::SeedOptions;
pub use transform::pipeline::{generate, generate_from_rows, GeneratedData, SeedReport};

// =============================================================================
// Re-exports - Output
// =============================================================================

pub use writer::{write_owners, write_properties, OWNER_COLUMNS, PROPERTY_COLUMNS};
