//! Transformation module.
//!
//! This module turns listing rows into database records:
//! - Fields: per-cell coercions (booleans, rent, category, description)
//! - Owners: coordinate-keyed owner synthesis
//! - Row: one listing into one property
//! - Pipeline: read, transform, write

pub mod fields;
pub mod owners;
pub mod pipeline;
pub mod row;

pub use fields::{build_description, clean_rent, map_category, parse_boolean};
pub use owners::OwnerRegistry;
pub use pipeline::*;
pub use row::transform_row;
