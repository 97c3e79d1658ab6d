//! Run configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::transform::fields::DEFAULT_CITY;

pub const DEFAULT_INPUT: &str = "database/room_rental_data_template_with_links.csv";
pub const DEFAULT_PROPERTIES_OUTPUT: &str = "database/properties_import.csv";
pub const DEFAULT_OWNERS_OUTPUT: &str = "database/owners_import.csv";

/// Options for one generator run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedOptions {
    /// Listing sheet to read
    pub input: PathBuf,

    /// Destination of the properties file
    pub properties_output: PathBuf,

    /// Destination of the owners file
    pub owners_output: PathBuf,

    /// Seed for the random fields. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// City for listings with a blank location
    pub fallback_city: String,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            properties_output: PathBuf::from(DEFAULT_PROPERTIES_OUTPUT),
            owners_output: PathBuf::from(DEFAULT_OWNERS_OUTPUT),
            seed: None,
            fallback_city: DEFAULT_CITY.to_string(),
        }
    }
}
