//! End-to-end run: read the sheet, transform every row, write both files.
//!
//! # Example
//!
//! ```rust,ignore
//! use roomsync_seed::{generate, SeedOptions};
//!
//! let report = generate(&SeedOptions { seed: Some(7), ..Default::default() })?;
//! println!("{} properties, {} owners", report.property_count, report.owner_count);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

use super::owners::OwnerRegistry;
use super::row::transform_row;
use crate::config::SeedOptions;
use crate::error::SeedResult;
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::{Owner, Property, SourceRow};
use crate::parser::parse_csv_file_auto;
use crate::writer::{write_owners, write_properties};

/// In-memory result of transforming a set of rows
#[derive(Debug, Clone)]
pub struct GeneratedData {
    /// Properties in input order
    pub properties: Vec<Property>,
    /// Owners in id order
    pub owners: Vec<Owner>,
    /// Indices into the input rows dropped for a blank title
    pub skipped_records: Vec<usize>,
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub property_count: usize,
    pub owner_count: usize,
    pub skipped_count: usize,
    pub encoding: String,
    pub properties_output: PathBuf,
    pub owners_output: PathBuf,
}

/// Transform parsed rows with an explicit random source.
pub fn generate_from_rows<R: Rng + ?Sized>(
    rows: &[SourceRow],
    fallback_city: &str,
    rng: &mut R,
) -> GeneratedData {
    let mut registry = OwnerRegistry::new();
    let mut properties = Vec::with_capacity(rows.len());
    let mut skipped_records = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        match transform_row(row, &mut registry, fallback_city, rng) {
            Some(property) => properties.push(property),
            None => skipped_records.push(idx),
        }
    }

    GeneratedData {
        properties,
        owners: registry.into_owners(),
        skipped_records,
    }
}

/// Run the generator.
///
/// Nothing is written until the whole input has been read and transformed.
/// Any I/O failure aborts the run.
pub fn generate(options: &SeedOptions) -> SeedResult<SeedReport> {
    log_info(format!("📖 Reading {}", options.input.display()));
    let parsed = parse_csv_file_auto(&options.input)?;
    log_success(format!("Detected encoding: {}", parsed.encoding));
    if parsed.rows.is_empty() {
        log_warning("Input has no data rows, writing header-only files");
    } else {
        log_success(format!("Read {} rows", parsed.rows.len()));
    }

    let mut rng = match options.seed {
        Some(seed) => {
            log_info(format!("Using seed {}", seed));
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    log_info("⚙️  Transforming rows...");
    let data = generate_from_rows(&parsed.rows, &options.fallback_city, &mut rng);
    print_skipped(&skipped_lines(&parsed.lines, &data.skipped_records));

    write_properties(&options.properties_output, &data.properties)?;
    write_owners(&options.owners_output, &data.owners)?;

    let report = SeedReport {
        property_count: data.properties.len(),
        owner_count: data.owners.len(),
        skipped_count: data.skipped_records.len(),
        encoding: parsed.encoding,
        properties_output: options.properties_output.clone(),
        owners_output: options.owners_output.clone(),
    };
    print_report(&report);

    Ok(report)
}

/// Source file lines of the skipped records.
fn skipped_lines(lines: &[u64], skipped: &[usize]) -> Vec<u64> {
    skipped.iter().filter_map(|&idx| lines.get(idx).copied()).collect()
}

fn print_skipped(skipped: &[u64]) {
    if skipped.is_empty() {
        return;
    }
    let sample: Vec<String> = skipped.iter().take(5).map(|r| r.to_string()).collect();
    let more = if skipped.len() > 5 {
        format!("... +{}", skipped.len() - 5)
    } else {
        String::new()
    };
    log_warning(format!(
        "{} rows skipped, blank Name of Unit (lines: {}{})",
        skipped.len(),
        sample.join(", "),
        more
    ));
}

fn print_report(report: &SeedReport) {
    log_success(format!("{} properties generated", report.property_count));
    log_success(format!("{} unique owners generated", report.owner_count));
    log_info("💾 Files created:");
    log_info_indent(format!("- {}", report.properties_output.display()), 1);
    log_info_indent(format!("- {}", report.owners_output.display()), 1);
}
