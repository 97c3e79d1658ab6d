//! Field-level coercions applied to every listing.
//!
//! None of these fail: unrecognized input degrades to a default
//! (`None`, `"0"`, [`Category::Room`], an empty string).

use crate::models::{Category, SourceRow};

/// City used when a listing has no location at all.
pub const DEFAULT_CITY: &str = "Dumaguete";

/// Description used when a listing has nothing to say about itself.
pub const FALLBACK_DESCRIPTION: &str = "Property available for rent.";

/// Values that mean "not applicable" in the sheet.
const NOT_APPLICABLE: &str = "N/A";

/// Occupancy restriction that needs no mention.
const NEUTRAL_OCCUPANCY: &str = "Co-ed";

/// Lease term that needs no mention.
const STANDARD_LEASE: &str = "12 months";

/// Source unit types and their category. Anything else is a room.
const CATEGORY_TABLE: &[(&str, Category)] = &[
    ("Boarding house", Category::Room),
    ("Apartment", Category::Apartment),
    ("Bed space", Category::Bedspace),
    ("House for Rent", Category::Apartment),
];

/// Parse a yes/no cell.
///
/// `yes`/`y` and `no`/`n` in any case; everything else, including an empty
/// cell, is unknown.
pub fn parse_boolean(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

/// Normalize a monthly rental cell to a single number.
///
/// Thousands separators are dropped and a range keeps its lower bound.
/// Anything else passes through untouched.
pub fn clean_rent(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() || value == NOT_APPLICABLE {
        return "0".to_string();
    }

    let value = value.replace(',', "");
    match value.split_once('-') {
        Some((low, _)) => low.trim().to_string(),
        None => value,
    }
}

/// Map a source unit type onto a destination category.
pub fn map_category(type_of_unit: &str) -> Category {
    let type_of_unit = type_of_unit.trim();
    CATEGORY_TABLE
        .iter()
        .find(|(name, _)| *name == type_of_unit)
        .map(|(_, category)| *category)
        .unwrap_or_default()
}

/// Assemble a listing description from the free-text and policy columns.
pub fn build_description(row: &SourceRow) -> String {
    let mut parts: Vec<String> = Vec::new();

    let notes = row.notes.trim();
    if !notes.is_empty() {
        parts.push(notes.to_string());
    }

    let occupancy = row.occupancy_restriction.trim();
    if !occupancy.is_empty() && occupancy != NEUTRAL_OCCUPANCY {
        parts.push(format!("Occupancy: {} only.", occupancy));
    }

    let payment = row.payment_policy.trim();
    if !payment.is_empty() && payment != NOT_APPLICABLE {
        parts.push(format!("Payment: {}.", payment));
    }

    let lease = row.lease.trim();
    if !lease.is_empty() && lease != NOT_APPLICABLE && lease != STANDARD_LEASE {
        parts.push(format!("Lease term: {}.", lease));
    }

    if row.accessible.trim() == "Yes" {
        parts.push("Accessible location.".to_string());
    }

    if parts.is_empty() {
        FALLBACK_DESCRIPTION.to_string()
    } else {
        parts.join(" ")
    }
}

/// City from a `City, Province` location, or `fallback` when blank.
pub fn parse_city(location: &str, fallback: &str) -> String {
    let location = location.trim();
    if location.is_empty() {
        return fallback.to_string();
    }
    location.split(',').next().unwrap_or_default().trim().to_string()
}

/// Barangay cell, with "N/A" cleared.
pub fn clean_barangay(barangay: &str) -> String {
    let barangay = barangay.trim();
    if barangay == NOT_APPLICABLE {
        String::new()
    } else {
        barangay.to_string()
    }
}
