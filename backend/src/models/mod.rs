//! Domain models for the seed generator.
//!
//! - [`SourceRow`] - One row of the listing sheet, as typed strings
//! - [`Owner`] - Synthesized landlord, one per distinct coordinate string
//! - [`Property`] - One listing, ready for the `properties` table
//! - [`Category`] - Coarse listing type used by the database
//!
//! The serialized field order of [`Property`] and [`Owner`] is the column
//! order of the generated CSV files.

use serde::{Deserialize, Serialize, Serializer};

/// Null marker understood by the database import.
pub const NULL_MARKER: &str = "NULL";

// =============================================================================
// Source Row
// =============================================================================

/// One listing as it appears in the source sheet.
///
/// Every column is optional: a missing column reads as an empty string.
/// The sheet has been exported with both `Lease / Contract` and
/// `Lease/Contract` headers, so both spellings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceRow {
    #[serde(rename = "Name of Unit")]
    pub name: String,
    #[serde(rename = "Coordinates")]
    pub coordinates: String,
    #[serde(rename = "Type of Unit")]
    pub type_of_unit: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Barangay")]
    pub barangay: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Occupancy Restriction")]
    pub occupancy_restriction: String,
    #[serde(rename = "Payment Policy")]
    pub payment_policy: String,
    #[serde(rename = "Lease / Contract", alias = "Lease/Contract")]
    pub lease: String,
    #[serde(rename = "Accessible")]
    pub accessible: String,
    #[serde(rename = "Monthly Rental")]
    pub monthly_rental: String,
    #[serde(rename = "Internet Availability")]
    pub internet: String,
    #[serde(rename = "Pet-Friendly")]
    pub pet_friendly: String,
    #[serde(rename = "Furnished")]
    pub furnished: String,
    #[serde(rename = "Air Conditioning")]
    pub air_conditioning: String,
    #[serde(rename = "Secure Location (Gated/CCTV)", alias = "Secure Location")]
    pub secure_location: String,
    #[serde(rename = "Parking")]
    pub parking: String,
}

impl SourceRow {
    /// Header of the title column. Rows without a title are dropped.
    pub const TITLE_COLUMN: &'static str = "Name of Unit";

    /// Alternate header spellings and the column they stand for.
    /// Keep in sync with the `alias` attributes above.
    pub const COLUMN_ALIASES: &'static [(&'static str, &'static str)] = &[
        ("Lease/Contract", "Lease / Contract"),
        ("Secure Location", "Secure Location (Gated/CCTV)"),
    ];

    /// Canonical spelling of a header.
    pub fn canonical_column(header: &str) -> &str {
        Self::COLUMN_ALIASES
            .iter()
            .find(|(alias, _)| *alias == header)
            .map(|(_, name)| *name)
            .unwrap_or(header)
    }

    /// Trimmed title, or `None` when blank.
    pub fn title(&self) -> Option<&str> {
        let title = self.name.trim();
        (!title.is_empty()).then_some(title)
    }

    /// Trimmed coordinate string used as the owner key.
    pub fn owner_key(&self) -> &str {
        self.coordinates.trim()
    }
}

// =============================================================================
// Category
// =============================================================================

/// Listing category in the destination schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Room,
    Apartment,
    Bedspace,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Apartment => "apartment",
            Self::Bedspace => "bedspace",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Owner
// =============================================================================

/// A synthesized property owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Owner {
    pub owner_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub user_type: &'static str,
    pub is_verified: bool,
}

impl Owner {
    pub const USER_TYPE: &'static str = "owner";

    /// Build an owner, deriving the email from the name and id.
    pub fn new(owner_id: u32, first_name: &str, last_name: &str, phone_number: String) -> Self {
        let email = format!("{}.{}{}@example.com", first_name, last_name, owner_id).to_lowercase();
        Self {
            owner_id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email,
            phone_number,
            user_type: Self::USER_TYPE,
            is_verified: true,
        }
    }
}

// =============================================================================
// Property
// =============================================================================

/// One listing row for the `properties` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub owner_id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub street: String,
    pub barangay: String,
    pub city: String,
    pub coordinates: String,
    #[serde(serialize_with = "pg_array")]
    pub image_url: Vec<String>,
    pub rent: String,
    #[serde(serialize_with = "pg_array")]
    pub amenities: Vec<String>,
    #[serde(serialize_with = "nullable")]
    pub rating: Option<f32>,
    pub max_renters: u8,
    pub is_available: bool,
    pub is_verified: bool,
    #[serde(serialize_with = "nullable")]
    pub has_internet: Option<bool>,
    #[serde(serialize_with = "nullable")]
    pub allows_pets: Option<bool>,
    #[serde(serialize_with = "nullable")]
    pub is_furnished: Option<bool>,
    #[serde(serialize_with = "nullable")]
    pub has_ac: Option<bool>,
    #[serde(serialize_with = "nullable")]
    pub is_secure: Option<bool>,
    #[serde(serialize_with = "nullable")]
    pub has_parking: Option<bool>,
    pub number_reviews: u32,
}

// =============================================================================
// Serialization helpers
// =============================================================================

/// Render a value, or the null marker when absent.
fn nullable<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: std::fmt::Display,
    S: Serializer,
{
    match value {
        Some(v) => serializer.collect_str(v),
        None => serializer.serialize_str(NULL_MARKER),
    }
}

/// Render a list as a PostgreSQL array literal: `{"a","b"}`, or `{}`.
fn pg_array<S: Serializer>(values: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_pg_array(values))
}

/// Format a list as a PostgreSQL array literal.
pub fn to_pg_array(values: &[String]) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|v| format!("\"{}\"", v.replace('\\', "\\\\").replace('"', "\\\"")))
        .collect();
    format!("{{{}}}", items.join(","))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_email_is_lowercased() {
        let owner = Owner::new(3, "Maria", "Santos", "09123456789".into());
        assert_eq!(owner.email, "maria.santos3@example.com");
        assert_eq!(owner.user_type, "owner");
        assert!(owner.is_verified);
    }

    #[test]
    fn test_source_row_title() {
        let mut row = SourceRow::default();
        assert_eq!(row.title(), None);

        row.name = "   ".into();
        assert_eq!(row.title(), None);

        row.name = "  Casa Luna ".into();
        assert_eq!(row.title(), Some("Casa Luna"));
    }

    #[test]
    fn test_canonical_column() {
        assert_eq!(SourceRow::canonical_column("Lease/Contract"), "Lease / Contract");
        assert_eq!(SourceRow::canonical_column("Lease / Contract"), "Lease / Contract");
        assert_eq!(
            SourceRow::canonical_column("Secure Location"),
            "Secure Location (Gated/CCTV)"
        );
        assert_eq!(SourceRow::canonical_column("Parking"), "Parking");
    }

    #[test]
    fn test_pg_array_literal() {
        assert_eq!(to_pg_array(&[]), "{}");
        assert_eq!(
            to_pg_array(&["https://x/room1.jpg".to_string()]),
            "{\"https://x/room1.jpg\"}"
        );
        assert_eq!(
            to_pg_array(&["a".to_string(), "b\"c".to_string()]),
            "{\"a\",\"b\\\"c\"}"
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Bedspace.to_string(), "bedspace");
        assert_eq!(Category::default(), Category::Room);
    }
}
