//! CSV output for the database import.
//!
//! Each file is written in one go and replaces whatever was there. Column
//! order comes from the field order of the serialized model.

use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::error::{OutputError, OutputResult};
use crate::models::{Owner, Property};

/// Header of the properties file.
pub const PROPERTY_COLUMNS: &[&str] = &[
    "owner_id", "title", "description", "category", "street", "barangay", "city",
    "coordinates", "image_url", "rent", "amenities", "rating", "max_renters",
    "is_available", "is_verified", "has_internet", "allows_pets", "is_furnished",
    "has_ac", "is_secure", "has_parking", "number_reviews",
];

/// Header of the owners file.
pub const OWNER_COLUMNS: &[&str] = &[
    "owner_id", "first_name", "last_name", "email", "phone_number", "user_type", "is_verified",
];

/// Serialize records as CSV into any writer.
///
/// `label` names the destination in error messages.
pub fn write_records<W: Write, T: Serialize>(
    writer: W,
    columns: &[&str],
    records: &[T],
    label: &str,
) -> OutputResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    let to_output_error = |e: csv::Error| OutputError::Csv {
        path: label.to_string(),
        message: e.to_string(),
    };

    // Written explicitly so an empty record set still gets a header row.
    csv_writer.write_record(columns).map_err(to_output_error)?;
    for record in records {
        csv_writer.serialize(record).map_err(to_output_error)?;
    }

    csv_writer.flush().map_err(|source| OutputError::Io {
        path: label.to_string(),
        source,
    })
}

/// Write records to a file, truncating it first.
pub fn write_file<T: Serialize>(path: &Path, columns: &[&str], records: &[T]) -> OutputResult<()> {
    let label = path.display().to_string();
    let file = std::fs::File::create(path).map_err(|source| OutputError::Io {
        path: label.clone(),
        source,
    })?;
    write_records(std::io::BufWriter::new(file), columns, records, &label)
}

/// Write the properties file.
pub fn write_properties(path: &Path, properties: &[Property]) -> OutputResult<()> {
    write_file(path, PROPERTY_COLUMNS, properties)
}

/// Write the owners file, in id order.
pub fn write_owners(path: &Path, owners: &[Owner]) -> OutputResult<()> {
    write_file(path, OWNER_COLUMNS, owners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::tempdir;

    fn sample_property() -> Property {
        Property {
            owner_id: 2,
            title: "Casa Luna".into(),
            description: "Near campus, quiet.".into(),
            category: Category::Apartment,
            street: String::new(),
            barangay: "Bantayan".into(),
            city: "Dumaguete City".into(),
            coordinates: "9.30, 123.30".into(),
            image_url: vec!["https://x/room3.jpg".into()],
            rent: "9000".into(),
            amenities: Vec::new(),
            rating: None,
            max_renters: 3,
            is_available: true,
            is_verified: false,
            has_internet: Some(true),
            allows_pets: Some(false),
            is_furnished: None,
            has_ac: Some(true),
            is_secure: None,
            has_parking: Some(false),
            number_reviews: 0,
        }
    }

    fn render<T: Serialize>(columns: &[&str], records: &[T]) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, columns, records, "memory").unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_property_row_format() {
        let out = render(PROPERTY_COLUMNS, &[sample_property()]);
        let mut lines = out.lines();

        assert_eq!(lines.next().unwrap(), PROPERTY_COLUMNS.join(","));
        assert_eq!(
            lines.next().unwrap(),
            "2,Casa Luna,\"Near campus, quiet.\",apartment,,Bantayan,Dumaguete City,\
             \"9.30, 123.30\",\"{\"\"https://x/room3.jpg\"\"}\",9000,{},NULL,3,true,false,\
             true,false,NULL,true,NULL,false,0"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_owner_row_format() {
        let owner = Owner::new(1, "Juan", "Cruz", "09123456789".into());
        let out = render(OWNER_COLUMNS, &[owner]);

        assert_eq!(
            out,
            "owner_id,first_name,last_name,email,phone_number,user_type,is_verified\n\
             1,Juan,Cruz,juan.cruz1@example.com,09123456789,owner,true\n"
        );
    }

    #[test]
    fn test_empty_set_still_has_header() {
        let out = render::<Owner>(OWNER_COLUMNS, &[]);
        assert_eq!(out, format!("{}\n", OWNER_COLUMNS.join(",")));
    }

    #[test]
    fn test_write_file_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("owners_import.csv");
        std::fs::write(&path, "stale content that is much longer than the new file\n".repeat(20)).unwrap();

        write_owners(&path, &[Owner::new(1, "Ana", "Reyes", "09999999999".into())]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("properties.csv");
        let err = write_properties(&path, &[sample_property()]).unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
        assert!(err.to_string().contains("properties.csv"));
    }
}
