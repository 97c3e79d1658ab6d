//! Single-row transform: one [`SourceRow`] into at most one [`Property`].

use rand::Rng;

use super::fields::{
    build_description, clean_barangay, clean_rent, map_category, parse_boolean, parse_city,
};
use super::owners::OwnerRegistry;
use crate::models::{Property, SourceRow};

/// Public bucket holding the listing photos.
pub const IMAGE_BASE_URL: &str =
    "https://ynuhfllvtxwyloncwvys.supabase.co/storage/v1/object/public/room-pics";

/// Number of stock photos, `room1.jpg` through `room5.jpg`.
pub const IMAGE_COUNT: u8 = 5;

/// Inclusive bounds for the random occupant cap.
pub const MAX_RENTERS_RANGE: (u8, u8) = (1, 4);

/// Transform one source row.
///
/// Returns `None` for rows without a title. Otherwise the owner for the row's
/// coordinates is resolved (and created if new) in `owners`.
pub fn transform_row<R: Rng + ?Sized>(
    row: &SourceRow,
    owners: &mut OwnerRegistry,
    fallback_city: &str,
    rng: &mut R,
) -> Option<Property> {
    let title = row.title()?;
    let coordinates = row.owner_key();
    let owner_id = owners.resolve_owner(coordinates, rng);

    Some(Property {
        owner_id,
        title: title.to_string(),
        description: build_description(row),
        category: map_category(&row.type_of_unit),
        street: String::new(),
        barangay: clean_barangay(&row.barangay),
        city: parse_city(&row.location, fallback_city),
        coordinates: coordinates.to_string(),
        image_url: vec![random_image_url(rng)],
        rent: clean_rent(&row.monthly_rental),
        amenities: Vec::new(),
        rating: None,
        max_renters: rng.gen_range(MAX_RENTERS_RANGE.0..=MAX_RENTERS_RANGE.1),
        is_available: true,
        is_verified: rng.gen_bool(0.5),
        has_internet: parse_boolean(&row.internet),
        allows_pets: parse_boolean(&row.pet_friendly),
        is_furnished: parse_boolean(&row.furnished),
        has_ac: parse_boolean(&row.air_conditioning),
        is_secure: parse_boolean(&row.secure_location),
        has_parking: parse_boolean(&row.parking),
        number_reviews: 0,
    })
}

/// One of the stock photo URLs, picked uniformly.
pub fn random_image_url<R: Rng + ?Sized>(rng: &mut R) -> String {
    let n = rng.gen_range(1..=IMAGE_COUNT);
    format!("{}/room{}.jpg", IMAGE_BASE_URL, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::transform::fields::DEFAULT_CITY;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn listing(name: &str, coords: &str) -> SourceRow {
        SourceRow {
            name: name.into(),
            coordinates: coords.into(),
            type_of_unit: "Bed space".into(),
            location: "Dumaguete City, Negros Oriental".into(),
            barangay: "N/A".into(),
            notes: "Near Silliman.".into(),
            monthly_rental: "2,500-3,000".into(),
            internet: "Yes".into(),
            pet_friendly: "No".into(),
            furnished: "".into(),
            air_conditioning: "y".into(),
            secure_location: "maybe".into(),
            parking: "N".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_title_is_skipped() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut owners = OwnerRegistry::new();

        assert!(transform_row(&listing("", "1,1"), &mut owners, DEFAULT_CITY, &mut rng).is_none());
        assert!(transform_row(&listing("  \t", "1,1"), &mut owners, DEFAULT_CITY, &mut rng).is_none());
        assert!(owners.is_empty());
    }

    #[test]
    fn test_fields_are_mapped() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut owners = OwnerRegistry::new();

        let property =
            transform_row(&listing(" Bunk 4 ", " 9.3, 123.3 "), &mut owners, DEFAULT_CITY, &mut rng)
                .unwrap();

        assert_eq!(property.owner_id, 1);
        assert_eq!(property.title, "Bunk 4");
        assert_eq!(property.description, "Near Silliman.");
        assert_eq!(property.category, Category::Bedspace);
        assert_eq!(property.street, "");
        assert_eq!(property.barangay, "");
        assert_eq!(property.city, "Dumaguete City");
        assert_eq!(property.coordinates, "9.3, 123.3");
        assert_eq!(property.rent, "2500");
        assert!(property.amenities.is_empty());
        assert_eq!(property.rating, None);
        assert!(property.is_available);
        assert_eq!(property.number_reviews, 0);

        assert_eq!(property.has_internet, Some(true));
        assert_eq!(property.allows_pets, Some(false));
        assert_eq!(property.is_furnished, None);
        assert_eq!(property.has_ac, Some(true));
        assert_eq!(property.is_secure, None);
        assert_eq!(property.has_parking, Some(false));
    }

    #[test]
    fn test_random_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut owners = OwnerRegistry::new();

        for i in 0..100 {
            let row = listing(&format!("Unit {}", i), "1,1");
            let property = transform_row(&row, &mut owners, DEFAULT_CITY, &mut rng).unwrap();

            assert!((1..=4).contains(&property.max_renters));
            assert_eq!(property.image_url.len(), 1);
            let url = &property.image_url[0];
            assert!(url.starts_with(IMAGE_BASE_URL));
            assert!((1..=5).any(|n| url.ends_with(&format!("/room{}.jpg", n))));
        }
        assert_eq!(owners.len(), 1);
    }

    #[test]
    fn test_empty_location_uses_fallback_city() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut owners = OwnerRegistry::new();
        let mut row = listing("Unit", "");
        row.location = String::new();

        let property = transform_row(&row, &mut owners, "Sibulan", &mut rng).unwrap();
        assert_eq!(property.city, "Sibulan");
        assert_eq!(property.coordinates, "");
    }

    #[test]
    fn test_shared_coordinates_share_owner() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut owners = OwnerRegistry::new();

        let a = transform_row(&listing("A", "1,1"), &mut owners, DEFAULT_CITY, &mut rng).unwrap();
        let b = transform_row(&listing("B", "2,2"), &mut owners, DEFAULT_CITY, &mut rng).unwrap();
        let c = transform_row(&listing("C", "1,1"), &mut owners, DEFAULT_CITY, &mut rng).unwrap();

        assert_eq!((a.owner_id, b.owner_id, c.owner_id), (1, 2, 1));
    }
}
