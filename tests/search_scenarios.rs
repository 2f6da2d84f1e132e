use chrono::NaiveDate;
use property_search::{filter_listings, Catalog, Listing, SearchCriteria};

fn scenario_catalog() -> Catalog {
    Catalog::from_json(
        r#"[
            {"id": 1, "type": "house", "price": 300000, "bedrooms": 3, "postcode": "COL03",
             "dateAdded": "2024-01-01", "title": "House", "description": "", "location": "",
             "images": ["1.jpg"]},
            {"id": 2, "type": "flat", "price": 150000, "bedrooms": 1, "postcode": "COL04",
             "dateAdded": "2024-06-01", "title": "Flat", "description": "", "location": "",
             "images": ["2.jpg"]}
        ]"#,
    )
    .unwrap()
}

fn ids(result: &[&Listing]) -> Vec<u64> {
    result.iter().map(|listing| listing.id).collect()
}

#[test]
fn house_under_400k() {
    let catalog = scenario_catalog();
    let criteria = SearchCriteria {
        property_type: Some("house".into()),
        max_price: Some(400_000.0),
        ..Default::default()
    };
    assert_eq!(ids(&filter_listings(catalog.listings(), Some(&criteria))), vec![1]);
}

#[test]
fn at_least_two_bedrooms() {
    let catalog = scenario_catalog();
    let criteria = SearchCriteria {
        min_bedrooms: Some(2.0),
        ..Default::default()
    };
    assert_eq!(ids(&filter_listings(catalog.listings(), Some(&criteria))), vec![1]);
}

#[test]
fn fractional_and_negative_price_bounds_from_json() {
    let catalog = scenario_catalog();

    let half: SearchCriteria = serde_json::from_str(r#"{"maxPrice": 200000.5}"#).unwrap();
    assert_eq!(ids(&filter_listings(catalog.listings(), Some(&half))), vec![2]);

    let negative: SearchCriteria = serde_json::from_str(r#"{"maxPrice": -1}"#).unwrap();
    assert!(filter_listings(catalog.listings(), Some(&negative)).is_empty());

    let as_text: SearchCriteria = serde_json::from_str(r#"{"minPrice": "150000.01"}"#).unwrap();
    assert_eq!(ids(&filter_listings(catalog.listings(), Some(&as_text))), vec![1]);
}

#[test]
fn padded_type_and_postcode_criteria() {
    let catalog = Catalog::from_json(
        r#"[
            {"id": 1, "type": "house", "price": 300000, "bedrooms": 3, "postcode": "COL03 ",
             "dateAdded": "2024-01-01", "title": "House", "description": "", "location": ""},
            {"id": 2, "type": "flat", "price": 150000, "bedrooms": 1, "postcode": "COL04",
             "dateAdded": "2024-06-01", "title": "Flat", "description": "", "location": ""}
        ]"#,
    )
    .unwrap();

    for kind in ["  ANY ", "   "] {
        let criteria = SearchCriteria {
            property_type: Some(kind.into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_listings(catalog.listings(), Some(&criteria))), vec![1, 2]);
    }

    let postcode = SearchCriteria {
        postcode: Some(" col03 ".into()),
        ..Default::default()
    };
    assert_eq!(ids(&filter_listings(catalog.listings(), Some(&postcode))), vec![1]);
}

#[test]
fn single_listing_type_match_and_mismatch() {
    let catalog = Catalog::bundled().unwrap();
    for listing in catalog.listings() {
        let single = std::slice::from_ref(listing);

        let same = SearchCriteria {
            property_type: Some(listing.kind.to_uppercase()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_listings(single, Some(&same))), vec![listing.id]);

        let other = SearchCriteria {
            property_type: Some(format!("{}-other", listing.kind)),
            ..Default::default()
        };
        assert!(filter_listings(single, Some(&other)).is_empty());
    }
}

#[test]
fn price_bounds_hold_and_order_is_kept_on_bundled_catalog() {
    let catalog = Catalog::bundled().unwrap();
    let (min, max) = (20_000_000.0, 40_000_000.0);
    let criteria = SearchCriteria {
        min_price: Some(min),
        max_price: Some(max),
        ..Default::default()
    };

    let result = filter_listings(catalog.listings(), Some(&criteria));
    assert!(!result.is_empty());
    assert!(result.iter().all(|l| l.price >= min && l.price <= max));

    let expected: Vec<u64> = catalog
        .listings()
        .iter()
        .filter(|l| l.price >= min && l.price <= max)
        .map(|l| l.id)
        .collect();
    assert_eq!(ids(&result), expected);
}

#[test]
fn any_type_alone_returns_everything() {
    let catalog = Catalog::bundled().unwrap();
    let criteria = SearchCriteria {
        property_type: Some("any".into()),
        ..Default::default()
    };
    assert_eq!(
        filter_listings(catalog.listings(), Some(&criteria)).len(),
        catalog.len()
    );
}

#[test]
fn criteria_json_from_the_search_form() {
    let catalog = Catalog::bundled().unwrap();
    let criteria: SearchCriteria = serde_json::from_str(
        r#"{
            "type": "flat",
            "minPrice": "not a number",
            "maxPrice": null,
            "minBedrooms": 2,
            "dateAfter": "2024-12-01T00:00:00.000Z",
            "postcode": " col05 "
        }"#,
    )
    .unwrap();

    assert_eq!(criteria.min_price, None);
    assert_eq!(criteria.date_after, NaiveDate::from_ymd_opt(2024, 12, 1));

    let result = filter_listings(catalog.listings(), Some(&criteria));
    assert_eq!(ids(&result), vec![6]);
}

#[test]
fn filtering_does_not_touch_inputs() {
    let catalog = Catalog::bundled().unwrap();
    let before = catalog.listings().to_vec();
    let criteria = SearchCriteria {
        max_bedrooms: Some(2.0),
        ..Default::default()
    };

    let first = ids(&filter_listings(catalog.listings(), Some(&criteria)));
    let second = ids(&filter_listings(catalog.listings(), Some(&criteria)));
    assert_eq!(first, second);
    assert_eq!(catalog.listings(), before.as_slice());
}
