// Unit tests for Savora Algo

use savora_algo::core::{
    distance::{haversine_distance, normalized_distance},
    query::build_overpass_query,
    ranker::compose_address,
    scoring::category_match_component,
};
use savora_algo::models::{CategoryCatalog, PoiRecord, Position, TagMap, ALL_CATEGORY};

fn poi(id: i64, lat: f64, lon: f64, tags: &[(&str, &str)]) -> PoiRecord {
    PoiRecord {
        id,
        position: Position::new(lat, lon),
        tags: tags.iter().copied().collect(),
    }
}

#[test]
fn test_haversine_distance_zero_for_identical_points() {
    let p = Position::new(25.0330, 121.5654);
    assert_eq!(haversine_distance(&p, &p), 0.0);
}

#[test]
fn test_haversine_distance_is_symmetric() {
    let a = Position::new(51.5074, -0.1278);
    let b = Position::new(48.8566, 2.3522);

    assert!((haversine_distance(&a, &b) - haversine_distance(&b, &a)).abs() < 1e-12);
}

#[test]
fn test_haversine_one_degree_at_equator() {
    // One degree of latitude on a 6371 km sphere is ~111 km
    let distance = haversine_distance(&Position::new(0.0, 0.0), &Position::new(1.0, 0.0));
    assert!((distance - 111.0).abs() < 0.5, "got {}", distance);
}

#[test]
fn test_normalized_distance_always_in_unit_interval() {
    for distance_km in [0.0, 0.5, 1.999, 2.0, 2.001, 50.0, 20000.0] {
        let normalized = normalized_distance(distance_km, 2000);
        assert!(
            (0.0..=1.0).contains(&normalized),
            "normalized {} out of range for {}km",
            normalized,
            distance_km
        );
    }
}

#[test]
fn test_category_component_takes_only_three_values() {
    let catalog = CategoryCatalog::default();
    let records = [
        poi(1, 0.0, 0.0, &[("amenity", "cafe")]),
        poi(2, 0.0, 0.0, &[("amenity", "restaurant"), ("cuisine", "sushi;seafood")]),
        poi(3, 0.0, 0.0, &[("amenity", "restaurant"), ("cuisine", "greek")]),
        poi(4, 0.0, 0.0, &[]),
    ];

    let labels: Vec<Option<&str>> = std::iter::once(None)
        .chain(catalog.labels().map(Some))
        .collect();

    for record in &records {
        for label in &labels {
            let component = category_match_component(record, &catalog, *label);
            assert!(
                component == 0.0 || component == 0.5 || component == 1.0,
                "component {} for label {:?}",
                component,
                label
            );
        }
    }
}

#[test]
fn test_all_category_component_always_zero() {
    let catalog = CategoryCatalog::default();
    let record = poi(1, 0.0, 0.0, &[("amenity", "cafe"), ("cuisine", "coffee_shop")]);

    assert_eq!(
        category_match_component(&record, &catalog, Some(ALL_CATEGORY)),
        0.0
    );
    assert_eq!(category_match_component(&record, &catalog, None), 0.0);
}

#[test]
fn test_exact_match_wins_over_substring() {
    let catalog = CategoryCatalog::default();

    // Exact cuisine value: full credit, not partial
    let exact = poi(1, 0.0, 0.0, &[("cuisine", "ramen")]);
    assert_eq!(
        category_match_component(&exact, &catalog, Some("japanese")),
        1.0
    );

    // Compound value only contains the tag: partial credit
    let compound = poi(2, 0.0, 0.0, &[("cuisine", "ramen;curry")]);
    assert_eq!(
        category_match_component(&compound, &catalog, Some("japanese")),
        0.5
    );
}

#[test]
fn test_compose_address_ordering_and_placeholder() {
    let full: TagMap = [
        ("addr:city", "Taipei"),
        ("addr:street", "Xinyi Rd"),
        ("addr:housenumber", "7"),
    ]
    .into_iter()
    .collect();
    assert_eq!(compose_address(&full), "Taipei Xinyi Rd 7");

    let street_only: TagMap = [("addr:street", "Xinyi Rd")].into_iter().collect();
    assert_eq!(compose_address(&street_only), "Xinyi Rd");

    assert_eq!(compose_address(&TagMap::new()), "Address unavailable");
}

#[test]
fn test_query_contains_radius_bound_clauses() {
    let catalog = CategoryCatalog::default();
    let position = Position::new(25.0330, 121.5654);

    let query = build_overpass_query(&catalog, &position, 2000, Some("beverage"));

    // Every clause is radius-bound to the user position
    let clause_count = query.matches("(around:2000,").count();
    let spec = catalog.resolve(Some("beverage"));
    assert_eq!(clause_count, spec.venue_tags.len() + spec.cuisine_tags.len());
}
