use crate::core::distance::{haversine_distance, normalized_distance};
use crate::models::{CategoryCatalog, PoiRecord, Position, ScoringWeights};

/// Category affinity component for a record: always 0.0, 0.5, or 1.0
///
/// 1.0 when the amenity tag exactly matches a venue tag or the cuisine tag
/// exactly matches a cuisine tag; 0.5 when the cuisine tag merely contains
/// a cuisine tag as a substring (compound cuisine strings get partial
/// credit); 0.0 otherwise. The exact branch is checked before the substring
/// branch. When no specific category is requested the component is 0.0 and
/// distance dominates entirely.
pub fn category_match_component(
    record: &PoiRecord,
    catalog: &CategoryCatalog,
    category: Option<&str>,
) -> f64 {
    let Some(spec) = catalog.specific(category) else {
        return 0.0;
    };

    let amenity = record.tags.get_or_empty("amenity");
    let cuisine = record.tags.get_or_empty("cuisine");

    if spec.venue_tags.iter().any(|tag| tag == amenity)
        || spec.cuisine_tags.iter().any(|tag| tag == cuisine)
    {
        return 1.0;
    }

    if spec
        .cuisine_tags
        .iter()
        .any(|tag| cuisine.contains(tag.as_str()))
    {
        return 0.5;
    }

    0.0
}

/// Score a record against the user position and requested category
///
/// score = w_distance * (1 - normalized_distance) + w_category * match
///
/// Returns the score together with the raw distance in kilometers.
pub fn calculate_score(
    record: &PoiRecord,
    user_position: &Position,
    catalog: &CategoryCatalog,
    category: Option<&str>,
    radius_meters: u32,
    weights: &ScoringWeights,
) -> (f64, f64) {
    let distance_km = haversine_distance(user_position, &record.position);
    let normalized = normalized_distance(distance_km, radius_meters);
    let category_match = category_match_component(record, catalog, category);

    let score = weights.distance * (1.0 - normalized) + weights.category * category_match;

    (score, distance_km)
}
