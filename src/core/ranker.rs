use crate::core::scoring::calculate_score;
use crate::models::{
    CategoryCatalog, PoiRecord, Position, Recommendation, ScoringWeights, TagMap,
};
use std::sync::Arc;

/// Fixed placeholder when a node carries no address tags
const ADDRESS_PLACEHOLDER: &str = "Address unavailable";

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankOutcome {
    pub recommendations: Vec<Recommendation>,
    pub total_candidates: usize,
}

/// Recommendation ranking engine
///
/// # Pipeline
/// 1. Drop records without a name tag
/// 2. Score each record by distance and category affinity
/// 3. Stable sort by score, descending
/// 4. Truncate to the requested result count
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
    catalog: Arc<CategoryCatalog>,
    radius_meters: u32,
}

impl Recommender {
    pub fn new(weights: ScoringWeights, catalog: Arc<CategoryCatalog>, radius_meters: u32) -> Self {
        Self {
            weights,
            catalog,
            radius_meters,
        }
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Rank raw records into a bounded recommendation list
    ///
    /// Zero input records, or zero records surviving the name filter, yield
    /// an empty list rather than an error.
    pub fn rank(
        &self,
        records: Vec<PoiRecord>,
        user_position: &Position,
        category: Option<&str>,
        max_results: usize,
    ) -> RankOutcome {
        let total_candidates = records.len();

        let mut recommendations: Vec<Recommendation> = records
            .into_iter()
            .filter_map(|record| {
                // Unnamed nodes are unusable as recommendations
                let name = record.name()?.to_string();

                let (score, distance_km) = calculate_score(
                    &record,
                    user_position,
                    &self.catalog,
                    category,
                    self.radius_meters,
                    &self.weights,
                );

                let tags = &record.tags;
                Some(Recommendation {
                    name,
                    address: compose_address(tags),
                    distance_km,
                    score,
                    latitude: record.position.latitude,
                    longitude: record.position.longitude,
                    amenity: tags.get_or_empty("amenity").to_string(),
                    cuisine: tags.get_or_empty("cuisine").to_string(),
                    phone: tags.get_or_empty("phone").to_string(),
                    website: tags.get_or_empty("website").to_string(),
                    opening_hours: tags.get_or_empty("opening_hours").to_string(),
                })
            })
            .collect();

        // sort_by is stable: equal scores keep their input order
        recommendations.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        recommendations.truncate(max_results);

        RankOutcome {
            recommendations,
            total_candidates,
        }
    }
}

/// Compose a display address from OSM addr fragments
///
/// City, street, house number, space-separated, in that order; fragments
/// that are absent or empty are skipped.
pub fn compose_address(tags: &TagMap) -> String {
    let parts: Vec<&str> = ["addr:city", "addr:street", "addr:housenumber"]
        .into_iter()
        .filter_map(|key| tags.get(key))
        .filter(|fragment| !fragment.is_empty())
        .collect();

    if parts.is_empty() {
        ADDRESS_PLACEHOLDER.to_string()
    } else {
        parts.join(" ")
    }
}
