// Core algorithm exports
pub mod distance;
pub mod query;
pub mod ranker;
pub mod scoring;

pub use distance::{haversine_distance, normalized_distance};
pub use query::build_overpass_query;
pub use ranker::{compose_address, RankOutcome, Recommender};
pub use scoring::{calculate_score, category_match_component};
