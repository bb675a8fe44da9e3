//! Savora Algo - location-based restaurant recommendation service
//!
//! This library queries the OpenStreetMap Overpass API for food venues
//! around a position and ranks them by distance and category affinity.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{build_overpass_query, haversine_distance, RankOutcome, Recommender};
pub use models::{
    CategoryCatalog, PoiRecord, Position, RecommendRequest, RecommendResponse, Recommendation,
    ScoringWeights, TagMap,
};
