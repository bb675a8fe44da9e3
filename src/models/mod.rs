// Model exports
pub mod catalog;
pub mod domain;
pub mod requests;
pub mod responses;

pub use catalog::{CatalogError, CategoryCatalog, CategorySpec, ALL_CATEGORY};
pub use domain::{PoiRecord, Position, Recommendation, ScoringWeights, TagMap, UserSession};
pub use requests::RecommendRequest;
pub use responses::{ErrorResponse, HealthResponse, RecommendResponse};
