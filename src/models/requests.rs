use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find nearby recommendations
///
/// Position bounds are enforced here, before the core engine is invoked.
/// An unknown category label is not a validation error; the engine treats
/// it as "all".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default, alias = "user_id", rename = "userId")]
    pub user_id: Option<String>,
}
