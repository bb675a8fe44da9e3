use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Geographic position in signed decimal degrees
///
/// Valid positions satisfy -90 <= latitude <= 90 and -180 <= longitude <= 180.
/// The HTTP layer validates bounds before any core function sees a position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Free-form OSM tag dictionary
///
/// Wraps the untyped tag object Overpass returns. Missing keys are not an
/// error: `get` yields `None` and `get_or_empty` yields `""`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagMap(HashMap<String, String>);

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for TagMap {
    fn from(tags: HashMap<String, String>) -> Self {
        Self(tags)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Raw point-of-interest node from the Overpass API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoiRecord {
    pub id: i64,
    pub position: Position,
    #[serde(default)]
    pub tags: TagMap,
}

impl PoiRecord {
    /// Venue name, if the node carries a non-empty name tag
    pub fn name(&self) -> Option<&str> {
        self.tags.get("name").filter(|n| !n.is_empty())
    }
}

/// Scored recommendation produced by the ranker
///
/// Transient: computed per request and handed straight to the caller,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub address: String,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    pub score: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub amenity: String,
    pub cuisine: String,
    pub phone: String,
    pub website: String,
    #[serde(rename = "openingHours")]
    pub opening_hours: String,
}

/// Scoring weights
///
/// Not required to sum to 1.0, though the defaults do.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub distance: f64,
    pub category: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            distance: 0.7,
            category: 0.3,
        }
    }
}

/// Per-user conversational state: last shared position and chosen category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSession {
    pub position: Option<Position>,
    pub category: Option<String>,
}
