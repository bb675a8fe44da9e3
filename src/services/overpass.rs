use crate::models::{PoiRecord, Position, TagMap};
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the Overpass API
#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error status: {0}")]
    ApiError(reqwest::StatusCode),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the OpenStreetMap Overpass interpreter
///
/// Executes Overpass QL queries and decodes the returned node elements.
/// Upstream failures degrade to an empty result set at the `search`
/// boundary, so a flaky Overpass instance shows up as "no recommendations
/// found" instead of an error.
pub struct OverpassClient {
    endpoint: String,
    client: Client,
}

impl OverpassClient {
    /// Create a new client
    ///
    /// The request timeout sits above the 25s evaluation budget embedded in
    /// each query, so the server gets a chance to answer before we give up.
    pub fn new(endpoint: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { endpoint, client }
    }

    /// Execute a query, treating any upstream failure as zero records
    pub async fn search(&self, query: &str) -> Vec<PoiRecord> {
        match self.try_search(query).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Overpass query failed, returning no results: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_search(&self, query: &str) -> Result<Vec<PoiRecord>, OverpassError> {
        let body = format!("data={}", urlencoding::encode(query));

        tracing::debug!("Posting Overpass query to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(OverpassError::ApiError(response.status()));
        }

        let json: Value = response.json().await?;

        let elements = json
            .get("elements")
            .and_then(|e| e.as_array())
            .ok_or_else(|| OverpassError::InvalidResponse("Missing elements array".into()))?;

        let records: Vec<PoiRecord> = elements.iter().filter_map(parse_node).collect();

        tracing::debug!(
            "Overpass returned {} usable nodes (of {} elements)",
            records.len(),
            elements.len()
        );

        Ok(records)
    }
}

/// Decode a single Overpass element
///
/// Only "node" elements carrying coordinates are usable; ways, relations
/// and skeleton entries without lat/lon are skipped.
fn parse_node(element: &Value) -> Option<PoiRecord> {
    if element.get("type").and_then(|t| t.as_str()) != Some("node") {
        return None;
    }

    let id = element.get("id").and_then(|i| i.as_i64())?;
    let latitude = element.get("lat").and_then(|v| v.as_f64())?;
    let longitude = element.get("lon").and_then(|v| v.as_f64())?;

    let tags: TagMap = element
        .get("tags")
        .and_then(|t| t.as_object())
        .map(|obj| {
            obj.iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect::<HashMap<String, String>>()
        })
        .unwrap_or_default()
        .into();

    Some(PoiRecord {
        id,
        position: Position::new(latitude, longitude),
        tags,
    })
}
