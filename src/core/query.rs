use crate::models::{CategoryCatalog, Position};

/// Server-side evaluation budget in seconds, embedded in the query header.
/// Overpass has no separate timeout parameter.
const QUERY_TIMEOUT_SECS: u32 = 25;

/// Build an Overpass QL query for food venues around a position
///
/// Each tag becomes an independent `node[...](around:...)` clause inside one
/// union block, so a node matches when any single clause matches. Venue-tag
/// clauses come from the requested category (absent or unrecognized labels
/// fall back to "all"); cuisine clauses are only added for a known category
/// other than "all", so venues match by either classification scheme.
pub fn build_overpass_query(
    catalog: &CategoryCatalog,
    position: &Position,
    radius_meters: u32,
    category: Option<&str>,
) -> String {
    let spec = catalog.resolve(category);

    let mut clauses: Vec<String> = spec
        .venue_tags
        .iter()
        .map(|tag| node_clause("amenity", tag, position, radius_meters))
        .collect();

    if catalog.specific(category).is_some() {
        clauses.extend(
            spec.cuisine_tags
                .iter()
                .map(|tag| node_clause("cuisine", tag, position, radius_meters)),
        );
    }

    format!(
        "[out:json][timeout:{}];\n(\n{}\n);\nout body;\n>;\nout skel qt;\n",
        QUERY_TIMEOUT_SECS,
        clauses.join("\n")
    )
}

fn node_clause(key: &str, tag: &str, position: &Position, radius_meters: u32) -> String {
    format!(
        "  node[\"{}\"=\"{}\"](around:{},{},{});",
        key, tag, radius_meters, position.latitude, position.longitude
    )
}
