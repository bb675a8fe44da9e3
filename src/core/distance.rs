use crate::models::Position;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two positions in kilometers
///
/// Great-circle distance on a sphere of radius 6371 km; degree inputs are
/// converted to radians before use.
#[inline]
pub fn haversine_distance(from: &Position, to: &Position) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Scale a distance to [0, 1] relative to the search radius, clamped at 1.0
///
/// Records beyond the nominal radius can come back because the Overpass
/// query matches per tag clause; they clamp to 1.0 rather than being
/// penalized further.
#[inline]
pub fn normalized_distance(distance_km: f64, radius_meters: u32) -> f64 {
    let max_distance_km = radius_meters as f64 / 1000.0;
    (distance_km / max_distance_km).min(1.0)
}
