//! Geodesic primitives shared by the analytics services.

use crate::api::GeoPoint;

/// Earth radius in nautical miles, used for distance calculations.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Great-circle distance between two lat/lon points in nautical miles using
/// the Haversine formula.
///
/// Inputs are trusted: coordinates are not range-checked and NaN propagates
/// to the result. The formula is symmetric, so
/// `haversine_distance_nm(a, b) == haversine_distance_nm(b, a)` exactly.
pub fn haversine_distance_nm(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_NM * c
}

/// Initial bearing from `a` to `b` in degrees [0, 360), clockwise from north.
pub fn initial_bearing_deg(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let x = delta_lon.sin() * lat2_rad.cos();
    let y = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * delta_lon.cos();

    let bearing = x.atan2(y).to_degrees();
    (bearing + 360.0) % 360.0
}
