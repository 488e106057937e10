//! Haversine great-circle distance.

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers.
///
/// Inputs are plain degree-valued latitudes and longitudes. No validation is
/// performed: the partner set is static, trusted data, and malformed
/// coordinates produce a mathematically defined but meaningless result.
///
/// # Examples
///
/// ```
/// use storefront_core::distance::haversine_km;
///
/// // San Francisco to Denver, roughly 1,525 km.
/// let d = haversine_km(37.7749, -122.4194, 39.7392, -104.9903);
/// assert!(d > 1400.0 && d < 1600.0);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
