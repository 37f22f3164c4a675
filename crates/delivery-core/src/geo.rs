//! Great-circle distance between coordinate pairs.

/// Mean Earth radius in kilometres (IUGG value).
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Haversine distance in kilometres between two `(latitude, longitude)`
/// points, both in decimal degrees, on a sphere of Earth's mean radius.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = (from.0.to_radians(), from.1.to_radians());
    let (lat2, lon2) = (to.0.to_radians(), to.1.to_radians());

    let half_dlat = (lat2 - lat1) / 2.0;
    let half_dlon = (lon2 - lon1) / 2.0;

    let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}
