//! Great-circle distance helpers.

use zeromap_core::Coordinates;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two WGS-84 points, in kilometres.
///
/// Symmetric up to floating-point rounding, and zero for identical points.
#[must_use]
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Keeps only the points within `max_km` of `center`, preserving order.
///
/// Used to restrict cached place data to the neighbourhood of a reference
/// point before rendering.
#[must_use]
pub fn within_km(center: Coordinates, points: &[Coordinates], max_km: f64) -> Vec<Coordinates> {
    points
        .iter()
        .copied()
        .filter(|point| haversine_km(center, *point) <= max_km)
        .collect()
}
