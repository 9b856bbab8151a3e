use crate::domain::{Distance, GeoCoordinate};
use crate::geodesy::{EARTH_RADIUS_M, GeodesyError};

/// Haversine distance between two coordinates on a spherical Earth.
pub fn great_circle_distance(a: &GeoCoordinate, b: &GeoCoordinate) -> Result<Distance, GeodesyError> {
    a.validate()?;
    b.validate()?;

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push h slightly outside [0, 1] for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Ok(Distance::from_meters(EARTH_RADIUS_M * c))
}
