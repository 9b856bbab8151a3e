use crate::domain::{GeoCoordinate, LocalOffset};
use crate::geodesy::{EARTH_RADIUS_M, GeodesyError};

/// Returns the offset of `target` as seen from `origin` on a flat tangent plane.
///
/// This is an equirectangular approximation on a spherical Earth without elevation. The error
/// grows with the distance between the points and as `origin` approaches a pole, so results are
/// only meaningful up to a few tens of kilometers.
pub fn local_offset(origin: &GeoCoordinate, target: &GeoCoordinate) -> Result<LocalOffset, GeodesyError> {
    origin.validate()?;
    target.validate()?;

    let delta_lat = (target.latitude - origin.latitude).to_radians();
    let delta_lng = (target.longitude - origin.longitude).to_radians();

    let north_m = delta_lat * EARTH_RADIUS_M;
    let east_m = delta_lng * EARTH_RADIUS_M * origin.latitude.to_radians().cos();

    Ok(LocalOffset { x: east_m, z: -north_m })
}
