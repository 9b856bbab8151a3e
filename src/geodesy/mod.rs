mod error;
mod great_circle;
mod local_offset;

pub use error::GeodesyError;
pub use great_circle::great_circle_distance;
pub use local_offset::local_offset;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
