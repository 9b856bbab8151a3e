mod anchor;
mod distance;
mod geo_coordinate;
mod local_offset;
mod position_reading;

pub use anchor::Anchor;
pub use distance::Distance;
pub use geo_coordinate::GeoCoordinate;
pub use local_offset::LocalOffset;
pub use position_reading::PositionReading;
