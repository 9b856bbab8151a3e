mod fixed_source;
mod geolocator;
mod options;
mod source;
mod track_entry;
mod track_source;
mod watch;

pub use fixed_source::FixedSource;
pub use geolocator::Geolocator;
pub use options::PositionOptions;
pub use source::{PositionError, PositionSource};
pub use track_source::{TrackError, TrackSource};
pub use watch::PositionWatch;
