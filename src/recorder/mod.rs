mod client;
mod location_record;
mod record;

pub use client::new_client;
pub use location_record::{Acknowledgement, LocationRecord};
pub use record::{RecorderError, record_location};
