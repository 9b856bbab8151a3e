use crate::domain::PositionReading;
use serde::{Deserialize, Serialize};

/// Body of a record-location request.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct LocationRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// Accuracy radius in meters.
    pub accuracy: f64,
}

impl From<&PositionReading> for LocationRecord {
    fn from(reading: &PositionReading) -> Self {
        LocationRecord {
            latitude: reading.coordinate.latitude,
            longitude: reading.coordinate.longitude,
            accuracy: reading.accuracy_m,
        }
    }
}

/// Response of the recording endpoint. The endpoint echoes the record back, those fields are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Acknowledgement {
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
}
