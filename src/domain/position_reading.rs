use crate::domain::GeoCoordinate;
use chrono::{DateTime, Utc};

/// A single fix reported by a position source.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionReading {
    pub coordinate: GeoCoordinate,
    /// Radius of the accuracy circle, in meters.
    pub accuracy_m: f64,
    pub timestamp: DateTime<Utc>,
}

impl PositionReading {
    pub fn new(coordinate: GeoCoordinate, accuracy_m: f64) -> Self {
        PositionReading {
            coordinate,
            accuracy_m,
            timestamp: Utc::now(),
        }
    }

    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.timestamp
    }
}
