use crate::domain::{GeoCoordinate, PositionReading};
use crate::geodesy::GeodesyError;
use crate::position::{PositionError, PositionOptions};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

/// One line of a recorded track: either a fix or the failure the device reported instead.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TrackEntry {
    Reading {
        latitude: f64,
        longitude: f64,
        accuracy_m: f64,
        #[serde(default)]
        timestamp: Option<DateTime<Utc>>,
    },
    Failure {
        error: RecordedFailure,
        /// How long the device waited before giving up, for recorded timeouts.
        #[serde(default, with = "humantime_serde")]
        timeout: Option<Duration>,
    },
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RecordedFailure {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

impl TrackEntry {
    pub fn validate(&self) -> Result<(), GeodesyError> {
        match self {
            TrackEntry::Reading {
                latitude,
                longitude,
                accuracy_m,
                ..
            } => {
                GeoCoordinate::new(*latitude, *longitude)?;
                if !(accuracy_m.is_finite() && *accuracy_m >= 0.0) {
                    return Err(GeodesyError::InvalidInput(format!("invalid accuracy: {}, must be a non-negative number of meters", accuracy_m)));
                }
                Ok(())
            }
            TrackEntry::Failure { .. } => Ok(()),
        }
    }

    /// Readings without a timestamp are stamped with `now`.
    pub fn to_reading(&self, now: DateTime<Utc>) -> Result<PositionReading, PositionError> {
        match self {
            TrackEntry::Reading {
                latitude,
                longitude,
                accuracy_m,
                timestamp,
            } => Ok(PositionReading {
                coordinate: GeoCoordinate {
                    latitude: *latitude,
                    longitude: *longitude,
                },
                accuracy_m: *accuracy_m,
                timestamp: timestamp.unwrap_or(now),
            }),
            TrackEntry::Failure { error, timeout } => Err(match error {
                RecordedFailure::PermissionDenied => PositionError::PermissionDenied,
                RecordedFailure::PositionUnavailable => PositionError::PositionUnavailable("recorded in track".to_string()),
                RecordedFailure::Timeout => PositionError::Timeout(timeout.unwrap_or(PositionOptions::default().timeout)),
            }),
        }
    }
}
