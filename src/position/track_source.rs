use crate::domain::PositionReading;
use crate::geodesy::GeodesyError;
use crate::position::track_entry::TrackEntry;
use crate::position::{PositionError, PositionSource};
use async_trait::async_trait;
use chrono::Utc;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Replays a recorded track, one entry per read.
#[derive(Debug)]
pub struct TrackSource {
    entries: Vec<TrackEntry>,
    repeat: bool,
    cursor: AtomicUsize,
}

pub const SOURCE_ID: &str = "track";

impl TrackSource {
    #[instrument]
    pub async fn load(path: &Path, repeat: bool) -> Result<Self, TrackError> {
        info!("🛰️ Loading track...");
        let content = fs::read_to_string(path).await.map_err(|e| TrackError::Io {
            source: e,
            path: path.to_path_buf(),
        })?;

        let entries = serde_json::from_str::<Vec<TrackEntry>>(&content).map_err(|e| TrackError::Parse {
            source: e,
            path: path.to_path_buf(),
        })?;

        let source = Self::from_entries(entries, repeat)?;
        info!("🛰️ Loading track... OK, {} entries", source.entries.len());
        Ok(source)
    }

    pub fn from_entries(entries: Vec<TrackEntry>, repeat: bool) -> Result<Self, TrackError> {
        if entries.is_empty() {
            return Err(TrackError::Empty);
        }

        for (index, entry) in entries.iter().enumerate() {
            entry.validate().map_err(|source| TrackError::InvalidEntry { index, source })?;
        }

        Ok(TrackSource {
            entries,
            repeat,
            cursor: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl PositionSource for TrackSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn read(&self) -> Result<PositionReading, PositionError> {
        let position = self.cursor.fetch_add(1, Ordering::Relaxed);
        let index = if self.repeat { position % self.entries.len() } else { position };

        match self.entries.get(index) {
            Some(entry) => entry.to_reading(Utc::now()),
            None => Err(PositionError::SourceClosed),
        }
    }
}

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("unable to read track '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("unable to parse track '{}': {}", path.display(), source)]
    Parse { source: serde_json::Error, path: PathBuf },
    #[error("track entry {index} is invalid: {source}")]
    InvalidEntry { index: usize, source: GeodesyError },
    #[error("track contains no entries")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoCoordinate;
    use crate::position::track_entry::RecordedFailure;
    use std::env::temp_dir;
    use test_log::test;

    fn reading(latitude: f64, longitude: f64) -> TrackEntry {
        TrackEntry::Reading {
            latitude,
            longitude,
            accuracy_m: 5.0,
            timestamp: None,
        }
    }

    #[tokio::test]
    async fn read_replays_entries_in_order_then_closes() -> Result<(), TrackError> {
        let source = TrackSource::from_entries(
            vec![
                reading(47.0, 19.0),
                TrackEntry::Failure {
                    error: RecordedFailure::PositionUnavailable,
                    timeout: None,
                },
                reading(47.1, 19.1),
            ],
            false,
        )?;

        assert_eq!(source.read().await.map(|r| r.coordinate), Ok(GeoCoordinate { latitude: 47.0, longitude: 19.0 }));
        assert!(matches!(source.read().await, Err(PositionError::PositionUnavailable(_))));
        assert_eq!(source.read().await.map(|r| r.coordinate), Ok(GeoCoordinate { latitude: 47.1, longitude: 19.1 }));
        assert_eq!(source.read().await, Err(PositionError::SourceClosed));
        assert_eq!(source.read().await, Err(PositionError::SourceClosed));

        Ok(())
    }

    #[tokio::test]
    async fn read_wraps_around_when_repeating() -> Result<(), TrackError> {
        let source = TrackSource::from_entries(vec![reading(1.0, 1.0), reading(2.0, 2.0)], true)?;

        let latitudes = [
            source.read().await.unwrap().coordinate.latitude,
            source.read().await.unwrap().coordinate.latitude,
            source.read().await.unwrap().coordinate.latitude,
        ];

        assert_eq!(latitudes, [1.0, 2.0, 1.0]);
        Ok(())
    }

    #[test]
    fn from_entries_rejects_an_empty_track() {
        assert!(matches!(TrackSource::from_entries(vec![], false), Err(TrackError::Empty)));
    }

    #[test]
    fn from_entries_reports_the_invalid_entry() {
        let result = TrackSource::from_entries(vec![reading(0.0, 0.0), reading(0.0, 190.0)], false);
        assert!(matches!(result, Err(TrackError::InvalidEntry { index: 1, .. })), "unexpected result {:?}", result);
    }

    #[test(tokio::test)]
    async fn load_reads_a_track_file() -> Result<(), TrackError> {
        let path = PathBuf::from(format!("{}/tests/resources/tracks/budapest_walk.json", env!("CARGO_MANIFEST_DIR")));
        assert!(path.is_file(), "expected path to be a file");

        let source = TrackSource::load(&path, false).await?;

        assert_eq!(source.entries.len(), 5);
        assert_eq!(source.read().await.map(|r| r.accuracy_m), Ok(12.0));
        Ok(())
    }

    #[test(tokio::test)]
    async fn load_fails_on_malformed_json() -> io::Result<()> {
        let path = temp_dir().join("geoanchor_malformed_track.json");
        fs::write(&path, "[{ \"latitude\": 47.0 ").await?;

        let result = TrackSource::load(&path, false).await;

        assert!(matches!(result, Err(TrackError::Parse { .. })), "unexpected result {:?}", result);
        Ok(())
    }

    #[test(tokio::test)]
    async fn load_fails_on_missing_file() {
        let result = TrackSource::load(Path::new("does/not/exist.json"), false).await;
        assert!(matches!(result, Err(TrackError::Io { .. })), "unexpected result {:?}", result);
    }
}
