use crate::domain::PositionReading;
use crate::position::{PositionError, PositionOptions, PositionSource, PositionWatch};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio::time::{self, MissedTickBehavior};
use tokio::task;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, info, instrument, warn};

/// Serves one-shot and continuous position requests on top of a [`PositionSource`].
#[derive(Debug, Clone)]
pub struct Geolocator {
    source: Arc<dyn PositionSource>,
    last_reading: Arc<Mutex<Option<PositionReading>>>,
}

impl Geolocator {
    pub fn new(source: Arc<dyn PositionSource>) -> Self {
        Geolocator {
            source,
            last_reading: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns a reading no older than `options.maximum_age`, reading the source when the cached one is too old.
    #[instrument(skip(self), fields(source = self.source.id()))]
    pub async fn current_position(&self, options: &PositionOptions) -> Result<PositionReading, PositionError> {
        let mut last_reading = self.last_reading.lock().await;

        if let Some(cached) = last_reading.as_ref().filter(|reading| is_fresh(reading, options.maximum_age)) {
            debug!("🛰️ Reusing cached position from {}", cached.timestamp);
            return Ok(cached.clone());
        }

        let reading = match time::timeout(options.timeout, self.source.read()).await {
            Ok(result) => result?,
            Err(_) => {
                warn!("⏳ No position within {} ms", options.timeout.as_millis());
                return Err(PositionError::Timeout(options.timeout));
            }
        };

        *last_reading = Some(reading.clone());
        Ok(reading)
    }

    /// Polls the source every `interval` until the source closes or the returned watch is dropped.
    pub fn watch(&self, options: PositionOptions, interval: Duration, buffer_size: usize) -> PositionWatch {
        let (tx, rx) = mpsc::channel(buffer_size.max(1));
        let geolocator = self.clone();

        let task = task::spawn(async move {
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let result = geolocator.current_position(&options).await;

                if result == Err(PositionError::SourceClosed) {
                    info!("🛰️ Position source '{}' closed, ending watch", geolocator.source.id());
                    break;
                }

                if tx.send(result).await.is_err() {
                    debug!("🛰️ Watch receiver dropped, stopping");
                    break;
                }
            }
        });

        PositionWatch::new(ReceiverStream::new(rx), task)
    }
}

fn is_fresh(reading: &PositionReading, maximum_age: Duration) -> bool {
    if maximum_age.is_zero() {
        return false;
    }

    match reading.age(Utc::now()).to_std() {
        Ok(age) => age <= maximum_age,
        // Timestamped in the future
        Err(_) => true,
    }
}
