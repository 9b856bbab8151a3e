use crate::app_config::{AppConfig, Recorder};
use crate::domain::PositionReading;
use crate::recorder::{Acknowledgement, LocationRecord};
use reqwest::{Client, header};
use std::time::Duration;
use thiserror::Error;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, instrument, warn};

pub const RECORD_LOCATION_PATH: &str = "/api/record-location";

/// Sends the reading to the recording endpoint and returns its acknowledgement.
///
/// Transport failures and error statuses are retried with a jittered exponential backoff, a
/// negative acknowledgement is not.
#[instrument(skip_all, fields(latitude = reading.coordinate.latitude, longitude = reading.coordinate.longitude))]
pub async fn record_location(client: &Client, config: &AppConfig, reading: &PositionReading) -> Result<Acknowledgement, RecorderError> {
    let recorder = config.recorder();
    let url = format!("{}{}", recorder.url().trim_end_matches('/'), RECORD_LOCATION_PATH);
    let record = LocationRecord::from(reading);

    let strategy = backoff(recorder).map(jitter).take(recorder.max_attempts().saturating_sub(1));

    info!("📤 Recording location ({}, {}), accuracy {} m...", record.latitude, record.longitude, record.accuracy);
    let acknowledgement = Retry::start(strategy, || async {
        send(client, &url, &record).await.inspect_err(|e| warn!("⚠️ Unable to record location: {}. Retrying...", e))
    })
    .await?;

    if !acknowledgement.ok {
        return Err(RecorderError::Rejected(acknowledgement.message.unwrap_or_default()));
    }

    info!("📤 Recording location... OK, {}", acknowledgement.message.as_deref().unwrap_or("acknowledged"));
    Ok(acknowledgement)
}

/// Delays start at `retry_ms` and double on every attempt, capped at `retry_max_delay`.
fn backoff(recorder: &Recorder) -> impl Iterator<Item = Duration> {
    let max_delay = recorder.retry_max_delay();
    ExponentialBackoff::from_millis(2)
        .factor(recorder.retry_ms())
        .map(move |delay| (delay / 2).min(max_delay))
}

async fn send(client: &Client, url: &str, record: &LocationRecord) -> Result<Acknowledgement, reqwest::Error> {
    client
        .post(url)
        .json(record)
        .send()
        .await?
        .error_for_status()?
        .json::<Acknowledgement>()
        .await
}

#[derive(Error, Debug)]
pub enum RecorderError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("recorder set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
    #[error("the recording endpoint rejected the location: {0}")]
    Rejected(String),
}
