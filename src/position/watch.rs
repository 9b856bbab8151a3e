use crate::domain::PositionReading;
use crate::position::PositionError;
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;
use tracing::debug;

/// A subscription to continuous position updates.
///
/// Yields every reading or error the source reports and ends when the source closes. Dropping the
/// watch, or calling [`PositionWatch::unsubscribe`], stops the background task that polls the source.
#[derive(Debug)]
pub struct PositionWatch {
    readings: ReceiverStream<Result<PositionReading, PositionError>>,
    task: JoinHandle<()>,
}

impl PositionWatch {
    pub(crate) fn new(readings: ReceiverStream<Result<PositionReading, PositionError>>, task: JoinHandle<()>) -> Self {
        PositionWatch { readings, task }
    }

    pub fn unsubscribe(self) {
        debug!("🛰️ Unsubscribing from position updates");
    }
}

impl Stream for PositionWatch {
    type Item = Result<PositionReading, PositionError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.readings).poll_next(cx)
    }
}

impl Drop for PositionWatch {
    fn drop(&mut self) {
        self.task.abort();
    }
}
