use crate::domain::PositionReading;
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;

/// A device that reports where it is.
#[async_trait]
pub trait PositionSource: Debug + Send + Sync {
    fn id(&self) -> &'static str;

    /// Returns a fresh reading. Sources may block until a fix is available, callers bound the wait.
    async fn read(&self) -> Result<PositionReading, PositionError>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PositionError {
    #[error("permission to access the position was denied")]
    PermissionDenied,
    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
    #[error("no position within {0:?}")]
    Timeout(Duration),
    #[error("the position source has no more readings")]
    SourceClosed,
}
