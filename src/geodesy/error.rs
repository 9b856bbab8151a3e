use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeodesyError {
    #[error("{0}")]
    InvalidInput(String),
}
