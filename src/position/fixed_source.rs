use crate::domain::{GeoCoordinate, PositionReading};
use crate::position::{PositionError, PositionSource};
use async_trait::async_trait;

/// Always reports the same coordinate, for stationary installations and demos.
#[derive(Debug)]
pub struct FixedSource {
    coordinate: GeoCoordinate,
    accuracy_m: f64,
}

pub const SOURCE_ID: &str = "fixed";

impl FixedSource {
    pub fn new(coordinate: GeoCoordinate, accuracy_m: f64) -> Self {
        FixedSource { coordinate, accuracy_m }
    }
}

#[async_trait]
impl PositionSource for FixedSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn read(&self) -> Result<PositionReading, PositionError> {
        Ok(PositionReading::new(self.coordinate, self.accuracy_m))
    }
}
