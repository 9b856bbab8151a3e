use crate::domain::GeoCoordinate;
use serde::Deserialize;

/// A model pinned to a geographic coordinate.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Anchor {
    pub name: String,
    /// Path of the model asset, passed through to the scene untouched.
    pub model: String,
    pub location: GeoCoordinate,
    #[serde(default)]
    pub height_m: f64,
}
