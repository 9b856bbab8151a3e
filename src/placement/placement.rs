use crate::domain::Distance;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPolicy {
    /// Position an anchor on its first placement and leave it there.
    Once,
    /// Re-position every anchor on every reading.
    Continuous,
}

/// Scene coordinates in meters, relative to the viewer.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct ScenePosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub anchor: String,
    pub model: String,
    pub position: ScenePosition,
    pub distance: Distance,
    pub visible: bool,
}
