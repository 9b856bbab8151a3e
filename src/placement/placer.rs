use crate::domain::{Anchor, GeoCoordinate};
use crate::geodesy::{GeodesyError, great_circle_distance, local_offset};
use crate::placement::{Placement, PlacementPolicy, ScenePosition};
use ordered_float::OrderedFloat;
use tracing::{debug, instrument};

/// Turns the viewer's position into scene placements for a fixed set of anchors.
#[derive(Debug)]
pub struct Placer {
    anchors: Vec<Anchor>,
    policy: PlacementPolicy,
    visibility_radius_m: Option<f64>,
    latched: Vec<Option<ScenePosition>>,
}

impl Placer {
    pub fn new(anchors: Vec<Anchor>, policy: PlacementPolicy, visibility_radius_m: Option<f64>) -> Self {
        let latched = vec![None; anchors.len()];
        Placer {
            anchors,
            policy,
            visibility_radius_m,
            latched,
        }
    }

    /// Returns one placement per anchor, nearest first.
    ///
    /// Distance and visibility are always recomputed. With [`PlacementPolicy::Once`] the position
    /// stays where the first update put it.
    #[instrument(skip(self))]
    pub fn update(&mut self, origin: &GeoCoordinate) -> Result<Vec<Placement>, GeodesyError> {
        let mut placements = Vec::with_capacity(self.anchors.len());

        for (anchor, latched) in self.anchors.iter().zip(self.latched.iter_mut()) {
            let offset = local_offset(origin, &anchor.location)?;
            let distance = great_circle_distance(origin, &anchor.location)?;

            let computed = ScenePosition {
                x: offset.x,
                y: anchor.height_m,
                z: offset.z,
            };
            let position = match self.policy {
                PlacementPolicy::Continuous => computed,
                PlacementPolicy::Once => *latched.get_or_insert(computed),
            };
            let visible = self.visibility_radius_m.is_none_or(|radius| distance.meters() <= radius);

            debug!(anchor = anchor.name, "📍 '{}' at ({:.1}, {:.1}, {:.1}), {} away", anchor.name, position.x, position.y, position.z, distance);
            placements.push(Placement {
                anchor: anchor.name.clone(),
                model: anchor.model.clone(),
                position,
                distance,
                visible,
            });
        }

        placements.sort_by_key(|placement| OrderedFloat(placement.distance.meters()));
        Ok(placements)
    }
}
