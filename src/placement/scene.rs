use crate::placement::Placement;
use std::collections::HashMap;
use std::fmt::Debug;
use tracing::{debug, info};

/// Receives placements for display.
pub trait Scene: Debug + Send {
    fn place(&mut self, placement: &Placement);
}

/// A scene without a renderer: writes placements to the log and reports visibility changes.
#[derive(Debug, Default)]
pub struct LogScene {
    visible: HashMap<String, bool>,
}

impl LogScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.values().filter(|visible| **visible).count()
    }
}

impl Scene for LogScene {
    fn place(&mut self, placement: &Placement) {
        let was_visible = self.visible.insert(placement.anchor.clone(), placement.visible);

        match (was_visible, placement.visible) {
            (Some(false) | None, true) => info!(anchor = placement.anchor, "👁️ '{}' is in view, {} away", placement.anchor, placement.distance),
            (Some(true), false) => info!(anchor = placement.anchor, "🙈 '{}' is out of view, {} away", placement.anchor, placement.distance),
            _ => {}
        }

        if placement.visible {
            let position = placement.position;
            debug!(
                anchor = placement.anchor,
                model = placement.model,
                "📍 Placed '{}' at ({:.2}, {:.2}, {:.2})",
                placement.anchor,
                position.x,
                position.y,
                position.z
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Distance;
    use crate::placement::ScenePosition;
    use test_log::test;

    fn placement(anchor: &str, visible: bool) -> Placement {
        Placement {
            anchor: anchor.to_string(),
            model: "/cemetery_angel_-_miller/scene.gltf".to_string(),
            position: ScenePosition { x: 1.0, y: 0.0, z: -2.0 },
            distance: Distance::from_meters(2.2),
            visible,
        }
    }

    #[test]
    fn place_tracks_visibility_per_anchor() {
        let mut scene = LogScene::new();
        assert_eq!(scene.visible_count(), 0);

        scene.place(&placement("angel", true));
        scene.place(&placement("parliament", true));
        assert_eq!(scene.visible_count(), 2);

        scene.place(&placement("angel", false));
        assert_eq!(scene.visible_count(), 1);

        scene.place(&placement("angel", false));
        assert_eq!(scene.visible_count(), 1);
    }
}
