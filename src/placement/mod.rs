mod placement;
mod placer;
mod scene;

pub use placement::{Placement, PlacementPolicy, ScenePosition};
pub use placer::Placer;
pub use scene::{LogScene, Scene};
