mod controller;
mod scenes;

pub use controller::{ExplorationState, SceneController};
pub use scenes::{Scene, SceneKind, default_scenes};
