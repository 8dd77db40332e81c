//! Scene factory functions and picker metadata.
//!
//! Choosing and switching scenes belongs to the host; this only builds a
//! scene from its type and describes it for display.

use serde::Serialize;

use super::{RepeatingCirclesParams, RepeatingCirclesScene, Scene, SceneParams, SceneType};

/// Create a scene instance from type.
///
/// # Example
/// ```
/// use shader_playground::scenes::{create_scene, SceneType};
///
/// let scene = create_scene(SceneType::RepeatingCircles);
/// assert_eq!(scene.scene_type(), SceneType::RepeatingCircles);
/// ```
pub fn create_scene(scene_type: SceneType) -> Box<dyn Scene> {
    log::debug!("Creating scene: {}", scene_type.name());
    match scene_type {
        SceneType::RepeatingCircles => Box::new(RepeatingCirclesScene),
    }
}

/// Get default params for a scene type.
///
/// # Example
/// ```
/// use shader_playground::scenes::{default_params, SceneParams, SceneType};
///
/// let params = default_params(SceneType::RepeatingCircles);
/// assert!(matches!(params, SceneParams::RepeatingCircles(_)));
/// ```
pub fn default_params(scene_type: SceneType) -> SceneParams {
    match scene_type {
        SceneType::RepeatingCircles => {
            SceneParams::RepeatingCircles(RepeatingCirclesParams::default())
        }
    }
}

/// What an external scene picker shows for a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneInfo {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub vertex_func: &'static str,
    pub fragment_func: &'static str,
}

impl SceneInfo {
    /// Describe a scene instance.
    pub fn of(scene: &dyn Scene) -> Self {
        let scene_type = scene.scene_type();
        Self {
            slug: scene_type.name(),
            title: scene.name(),
            description: scene_type.description(),
            vertex_func: scene.vertex_func_name(),
            fragment_func: scene.fragment_func_name(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
