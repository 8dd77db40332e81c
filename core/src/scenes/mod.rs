//! Playground scenes.
//!
//! A scene pairs a vertex/fragment entry point in the shared shader library
//! with a small set of user-tunable parameters. Each frame the host asks the
//! scene to bind those parameters as fragment uniforms; the scene also
//! describes the configuration panel used to edit them.
//!
//! Scenes hold no state. The parameters are owned by the host (see
//! [`crate::playground::Playground`]) and passed in by reference.

mod registry;
mod repeating_circles;
mod uniforms;

pub use registry::{create_scene, default_params, SceneInfo};
pub use repeating_circles::{
    keys, RepeatingCirclesParams, RepeatingCirclesScene, RepeatingCirclesUniforms, COUNT_RANGE,
    SCALE_RANGE,
};
pub use uniforms::{UniformBlock, UniformEncoder, FRAGMENT_UNIFORM_SLOT};

use crate::panel::{ConfigPanel, ControlValue, ParamSet};

/// Available scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneType {
    RepeatingCircles,
}

impl SceneType {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "repeating-circles" | "repeatingcircles" | "repeating_circles" | "circles" => {
                Some(Self::RepeatingCircles)
            }
            _ => None,
        }
    }

    /// Slug used on command lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RepeatingCircles => "repeating-circles",
        }
    }

    /// Human-readable name for the scene picker.
    pub fn title(&self) -> &'static str {
        match self {
            Self::RepeatingCircles => "Repeating Circles",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::RepeatingCircles => "Rows of circle polygons with optional rotation",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::RepeatingCircles]
    }
}

/// Scene-specific parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneParams {
    RepeatingCircles(RepeatingCirclesParams),
}

impl Default for SceneParams {
    fn default() -> Self {
        Self::RepeatingCircles(RepeatingCirclesParams::default())
    }
}

impl SceneParams {
    pub fn scene_type(&self) -> SceneType {
        match self {
            Self::RepeatingCircles(_) => SceneType::RepeatingCircles,
        }
    }

    fn as_param_set(&self) -> &dyn ParamSet {
        match self {
            Self::RepeatingCircles(p) => p,
        }
    }

    fn as_param_set_mut(&mut self) -> &mut dyn ParamSet {
        match self {
            Self::RepeatingCircles(p) => p,
        }
    }
}

impl ParamSet for SceneParams {
    fn get(&self, key: &str) -> Option<ControlValue> {
        self.as_param_set().get(key)
    }

    fn set(&mut self, key: &str, value: ControlValue) -> bool {
        self.as_param_set_mut().set(key, value)
    }
}

/// Trait for playground scenes.
pub trait Scene: Send + Sync {
    /// Scene type identifier.
    fn scene_type(&self) -> SceneType;

    /// Name shown in the scene picker.
    fn name(&self) -> &'static str;

    /// Vertex entry point in the shared shader library.
    fn vertex_func_name(&self) -> &'static str;

    /// Fragment entry point in the shared shader library.
    fn fragment_func_name(&self) -> &'static str;

    /// Snapshot of `params` in the fragment uniform layout, if the scene has one.
    fn fragment_uniforms(&self, params: &SceneParams) -> Option<UniformBlock>;

    /// Controls for editing the scene's parameters.
    fn config_panel(&self) -> ConfigPanel;

    /// Write this frame's fragment uniforms to `encoder`.
    ///
    /// Does nothing when the scene has no uniform snapshot.
    fn set_uniforms(&self, params: &SceneParams, encoder: &mut dyn UniformEncoder) {
        let Some(block) = self.fragment_uniforms(params) else {
            return;
        };
        log::trace!(
            "{}: {} uniform bytes -> fragment slot {}",
            self.name(),
            block.len(),
            FRAGMENT_UNIFORM_SLOT
        );
        encoder.set_fragment_bytes(block.as_bytes(), FRAGMENT_UNIFORM_SLOT);
    }
}
