//! Scene host owning the live parameter set.
//!
//! The host is the single owner of a scene's parameters. The configuration
//! panel borrows them mutably for edits; the render path borrows them shared
//! for the per-frame uniform snapshot.

use crate::gpu::{GpuError, RenderConfig, SceneRenderer};
use crate::panel::{BoundPanel, ConfigPanel, DirtyFlag, PanelError};
use crate::scenes::{
    create_scene, default_params, Scene, SceneInfo, SceneParams, SceneType, UniformBlock,
    UniformEncoder,
};

/// Errors from the playground host.
#[derive(Debug, thiserror::Error)]
pub enum PlaygroundError {
    #[error("Unknown scene: {0}")]
    UnknownScene(String),
    #[error("Panel error: {0}")]
    Panel(#[from] PanelError),
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
}

/// One scene, its parameters, and its configuration panel.
pub struct Playground {
    scene: Box<dyn Scene>,
    panel: ConfigPanel,
    params: SceneParams,
    dirty: DirtyFlag,
}

impl Playground {
    /// Host a scene with its default parameters.
    pub fn new(scene_type: SceneType) -> Self {
        let scene = create_scene(scene_type);
        let panel = scene.config_panel();
        Self {
            scene,
            panel,
            params: default_params(scene_type),
            dirty: DirtyFlag::new(),
        }
    }

    /// Host a scene chosen by slug (see [`SceneType::from_str`]).
    pub fn from_name(name: &str) -> Result<Self, PlaygroundError> {
        SceneType::from_str(name)
            .map(Self::new)
            .ok_or_else(|| PlaygroundError::UnknownScene(name.to_string()))
    }

    pub fn scene(&self) -> &dyn Scene {
        self.scene.as_ref()
    }

    pub fn info(&self) -> SceneInfo {
        SceneInfo::of(self.scene())
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    pub fn panel(&self) -> &ConfigPanel {
        &self.panel
    }

    /// Edit parameters through the bound configuration panel.
    ///
    /// # Example
    /// ```
    /// use shader_playground::playground::Playground;
    /// use shader_playground::scenes::{keys, SceneType};
    ///
    /// let mut playground = Playground::new(SceneType::RepeatingCircles);
    /// let rows = playground.edit(|panel| panel.increment(keys::NUM_ROWS)).unwrap();
    /// assert_eq!(rows, 2.0);
    /// ```
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut BoundPanel<'_>) -> R) -> R {
        let mut bound = self.panel.bind(&mut self.params, &self.dirty);
        f(&mut bound)
    }

    /// Whether parameters changed since the last call.
    pub fn take_dirty(&self) -> bool {
        self.dirty.take()
    }

    /// Current fragment uniform snapshot.
    pub fn uniform_snapshot(&self) -> Option<UniformBlock> {
        self.scene.fragment_uniforms(&self.params)
    }

    /// Bind this frame's uniforms to `encoder`.
    pub fn bind_uniforms(&self, encoder: &mut dyn UniformEncoder) {
        self.scene.set_uniforms(&self.params, encoder);
    }

    /// Create a headless renderer for the hosted scene.
    pub async fn renderer(&self, config: RenderConfig) -> Result<SceneRenderer, PlaygroundError> {
        Ok(SceneRenderer::new(config, self.scene()).await?)
    }

    /// Render one frame with the current parameters.
    pub fn render_frame(
        &self,
        renderer: &SceneRenderer,
        time: f32,
    ) -> Result<Vec<u8>, PlaygroundError> {
        Ok(renderer.render_frame(self.scene(), &self.params, time)?)
    }
}
