//! Shader Playground Core
//!
//! Scenes for a shader exploration playground. Each scene pairs entry points
//! in a shared WGSL library with a handful of live-tunable parameters that are
//! packed into a fixed-layout fragment uniform block every frame.
//!
//! # Features
//!
//! - Scene adapters with typed parameters and `bytemuck` uniform layouts
//! - Toolkit-neutral configuration panels with range clamping
//! - Headless rendering via wgpu (Metal on macOS, Vulkan on Linux)
//! - egui panel rendering (when the `egui` feature is enabled)

pub mod gpu;
pub mod panel;
pub mod playground;
pub mod scenes;

// Re-export commonly used types
pub use gpu::{GpuContext, GpuError, RenderConfig, SceneRenderer};
pub use panel::{BoundPanel, ConfigPanel, ControlValue, DirtyFlag, PanelError, ParamSet};
pub use playground::{Playground, PlaygroundError};
pub use scenes::{
    create_scene, default_params, RepeatingCirclesParams, RepeatingCirclesScene,
    RepeatingCirclesUniforms, Scene, SceneInfo, SceneParams, SceneType, UniformBlock,
    UniformEncoder, FRAGMENT_UNIFORM_SLOT,
};
