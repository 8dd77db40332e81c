//! GPU rendering using wgpu.
//!
//! Provides a headless host for playground scenes: device setup, the shared
//! shader library, pipeline construction, and the [`UniformEncoder`]
//! implementation scenes bind their fragment uniforms through. Uses the
//! Metal backend on macOS.
//!
//! [`UniformEncoder`]: crate::scenes::UniformEncoder

pub mod context;
pub mod encoder;
pub mod layouts;
pub mod pipelines;
pub mod renderer;
pub mod shader;
pub mod textures;

pub use context::{GpuContext, GpuError};
pub use encoder::{FragmentUniformSlots, PassUniformEncoder};
pub use renderer::{FrameUniforms, RenderConfig, SceneRenderer};
pub use shader::ShaderLibrary;
