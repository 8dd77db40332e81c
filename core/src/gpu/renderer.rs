//! Headless scene renderer.
//!
//! Drives one scene the way the interactive playground's render loop does:
//! upload frame data, let the scene bind its fragment uniforms, draw a
//! fullscreen triangle. Output is read back as RGBA8 pixels.

use super::{
    context::{GpuContext, GpuError},
    encoder::{FragmentUniformSlots, PassUniformEncoder, DEFAULT_SLOT_CAPACITY},
    layouts::{create_fragment_uniform_layout, create_frame_layout},
    pipelines::{create_pipeline_layout, RenderPipelineBuilder},
    shader::ShaderLibrary,
    textures::{ReadbackBuffer, RenderTarget},
};
use crate::scenes::{Scene, SceneParams, SceneType, FRAGMENT_UNIFORM_SLOT};
use wgpu::{BindGroup, Buffer, RenderPipeline};

/// Per-frame data at group 0.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub _padding: f32,
}

/// Configuration for rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub background: [f32; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            background: [0.0, 0.0, 0.0],
        }
    }
}

/// Headless renderer for a single scene.
pub struct SceneRenderer {
    ctx: GpuContext,
    pipeline: RenderPipeline,
    frame_buffer: Buffer,
    frame_bind_group: BindGroup,
    slots: FragmentUniformSlots,
    target: RenderTarget,
    readback: ReadbackBuffer,
    config: RenderConfig,
    scene_type: SceneType,
}

impl SceneRenderer {
    /// Create a renderer for `scene` on a fresh GPU context.
    pub async fn new(config: RenderConfig, scene: &dyn Scene) -> Result<Self, GpuError> {
        let ctx = GpuContext::new().await?;
        Self::with_context(ctx, config, scene)
    }

    /// Create a renderer for `scene` on an existing GPU context.
    pub fn with_context(
        ctx: GpuContext,
        config: RenderConfig,
        scene: &dyn Scene,
    ) -> Result<Self, GpuError> {
        let format = wgpu::TextureFormat::Rgba8Unorm;
        let library = ShaderLibrary::new();
        for entry in [scene.vertex_func_name(), scene.fragment_func_name()] {
            if !library.has_entry_point(entry) {
                return Err(GpuError::MissingEntryPoint(entry.to_string()));
            }
        }

        let shader = library.create_module(&ctx.device);
        let frame_layout = create_frame_layout(&ctx.device);
        let fragment_layout = create_fragment_uniform_layout(&ctx.device);
        // Group indices follow the slice order: frame at 0, scene uniforms at 1.
        let pipeline_layout = create_pipeline_layout(
            &ctx.device,
            "scene_pipeline_layout",
            &[&frame_layout, &fragment_layout],
        );

        let pipeline = RenderPipelineBuilder::new("scene_pipeline", &shader)
            .layout(&pipeline_layout)
            .entry_points(scene.vertex_func_name(), scene.fragment_func_name())
            .format(format)
            .build(&ctx.device);

        let frame_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let frame_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bind_group"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let slots = FragmentUniformSlots::new(
            &ctx.device,
            &fragment_layout,
            &[FRAGMENT_UNIFORM_SLOT],
            DEFAULT_SLOT_CAPACITY,
        );

        let target = RenderTarget::for_output(
            &ctx.device,
            "scene_render_target",
            config.width,
            config.height,
            format,
        );
        let readback = ReadbackBuffer::new(&ctx.device, config.width, config.height);

        log::info!(
            "Scene renderer ready: {} at {}x{}",
            scene.name(),
            config.width,
            config.height
        );

        Ok(Self {
            ctx,
            pipeline,
            frame_buffer,
            frame_bind_group,
            slots,
            target,
            readback,
            config,
            scene_type: scene.scene_type(),
        })
    }

    /// Render one frame of `scene` with `params` at `time` seconds.
    ///
    /// Returns RGBA pixel data.
    pub fn render_frame(
        &self,
        scene: &dyn Scene,
        params: &SceneParams,
        time: f32,
    ) -> Result<Vec<u8>, GpuError> {
        if scene.scene_type() != self.scene_type {
            return Err(GpuError::SceneMismatch {
                expected: self.scene_type.name(),
                found: scene.scene_type().name(),
            });
        }

        let frame = FrameUniforms {
            resolution: [self.config.width as f32, self.config.height as f32],
            time,
            _padding: 0.0,
        };
        self.ctx
            .queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&frame));

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: self.target.view(),
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: self.config.background[0] as f64,
                            g: self.config.background[1] as f64,
                            b: self.config.background[2] as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.frame_bind_group, &[]);

            let bound = {
                let mut uniforms =
                    PassUniformEncoder::new(&self.ctx.queue, &mut render_pass, &self.slots);
                scene.set_uniforms(params, &mut uniforms);
                uniforms.writes()
            };

            // The pipeline layout expects group 1; without a scene bind there is nothing valid to draw.
            if bound > 0 {
                render_pass.draw(0..3, 0..1);
            } else {
                log::debug!("{}: no fragment uniforms bound, skipping draw", scene.name());
            }
        }

        self.readback.copy_from(&mut encoder, &self.target);
        self.ctx.queue.submit(std::iter::once(encoder.finish()));

        self.readback.read_pixels(&self.ctx.device)
    }

    /// Get the render configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Get GPU adapter info.
    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.ctx.adapter_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::{create_scene, default_params};

    #[test]
    fn test_frame_uniforms_layout() {
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 16);
    }

    #[tokio::test]
    async fn test_renderer_creation() {
        let scene = create_scene(SceneType::RepeatingCircles);
        let config = RenderConfig {
            width: 320,
            height: 180,
            ..Default::default()
        };

        if let Ok(renderer) = SceneRenderer::new(config, scene.as_ref()).await {
            let info = renderer.adapter_info();
            assert!(!info.name.is_empty());
            assert_eq!(renderer.config().width, 320);
        }
    }

    #[tokio::test]
    async fn test_render_frame() {
        let scene = create_scene(SceneType::RepeatingCircles);
        let params = default_params(SceneType::RepeatingCircles);
        let config = RenderConfig {
            width: 320,
            height: 180,
            background: [0.0, 0.0, 0.0],
        };

        if let Ok(renderer) = SceneRenderer::new(config.clone(), scene.as_ref()).await {
            let pixels = renderer.render_frame(scene.as_ref(), &params, 0.0).unwrap();
            assert_eq!(pixels.len(), (config.width * config.height * 4) as usize);

            // Circle outlines should light up some pixels
            let has_color = pixels.chunks(4).any(|p| p[0] > 0 || p[1] > 0 || p[2] > 0);
            assert!(has_color, "Rendered frame should contain colored pixels");
        }
    }
}
