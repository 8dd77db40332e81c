//! Bind group layout builders for scene pipelines.
//!
//! Scenes use two groups: frame data at group 0 and the scene's own fragment
//! uniforms at group [`FRAGMENT_UNIFORM_SLOT`](crate::scenes::FRAGMENT_UNIFORM_SLOT).

use wgpu::{BindGroupLayout, BindGroupLayoutEntry, BufferSize, Device, ShaderStages};

/// Builder for creating bind group layouts with common patterns.
pub struct BindGroupLayoutBuilder {
    label: Option<&'static str>,
    entries: Vec<BindGroupLayoutEntry>,
}

impl BindGroupLayoutBuilder {
    /// Create a new bind group layout builder.
    pub fn new(label: &'static str) -> Self {
        Self {
            label: Some(label),
            entries: Vec::new(),
        }
    }

    /// Add a uniform buffer entry.
    pub fn uniform(self, binding: u32, visibility: ShaderStages) -> Self {
        self.uniform_sized(binding, visibility, None)
    }

    /// Add a uniform buffer entry with a minimum binding size.
    pub fn uniform_sized(
        mut self,
        binding: u32,
        visibility: ShaderStages,
        min_binding_size: Option<BufferSize>,
    ) -> Self {
        self.entries.push(BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size,
            },
            count: None,
        });
        self
    }

    /// Number of entries added so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the bind group layout.
    pub fn build(self, device: &Device) -> BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: self.label,
            entries: &self.entries,
        })
    }
}

/// Group 0: per-frame data visible to both stages.
pub fn create_frame_layout(device: &Device) -> BindGroupLayout {
    BindGroupLayoutBuilder::new("frame_bind_group_layout")
        .uniform(0, ShaderStages::VERTEX | ShaderStages::FRAGMENT)
        .build(device)
}

/// Scene fragment uniforms, fragment stage only.
pub fn create_fragment_uniform_layout(device: &Device) -> BindGroupLayout {
    BindGroupLayoutBuilder::new("fragment_uniform_bind_group_layout")
        .uniform(0, ShaderStages::FRAGMENT)
        .build(device)
}
