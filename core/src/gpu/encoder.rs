//! wgpu implementation of [`UniformEncoder`].
//!
//! Each fragment uniform slot is a small uniform buffer plus a bind group.
//! Writing bytes to slot `n` uploads them through the queue and binds the
//! slot's group at index `n` on the active render pass.

use std::collections::BTreeMap;

use wgpu::{BindGroup, BindGroupLayout, Buffer, Device, Queue, RenderPass};

use crate::scenes::UniformEncoder;

/// Capacity of each slot buffer, in bytes.
pub const DEFAULT_SLOT_CAPACITY: u64 = 256;

/// Uniform buffer and bind group backing one slot.
pub struct UniformSlot {
    buffer: Buffer,
    bind_group: BindGroup,
    capacity: u64,
}

impl UniformSlot {
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }
}

/// Fragment uniform slots keyed by bind group index.
pub struct FragmentUniformSlots {
    slots: BTreeMap<u32, UniformSlot>,
}

impl FragmentUniformSlots {
    /// Create one slot per index, all sharing `layout`.
    pub fn new(device: &Device, layout: &BindGroupLayout, indices: &[u32], capacity: u64) -> Self {
        let slots = indices
            .iter()
            .map(|&index| {
                let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("fragment_uniforms"),
                    size: capacity,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("fragment_uniform_bind_group"),
                    layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                });
                (
                    index,
                    UniformSlot {
                        buffer,
                        bind_group,
                        capacity,
                    },
                )
            })
            .collect();
        Self { slots }
    }

    pub fn get(&self, index: u32) -> Option<&UniformSlot> {
        self.slots.get(&index)
    }
}

/// Writes scene uniform bytes into a render pass.
pub struct PassUniformEncoder<'a, 'p> {
    queue: &'a Queue,
    pass: &'a mut RenderPass<'p>,
    slots: &'a FragmentUniformSlots,
    writes: usize,
}

impl<'a, 'p> PassUniformEncoder<'a, 'p> {
    pub fn new(queue: &'a Queue, pass: &'a mut RenderPass<'p>, slots: &'a FragmentUniformSlots) -> Self {
        Self {
            queue,
            pass,
            slots,
            writes: 0,
        }
    }

    /// Number of slots bound through this encoder.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl UniformEncoder for PassUniformEncoder<'_, '_> {
    fn set_fragment_bytes(&mut self, bytes: &[u8], index: u32) {
        let Some(slot) = self.slots.get(index) else {
            log::warn!("No fragment uniform slot {}, skipping bind", index);
            return;
        };
        if bytes.is_empty() {
            return;
        }
        if bytes.len() as u64 > slot.capacity {
            log::warn!(
                "{} uniform bytes exceed slot {} capacity of {}, skipping bind",
                bytes.len(),
                index,
                slot.capacity
            );
            return;
        }

        let align = wgpu::COPY_BUFFER_ALIGNMENT as usize;
        if bytes.len() % align == 0 {
            self.queue.write_buffer(&slot.buffer, 0, bytes);
        } else {
            let mut padded = bytes.to_vec();
            padded.resize(bytes.len().next_multiple_of(align), 0);
            self.queue.write_buffer(&slot.buffer, 0, &padded);
        }
        self.pass.set_bind_group(index, &slot.bind_group, &[]);
        self.writes += 1;
    }
}
