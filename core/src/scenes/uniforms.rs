//! Uniform blocks and the encoder seam scenes write them through.
//!
//! A scene never talks to a GPU API directly. It produces a [`UniformBlock`]
//! snapshot each frame and hands its bytes to whatever [`UniformEncoder`] the
//! render loop supplies.

/// Fragment-stage uniform slot scenes bind their parameters to.
pub const FRAGMENT_UNIFORM_SLOT: u32 = 1;

/// Fixed-layout byte snapshot of a scene's parameters for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformBlock {
    bytes: Vec<u8>,
}

impl UniformBlock {
    /// Copy a `Pod` value into a new block.
    ///
    /// The block length is the value's stride, which for `#[repr(C)]` structs
    /// equals `size_of::<T>()`.
    pub fn new<T: bytemuck::Pod>(value: &T) -> Self {
        Self {
            bytes: bytemuck::bytes_of(value).to_vec(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reinterpret the block as `T`, if the length matches.
    pub fn read<T: bytemuck::Pod>(&self) -> Option<T> {
        bytemuck::try_pod_read_unaligned(&self.bytes).ok()
    }
}

/// Destination for per-draw uniform bytes.
///
/// Implemented by the render-loop driver over its active command encoder.
/// Failures are the driver's concern and never reach the scene.
pub trait UniformEncoder {
    /// Write `bytes` to the fragment-stage uniform slot `index`.
    fn set_fragment_bytes(&mut self, bytes: &[u8], index: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C)]
    #[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
    struct Pair {
        a: f32,
        b: u32,
    }

    #[test]
    fn test_block_copies_value_bytes() {
        let block = UniformBlock::new(&Pair { a: 1.0, b: 7 });
        assert_eq!(block.len(), 8);
        assert_eq!(&block.as_bytes()[0..4], &1.0f32.to_ne_bytes());
        assert_eq!(&block.as_bytes()[4..8], &7u32.to_ne_bytes());
    }

    #[test]
    fn test_block_read_back() {
        let value = Pair { a: 0.5, b: 3 };
        let block = UniformBlock::new(&value);
        assert_eq!(block.read::<Pair>(), Some(value));
        assert_eq!(block.read::<[u8; 3]>(), None);
    }
}
