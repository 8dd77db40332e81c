//! Change signal between panel edits and the render path.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set by panel edits, cleared by whoever consumes the change.
///
/// The render path does not need to observe it to see fresh values; it reads
/// the parameter set every frame. Hosts that redraw on demand use it to decide
/// whether a new frame is needed.
#[derive(Debug, Default)]
pub struct DirtyFlag(AtomicBool);

impl DirtyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_dirty(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Return whether the flag was set, and clear it.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_clears() {
        let flag = DirtyFlag::new();
        assert!(!flag.take());
        flag.mark();
        assert!(flag.is_dirty());
        assert!(flag.take());
        assert!(!flag.is_dirty());
    }
}
