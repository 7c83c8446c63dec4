//! # Transform Stack
//!
//! Translations pushed by `ADD`, `ADDX`, `ADDY`, `ADDZ` and popped by `DEL`.
//! The running offset is always the component-wise sum of the entries.
//!
//! ## Example
//!
//! ```rust
//! use gdl_preview::transform::TransformStack;
//! use glam::DVec3;
//!
//! let mut stack = TransformStack::new();
//! stack.push(DVec3::new(1.0, 2.0, 3.0));
//! stack.push(DVec3::X);
//! assert_eq!(stack.offset(), DVec3::new(2.0, 2.0, 3.0));
//! assert_eq!(stack.pop(5), 2);
//! assert_eq!(stack.offset(), DVec3::ZERO);
//! ```

use glam::DVec3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformStack {
    entries: Vec<DVec3>,
    offset: DVec3,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a translation.
    pub fn push(&mut self, delta: DVec3) {
        self.entries.push(delta);
        self.offset += delta;
    }

    /// Pops up to `count` entries and returns how many were removed.
    pub fn pop(&mut self, count: usize) -> usize {
        let removed = count.min(self.entries.len());
        self.entries.truncate(self.entries.len() - removed);
        self.offset = self.entries.iter().sum();
        removed
    }

    /// Removes every entry and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let depth = self.entries.len();
        self.entries.clear();
        self.offset = DVec3::ZERO;
        depth
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current origin for placed geometry.
    pub fn offset(&self) -> DVec3 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_exact_sum_after_pop() {
        let mut stack = TransformStack::new();
        stack.push(DVec3::splat(0.1));
        stack.push(DVec3::splat(0.2));
        stack.pop(1);
        assert_eq!(stack.offset(), DVec3::splat(0.1));
    }

    #[test]
    fn test_pop_clamps_to_depth() {
        let mut stack = TransformStack::new();
        stack.push(DVec3::Z);
        assert_eq!(stack.pop(3), 1);
        assert_eq!(stack.pop(1), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_clear_resets_offset() {
        let mut stack = TransformStack::new();
        stack.push(DVec3::new(5.0, 0.0, 0.0));
        stack.push(DVec3::Y);
        assert_eq!(stack.clear(), 2);
        assert_eq!(stack.offset(), DVec3::ZERO);
        assert_eq!(stack.depth(), 0);
    }
}
