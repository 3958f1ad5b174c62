//! # Snapshot History
//!
//! Linear undo/redo over full value snapshots.
//!
//! ## Design
//!
//! - `past` holds prior values oldest-first, bounded FIFO
//! - `present` is the live value; there is no separate "current document"
//! - `future` holds redo candidates nearest-first
//! - Committing a value equal to `present` records nothing
//! - Committing a new value clears `future` (no branching timeline)

/// Undo/redo history wrapping an arbitrary value.
#[derive(Debug, Clone)]
pub struct History<T> {
    past: Vec<T>,
    present: T,
    future: Vec<T>,
    max_depth: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 50;

impl<T: Clone + PartialEq> History<T> {
    /// Wrap `value` with empty history and the default depth bound.
    pub fn new(value: T) -> Self {
        Self::with_max_depth(value, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(value: T, max_depth: usize) -> Self {
        Self {
            past: Vec::new(),
            present: value,
            future: Vec::new(),
            max_depth,
        }
    }

    /// The live value.
    pub fn present(&self) -> &T {
        &self.present
    }

    /// Commit a new value.
    ///
    /// A value structurally equal to the present one is dropped without
    /// touching the stacks. Otherwise the present value moves into `past`
    /// (evicting the oldest entry past the depth bound) and the redo
    /// stack is cleared.
    pub fn set(&mut self, value: T) -> bool {
        if value == self.present {
            return false;
        }

        self.past.push(std::mem::replace(&mut self.present, value));
        if self.max_depth > 0 && self.past.len() > self.max_depth {
            self.past.remove(0);
        }
        self.future.clear();
        true
    }

    /// Commit the result of `update(present)`.
    pub fn set_with(&mut self, update: impl FnOnce(&T) -> T) -> bool {
        self.set(update(&self.present))
    }

    /// Step back once. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.insert(0, current);
        true
    }

    /// Step forward once. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if self.future.is_empty() {
            return false;
        }
        let next = self.future.remove(0);
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        true
    }

    /// Discard all history and install `value` as the present.
    ///
    /// Used when loading a template or restoring a version wholesale:
    /// the installed state has no undo lineage of its own.
    pub fn reset(&mut self, value: T) {
        self.past.clear();
        self.future.clear();
        self.present = value;
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}
