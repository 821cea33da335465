//! # Undo/Redo History
//!
//! Two snapshot stacks over the composition config.
//!
//! ## Design
//!
//! - Every structural mutation records the *pre-mutation* snapshot
//! - Recording clears the redo stack (a new action invalidates the
//!   undone future)
//! - Undo pops a snapshot, parks the current state on the redo stack
//! - The undo stack is bounded: past the cap, the oldest snapshot is
//!   evicted from the bottom; redo is unbounded within a session
//!
//! Snapshots are semantic copies — later mutation of the live config
//! can never retroactively alter a stored snapshot.

use bloq_model::CompositionConfig;

/// Maximum number of undo levels kept.
pub const DEFAULT_HISTORY_CAP: usize = 50;

#[derive(Debug)]
pub struct History {
    undo: Vec<CompositionConfig>,
    redo: Vec<CompositionConfig>,
    cap: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_cap(DEFAULT_HISTORY_CAP)
    }

    pub fn with_cap(cap: usize) -> Self {
        History {
            undo: Vec::new(),
            redo: Vec::new(),
            cap,
        }
    }

    /// Record a pre-mutation snapshot.
    pub fn record(&mut self, snapshot: CompositionConfig) {
        self.undo.push(snapshot);
        if self.undo.len() > self.cap {
            self.undo.remove(0);
        }
        self.redo.clear();
    }

    /// Pop the previous state; `current` moves to the redo stack.
    pub fn undo(&mut self, current: &CompositionConfig) -> Option<CompositionConfig> {
        let previous = self.undo.pop()?;
        self.redo.push(current.clone());
        Some(previous)
    }

    /// Mirror of [`History::undo`].
    pub fn redo(&mut self, current: &CompositionConfig) -> Option<CompositionConfig> {
        let next = self.redo.pop()?;
        self.undo.push(current.clone());
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
