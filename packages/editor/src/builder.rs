//! # Builder Shell
//!
//! The authoritative owner of one page's editing state: the block
//! collection, the selection, and the undo/redo history. Everything
//! else proposes changes — the inspector and the transform engine
//! issue patches, the renderer only reads.
//!
//! ## History invariant
//!
//! Every operation that changes the set, order, or content of blocks
//! records exactly one pre-mutation snapshot. Boundary moves record
//! nothing; selection changes record nothing.

use crate::history::History;
use crate::inspector::PanelRequest;
use crate::mutations::{Applied, Mutation, MoveDirection};
use crate::EditorError;
use bloq_model::{
    collect_ids, BlockId, BlockKind, BlockPatch, CompositionConfig, Position,
};
use bloq_renderer::{render_config, DeviceKind, VisualTree};
use serde_json::Value;
use tracing::debug;

pub struct Builder {
    config: CompositionConfig,
    selection: Option<BlockId>,
    history: History,
    /// Increments on every change, including undo/redo. Lets the
    /// session track dirtiness without observing individual ops.
    version: u64,
}

impl Builder {
    /// Start an editing session from a loaded config. The loaded state
    /// is the history base: nothing to undo yet.
    pub fn new(config: CompositionConfig) -> Self {
        Builder {
            config,
            selection: None,
            history: History::new(),
            version: 0,
        }
    }

    /// Start from untrusted persisted JSON, repairing what the lenient
    /// loader can repair.
    pub fn from_json(value: Value) -> Self {
        Self::new(bloq_model::config_from_json(value))
    }

    pub fn config(&self) -> &CompositionConfig {
        &self.config
    }

    pub fn selection(&self) -> Option<BlockId> {
        self.selection
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Live preview of the current state for one device kind.
    pub fn preview(&self, device: DeviceKind) -> VisualTree {
        render_config(&self.config, device)
    }

    /// Append a new default block and select nothing in particular.
    pub fn add_block(&mut self, kind: BlockKind) -> BlockId {
        let applied = self
            .apply(Mutation::AddBlock { kind })
            .expect("adding a block cannot fail");
        applied.created.expect("add always creates a block")
    }

    /// Remove a block; a matching selection clears.
    pub fn remove_block(&mut self, id: BlockId) -> Result<(), EditorError> {
        self.apply(Mutation::RemoveBlock { id })?;
        if self.selection == Some(id) {
            self.selection = None;
        }
        Ok(())
    }

    /// Clone a block right after its source and select the clone.
    pub fn duplicate_block(&mut self, id: BlockId) -> Result<BlockId, EditorError> {
        let applied = self.apply(Mutation::DuplicateBlock { id })?;
        let clone = applied.created.expect("duplicate always creates a block");
        self.selection = Some(clone);
        Ok(clone)
    }

    /// Swap with the neighbor in `direction`. Returns whether anything
    /// moved; a boundary move is a quiet no-op.
    pub fn move_block(&mut self, id: BlockId, direction: MoveDirection) -> Result<bool, EditorError> {
        let applied = self.apply(Mutation::MoveBlock { id, direction })?;
        Ok(applied.changed)
    }

    /// Replace the full ordering (after a drag-reorder gesture).
    pub fn reorder(&mut self, order: Vec<BlockId>) -> Result<(), EditorError> {
        self.apply(Mutation::Reorder { order })?;
        Ok(())
    }

    /// Merge a partial update into one block.
    pub fn patch_block(&mut self, id: BlockId, patch: BlockPatch) -> Result<(), EditorError> {
        self.apply(Mutation::PatchBlock { id, patch })?;
        Ok(())
    }

    /// Store the position a completed gesture produced. One history
    /// entry per gesture — intermediate samples never come through
    /// here.
    pub fn commit_position(&mut self, id: BlockId, position: Position) -> Result<(), EditorError> {
        self.apply(Mutation::SetPosition { id, position })?;
        Ok(())
    }

    /// Pure selection change: never enters history. Returns the panel
    /// request the inspector host uses to auto-open the property
    /// panel.
    pub fn select(&mut self, id: Option<BlockId>) -> Option<PanelRequest> {
        self.selection = id.filter(|id| self.config.index_of(*id).is_some());
        let selected = self.selection?;
        let kind = self.config.block(selected)?.kind();
        Some(PanelRequest {
            block: selected,
            kind,
        })
    }

    /// Restore the previous snapshot. No-op when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.config) {
            Some(previous) => {
                self.config = previous;
                self.after_restore();
                true
            }
            None => false,
        }
    }

    /// Mirror of [`Builder::undo`].
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.config) {
            Some(next) => {
                self.config = next;
                self.after_restore();
                true
            }
            None => false,
        }
    }

    fn after_restore(&mut self) {
        self.version += 1;
        // A restored snapshot may no longer contain the selected block.
        if let Some(id) = self.selection {
            if !collect_ids(&self.config.blocks).contains(&id) {
                self.selection = None;
            }
        }
    }

    fn apply(&mut self, mutation: Mutation) -> Result<Applied, EditorError> {
        let snapshot = self.config.clone();
        let applied = mutation.apply(&mut self.config)?;
        if applied.changed {
            self.history.record(snapshot);
            self.version += 1;
            debug!(version = self.version, "mutation applied");
        }
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloq_model::LayoutMode;

    fn builder_with(kinds: &[BlockKind]) -> Builder {
        let mut builder = Builder::new(CompositionConfig::new(LayoutMode::Structured));
        for kind in kinds {
            builder.add_block(*kind);
        }
        builder
    }

    #[test]
    fn test_loaded_config_is_history_base() {
        let builder = Builder::new(CompositionConfig::default());
        assert!(!builder.can_undo());
        assert!(!builder.can_redo());
        assert_eq!(builder.version(), 0);
    }

    #[test]
    fn test_add_pushes_one_history_entry() {
        let mut builder = builder_with(&[]);
        builder.add_block(BlockKind::Text);
        assert_eq!(builder.version(), 1);
        assert!(builder.can_undo());

        assert!(builder.undo());
        assert!(builder.config().blocks.is_empty());
    }

    #[test]
    fn test_selection_is_not_undoable() {
        let mut builder = builder_with(&[BlockKind::Text]);
        let id = builder.config().blocks[0].id();
        let version = builder.version();

        let request = builder.select(Some(id)).unwrap();
        assert_eq!(request.block, id);
        assert_eq!(request.kind, BlockKind::Text);
        assert_eq!(builder.version(), version);

        // One undo drops the add itself, not the selection change.
        assert!(builder.undo());
        assert!(!builder.can_undo());
    }

    #[test]
    fn test_remove_clears_matching_selection() {
        let mut builder = builder_with(&[BlockKind::Text, BlockKind::Divider]);
        let first = builder.config().blocks[0].id();
        builder.select(Some(first));

        builder.remove_block(first).unwrap();
        assert_eq!(builder.selection(), None);
        assert_eq!(builder.config().blocks.len(), 1);
    }

    #[test]
    fn test_duplicate_selects_clone() {
        let mut builder = builder_with(&[BlockKind::TwoCol]);
        let source = builder.config().blocks[0].id();

        let clone = builder.duplicate_block(source).unwrap();
        assert_eq!(builder.selection(), Some(clone));
        assert_eq!(builder.config().blocks[1].id(), clone);
    }

    #[test]
    fn test_boundary_move_records_no_history() {
        let mut builder = builder_with(&[BlockKind::Text, BlockKind::Divider]);
        let first = builder.config().blocks[0].id();
        let version = builder.version();

        let moved = builder.move_block(first, MoveDirection::Up).unwrap();
        assert!(!moved);
        assert_eq!(builder.version(), version);

        let moved = builder.move_block(first, MoveDirection::Down).unwrap();
        assert!(moved);
        assert_eq!(builder.version(), version + 1);
    }

    #[test]
    fn test_failed_mutation_leaves_state_and_history_untouched() {
        let mut builder = builder_with(&[BlockKind::Text]);
        let before = builder.config().clone();
        let version = builder.version();

        let result = builder.remove_block(BlockId::new());
        assert!(result.is_err());
        assert_eq!(builder.config(), &before);
        assert_eq!(builder.version(), version);
    }

    #[test]
    fn test_undo_clears_stale_selection() {
        let mut builder = builder_with(&[]);
        let id = builder.add_block(BlockKind::Button);
        builder.select(Some(id));

        assert!(builder.undo());
        assert_eq!(builder.selection(), None);
    }

    #[test]
    fn test_preview_renders_current_state() {
        let mut builder = builder_with(&[BlockKind::Heading]);
        let tree = builder.preview(DeviceKind::Desktop);
        assert!(tree.find_class("heading-block").is_some());

        builder.undo();
        let tree = builder.preview(DeviceKind::Desktop);
        assert!(tree.find_class("heading-block").is_none());
    }
}
