//! # Composition Mutations
//!
//! High-level semantic operations on a composition.
//!
//! ## Design principles
//!
//! 1. **Intent-preserving**: each mutation is one operator action
//! 2. **Validated**: structural constraints are checked before apply
//! 3. **All-or-nothing**: a failed mutation leaves the config untouched
//!
//! ## Mutation semantics
//!
//! ### MoveBlock
//! - Swaps a block with its immediate neighbor
//! - A move at either boundary is a silent no-op, never an error
//!
//! ### DuplicateBlock
//! - Deep-clones with fresh ids on every node of the subtree
//! - Copies the source's freeform position for the clone
//!
//! ### RemoveBlock
//! - Removes the block and prunes its position entry

use bloq_model::{
    Block, BlockId, BlockKind, BlockPatch, CompositionConfig, ModelError, Position,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Direction for a neighbor swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Semantic mutations over the block collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Append a new default block at the end of the collection.
    AddBlock { kind: BlockKind },

    /// Remove a top-level block.
    RemoveBlock { id: BlockId },

    /// Clone a block (fresh ids throughout) right after its source.
    DuplicateBlock { id: BlockId },

    /// Swap a block with its neighbor.
    MoveBlock {
        id: BlockId,
        direction: MoveDirection,
    },

    /// Replace the full ordering after a drag-reorder gesture.
    Reorder { order: Vec<BlockId> },

    /// Merge a partial update into one block.
    PatchBlock { id: BlockId, patch: BlockPatch },

    /// Store the freeform position produced by a completed gesture.
    SetPosition { id: BlockId, position: Position },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),

    #[error("Reorder is not a permutation of the current blocks: {0}")]
    InvalidOrder(String),

    #[error("Patch for {patch} does not match {block} block")]
    KindMismatch { patch: BlockKind, block: BlockKind },
}

/// What applying a mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// False only for boundary moves, which must not enter history.
    pub changed: bool,

    /// Id of a block this mutation created (add, duplicate).
    pub created: Option<BlockId>,
}

impl Applied {
    fn changed() -> Self {
        Applied {
            changed: true,
            created: None,
        }
    }

    fn noop() -> Self {
        Applied {
            changed: false,
            created: None,
        }
    }

    fn created(id: BlockId) -> Self {
        Applied {
            changed: true,
            created: Some(id),
        }
    }
}

impl Mutation {
    /// Apply to a config with validation. Validation runs first so a
    /// failure cannot leave a half-applied state.
    pub fn apply(&self, config: &mut CompositionConfig) -> Result<Applied, MutationError> {
        self.validate(config)?;

        match self {
            Mutation::AddBlock { kind } => {
                let block = Block::new(*kind);
                let id = block.id();
                debug!(block = %id, kind = %kind, "block added");
                config.blocks.push(block);
                Ok(Applied::created(id))
            }

            Mutation::RemoveBlock { id } => {
                let index = config
                    .index_of(*id)
                    .ok_or(MutationError::BlockNotFound(*id))?;
                config.blocks.remove(index);
                config.prune_positions();
                debug!(block = %id, "block removed");
                Ok(Applied::changed())
            }

            Mutation::DuplicateBlock { id } => {
                let index = config
                    .index_of(*id)
                    .ok_or(MutationError::BlockNotFound(*id))?;
                let clone = config.blocks[index].clone_with_new_ids();
                let clone_id = clone.id();
                if let Some(position) = config.positions.get(id).copied() {
                    config.positions.insert(clone_id, position);
                }
                config.blocks.insert(index + 1, clone);
                debug!(source = %id, clone = %clone_id, "block duplicated");
                Ok(Applied::created(clone_id))
            }

            Mutation::MoveBlock { id, direction } => {
                let index = config
                    .index_of(*id)
                    .ok_or(MutationError::BlockNotFound(*id))?;
                let target = match direction {
                    MoveDirection::Up if index > 0 => index - 1,
                    MoveDirection::Down if index + 1 < config.blocks.len() => index + 1,
                    // Boundary: nothing happens, nothing enters history.
                    _ => return Ok(Applied::noop()),
                };
                config.blocks.swap(index, target);
                Ok(Applied::changed())
            }

            Mutation::Reorder { order } => {
                let mut remaining: Vec<Block> = std::mem::take(&mut config.blocks);
                for id in order {
                    let index = remaining
                        .iter()
                        .position(|block| block.id() == *id)
                        .ok_or(MutationError::BlockNotFound(*id))?;
                    config.blocks.push(remaining.remove(index));
                }
                debug!(blocks = config.blocks.len(), "blocks reordered");
                Ok(Applied::changed())
            }

            Mutation::PatchBlock { id, patch } => {
                let block = config
                    .block_mut(*id)
                    .ok_or(MutationError::BlockNotFound(*id))?;
                match patch.clone().apply_to(block) {
                    Ok(()) => Ok(Applied::changed()),
                    Err(ModelError::KindMismatch { patch, block }) => {
                        Err(MutationError::KindMismatch { patch, block })
                    }
                    Err(_) => Err(MutationError::BlockNotFound(*id)),
                }
            }

            Mutation::SetPosition { id, position } => {
                config.positions.insert(*id, position.clamped());
                Ok(Applied::changed())
            }
        }
    }

    /// Validate without applying.
    pub fn validate(&self, config: &CompositionConfig) -> Result<(), MutationError> {
        match self {
            Mutation::AddBlock { .. } => Ok(()),

            Mutation::RemoveBlock { id }
            | Mutation::DuplicateBlock { id }
            | Mutation::MoveBlock { id, .. }
            | Mutation::SetPosition { id, .. } => {
                config
                    .index_of(*id)
                    .map(|_| ())
                    .ok_or(MutationError::BlockNotFound(*id))
            }

            Mutation::Reorder { order } => {
                if order.len() != config.blocks.len() {
                    return Err(MutationError::InvalidOrder(format!(
                        "expected {} ids, got {}",
                        config.blocks.len(),
                        order.len()
                    )));
                }
                let mut seen = std::collections::HashSet::new();
                for id in order {
                    if config.index_of(*id).is_none() {
                        return Err(MutationError::BlockNotFound(*id));
                    }
                    if !seen.insert(*id) {
                        return Err(MutationError::InvalidOrder(format!("duplicate id {id}")));
                    }
                }
                Ok(())
            }

            Mutation::PatchBlock { id, patch } => {
                let block = config.block(*id).ok_or(MutationError::BlockNotFound(*id))?;
                if patch.kind() != block.kind() {
                    return Err(MutationError::KindMismatch {
                        patch: patch.kind(),
                        block: block.kind(),
                    });
                }
                Ok(())
            }
        }
    }
}
