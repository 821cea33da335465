//! Error types for the block model.

use crate::block::BlockKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Unknown block kind: {0}")]
    UnknownKind(String),

    #[error("Patch for {patch} does not match {block} block")]
    KindMismatch { patch: BlockKind, block: BlockKind },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
