//! Error types for the editor.

use crate::mutations::MutationError;
use crate::persist::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl EditorError {
    /// Whether the host should offer a retry to the user. Persistence
    /// hiccups are retryable; everything else is not.
    pub fn retryable(&self) -> bool {
        match self {
            EditorError::Store(error) => error.retryable(),
            EditorError::Mutation(_) => false,
        }
    }
}
