//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Drag index {index} is outside the block list (len {len})")]
    InvalidDragIndex { index: usize, len: usize },
}
