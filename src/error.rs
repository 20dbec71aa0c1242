use thiserror::Error;

use crate::occurrence::Direction;

/// Why a jump command could not move the selection.
///
/// Every variant is a recoverable user-input condition: the host shows the
/// message and leaves the document and selection untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum JumpError {
    #[error("No active editor")]
    NoActiveEditor,

    #[error("Move the cursor to the word")]
    NoWordAtCursor,

    #[error("{direction} identical word not found")]
    OccurrenceNotFound { direction: Direction },
}

pub type Result<T> = std::result::Result<T, JumpError>;
