//! Error types for chord transposition
//!
//! Hard failures only. A progression without any note tokens is not an
//! error; it is reported through the `NO_CHORDS_FOUND` sentinel.

use thiserror::Error;

/// Failure while transposing a progression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransposeError {
    /// A located token has no entry in the read table (e.g. "Cb", "E#", "H#")
    #[error("Unknown note: '{0}'")]
    UnknownNote(String),

    /// The reconstructor was handed a spelling list that does not line up with the tokens
    #[error("Spelling count mismatch: {tokens} tokens but {spellings} spellings")]
    SpellingCountMismatch { tokens: usize, spellings: usize },
}
