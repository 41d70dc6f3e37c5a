//! Chord Transposer WASM API
//!
//! - `helpers`: console logging macros, serialization and error conversion
//! - `transpose`: transposition and tokenization entry points

pub mod helpers;
pub mod transpose;

pub use transpose::{tokenize_progression, transpose_chords, transpose_line};
