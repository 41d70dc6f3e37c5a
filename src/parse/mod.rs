//! Parsing module for chord progressions
//!
//! Locates note spellings inside free-form text.

pub mod tokens;

pub use tokens::*;
