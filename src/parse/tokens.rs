//! Note token recognition
//!
//! Scans free-form chord text for root-note spellings: one capital letter
//! A-H, optionally followed by a single `#` or `b`. Everything else (chord
//! qualities, slashes, whitespace, non-ASCII text) is left for the
//! reconstructor to copy through.

use serde::{Deserialize, Serialize};

/// One located note spelling
///
/// `start`/`end` are byte offsets into the scanned text, half-open.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(text: &str, start: usize) -> Self {
        Self {
            text: text.to_string(),
            start,
            end: start + text.len(),
        }
    }
}

/// Lazy left-to-right scanner over a progression
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

fn is_note_letter(byte: u8) -> bool {
    matches!(byte, b'A'..=b'H')
}

fn is_accidental(byte: u8) -> bool {
    matches!(byte, b'#' | b'b')
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        // Only ASCII bytes can start or extend a token, so every slice taken
        // here falls on a char boundary even for multi-byte input.
        let bytes = self.text.as_bytes();
        let offset = bytes[self.pos..].iter().position(|&b| is_note_letter(b))?;
        let start = self.pos + offset;
        let mut end = start + 1;
        if bytes.get(end).copied().map_or(false, is_accidental) {
            end += 1;
        }
        self.pos = end;
        Some(Token::new(&self.text[start..end], start))
    }
}

/// Collect every note token in `text`, in order
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokens::new(text).collect()
}
