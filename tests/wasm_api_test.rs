//! WASM API test
//!
//! Exercises the JavaScript-facing functions in a headless browser.

#![cfg(target_arch = "wasm32")]

use chord_transposer::api::{tokenize_progression, transpose_chords, transpose_line};
use chord_transposer::Token;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_transpose_chords() {
    assert_eq!(transpose_chords("G#maj7", 1).unwrap(), "Amaj7");
    assert_eq!(transpose_chords("Cm G7", 12).unwrap(), "Cm G7");
}

#[wasm_bindgen_test]
fn test_transpose_chords_sentinel() {
    assert_eq!(transpose_chords("", 3).unwrap(), "No chords found!");
}

#[wasm_bindgen_test]
fn test_transpose_chords_rejects_unknown_note() {
    let err = transpose_chords("E# A", 1).unwrap_err();
    assert_eq!(err.as_string().unwrap(), "Unknown note: 'E#'");
}

#[wasm_bindgen_test]
fn test_tokenize_progression() {
    let value = tokenize_progression("F/Bb").unwrap();
    let tokens: Vec<Token> = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].text, "Bb");
    assert_eq!((tokens[1].start, tokens[1].end), (2, 4));
}

#[wasm_bindgen_test]
fn test_transpose_line() {
    assert_eq!(transpose_line("F/Bb C @-2").unwrap(), "Eb/G# Bb ");
    let err = transpose_line("F/Bb C").unwrap_err();
    assert_eq!(err.as_string().unwrap(), "No transpose constant found!");
}
