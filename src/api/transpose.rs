//! JavaScript-facing transposition API

use wasm_bindgen::prelude::*;

use crate::api::helpers::{js_error, serialize};
use crate::frontend::{self, FrontendError};
use crate::parse::tokenize;
use crate::transposition;
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

/// Transpose every chord root in `progression` by `offset` semitones
///
/// Resolves to "No chords found!" when the text has no notes; rejects on
/// an unreadable note such as "E#".
#[wasm_bindgen(js_name = transposeChords)]
pub fn transpose_chords(progression: &str, offset: i32) -> Result<String, JsValue> {
    wasm_info!("transposeChords called: offset={}, len={}", offset, progression.len());

    let result = transposition::transpose_chords(progression, offset).map_err(|e| {
        wasm_error!("transposeChords failed: {}", e);
        js_error(e)
    })?;

    wasm_log!("  result: {}", result);
    Ok(result)
}

/// Locate the note tokens in `progression`
///
/// # Returns
/// JavaScript array of `{ text, start, end }` objects (byte offsets)
#[wasm_bindgen(js_name = tokenizeProgression)]
pub fn tokenize_progression(progression: &str) -> Result<JsValue, JsValue> {
    let tokens = tokenize(progression);
    wasm_log!("tokenizeProgression: {} tokens", tokens.len());
    serialize(&tokens, "Token serialization error")
}

/// Transpose a raw `<progression> @<offset>` line
#[wasm_bindgen(js_name = transposeLine)]
pub fn transpose_line(line: &str) -> Result<String, JsValue> {
    wasm_info!("transposeLine called: len={}", line.len());

    match frontend::transpose_line(line) {
        Ok(result) => Ok(result),
        Err(FrontendError::MissingOffsetMarker) => {
            wasm_warn!("No @offset marker in line");
            Err(js_error(FrontendError::MissingOffsetMarker))
        }
        Err(e) => {
            wasm_error!("transposeLine failed: {}", e);
            Err(js_error(e))
        }
    }
}
