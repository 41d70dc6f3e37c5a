//! Chord Transposer
//!
//! Shifts every chord root in free-form text by a number of semitones while
//! leaving chord qualities, slashes and spacing untouched. Usable as a Rust
//! library, from JavaScript through the WASM API, or from the command line.

pub mod models;
pub mod parse;
pub mod transposition;
pub mod frontend;
pub mod api;

// Re-export commonly used types
pub use models::{read_pitch, write_pitch, PitchClass};
pub use parse::{tokenize, Token, Tokens};
pub use transposition::{transpose_chords, transpose_pitch, transpose_progression, TransposeError, NO_CHORDS_FOUND};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_warn!("logger already initialized: {}", e);
    }

    log::info!("Chord transposer WASM module initialized");
}
