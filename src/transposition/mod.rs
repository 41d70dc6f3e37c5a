pub mod chords;
pub mod errors;
pub mod reconstruct;
pub mod semitone;

pub use chords::{transpose_chords, transpose_progression, NO_CHORDS_FOUND};
pub use errors::TransposeError;
pub use reconstruct::reconstruct;
pub use semitone::transpose_pitch;
