//! Chord progression transposition pipeline
//!
//! tokenize → read pitch → shift → write pitch → reconstruct.
//! Pure functions over the static pitch tables; safe to call from anywhere.

use log::debug;

use crate::models::pitch_class::{read_pitch, write_pitch};
use crate::parse::tokenize;
use crate::transposition::reconstruct::reconstruct;
use crate::transposition::semitone::transpose_pitch;
use crate::transposition::TransposeError;

/// Returned by `transpose_chords` when the text contains no note tokens
pub const NO_CHORDS_FOUND: &str = "No chords found!";

/// Transpose every note in `progression` by `offset` semitones
///
/// Returns `Ok(None)` when nothing in the text looks like a note. Any token
/// missing from the read table fails the whole call; no partial output is
/// produced.
pub fn transpose_progression(
    progression: &str,
    offset: i32,
) -> Result<Option<String>, TransposeError> {
    let tokens = tokenize(progression);
    if tokens.is_empty() {
        debug!("no note tokens in {:?}", progression);
        return Ok(None);
    }

    let spellings = tokens
        .iter()
        .map(|token| read_pitch(&token.text).map(|pitch| write_pitch(transpose_pitch(pitch, offset))))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("transposed {} notes by {} semitones", tokens.len(), offset);

    reconstruct(progression, &tokens, &spellings).map(Some)
}

/// Transpose a progression, answering `NO_CHORDS_FOUND` for note-free input
///
/// # Examples
/// - ("F/Bb C", -2) → "Eb/G# Bb"
/// - ("G#maj7", 1) → "Amaj7"
/// - ("", 3) → "No chords found!"
pub fn transpose_chords(progression: &str, offset: i32) -> Result<String, TransposeError> {
    Ok(transpose_progression(progression, offset)?.unwrap_or_else(|| NO_CHORDS_FOUND.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_chords_down_a_tone() {
        // Pitch class 12 is always written G#, even when read as Ab
        assert_eq!(transpose_chords("F/Bb C", -2).unwrap(), "Eb/G# Bb");
    }

    #[test]
    fn test_empty_input_sentinel() {
        assert_eq!(transpose_chords("", 3).unwrap(), NO_CHORDS_FOUND);
        assert_eq!(transpose_chords("m7 sus4 / |", 3).unwrap(), "No chords found!");
        assert_eq!(transpose_progression("", 3).unwrap(), None);
    }

    #[test]
    fn test_full_octave_identity() {
        assert_eq!(transpose_chords("Cm G7", 12).unwrap(), "Cm G7");
    }

    #[test]
    fn test_wrap_past_g_sharp() {
        assert_eq!(transpose_chords("G#maj7", 1).unwrap(), "Amaj7");
    }

    #[test]
    fn test_long_progression() {
        let progression = "F/Bb C F/Bb C G#maj7 F/G G Cm Cm/B G#maj7 Fm7 Gm7 G7 Cm Csus2 C";
        assert_eq!(
            transpose_chords(progression, -2).unwrap(),
            "Eb/G# Bb Eb/G# Bb F#maj7 Eb/F F Bbm Bbm/A F#maj7 Ebm7 Fm7 F7 Bbm Bbsus2 Bb"
        );
    }

    #[test]
    fn test_zero_offset_normalizes_spelling() {
        assert_eq!(transpose_chords("Db A# Gb H", 0).unwrap(), "C# Bb F# B");
    }

    #[test]
    fn test_unknown_note_fails_whole_call() {
        assert_eq!(
            transpose_chords("C E# G", 2),
            Err(TransposeError::UnknownNote("E#".to_string()))
        );
        assert!(transpose_progression("Cb", 0).is_err());
    }

    #[test]
    fn test_non_ascii_text_passes_through() {
        assert_eq!(transpose_chords("é C♯ Am/H", 1).unwrap(), "C#♯ Bbm/C");
        assert_eq!(transpose_chords("C → G ♪", 2).unwrap(), "D → A ♪");
    }

    #[test]
    fn test_leading_text_dropped() {
        assert_eq!(transpose_chords("chords: Am F", 3).unwrap(), "Cm G#");
    }
}
