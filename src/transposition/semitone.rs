/// Semitone transposition over the twelve pitch classes
///
/// Arithmetic is 1-based modulo 12: `((pitch - 1 + offset) mod 12) + 1`,
/// widened to i64 so any i32 offset wraps correctly.

use crate::models::PitchClass;

/// Shift a pitch class by `offset` semitones (negative = down)
pub fn transpose_pitch(pitch: PitchClass, offset: i32) -> PitchClass {
    let shifted = (i64::from(pitch.index()) - 1 + i64::from(offset)).rem_euclid(12);
    PitchClass::ALL[shifted as usize]
}
