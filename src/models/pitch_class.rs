/// The twelve equal-tempered pitch classes used for chord roots
///
/// Numbered 1-12 starting from A. Reading accepts several spellings per class
/// (enharmonic aliases plus the "H" form of B); writing always produces the
/// single canonical spelling listed in `WRITE_TABLE`.
///
/// Examples:
///   "Bb" → Bb (2), "A#" → Bb (2)
///   "H"  → B (3), written back as "B"
///   "Db" → Cs (5), written back as "C#"

use once_cell::sync::Lazy;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::transposition::TransposeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum PitchClass {
    A = 1,
    Bb = 2,
    B = 3,
    C = 4,
    Cs = 5,
    D = 6,
    Eb = 7,
    E = 8,
    F = 9,
    Fs = 10,
    G = 11,
    Gs = 12,
}

/// Canonical spelling per pitch class, indexed by `index() - 1`
const WRITE_TABLE: [&str; 12] = [
    "A", "Bb", "B", "C", "C#", "D", "Eb", "E", "F", "F#", "G", "G#",
];

/// Every spelling the reader understands
const READ_ENTRIES: [(&str, PitchClass); 18] = [
    ("A", PitchClass::A),
    ("Bb", PitchClass::Bb),
    ("A#", PitchClass::Bb),
    ("B", PitchClass::B),
    ("H", PitchClass::B),
    ("C", PitchClass::C),
    ("C#", PitchClass::Cs),
    ("Db", PitchClass::Cs),
    ("D", PitchClass::D),
    ("D#", PitchClass::Eb),
    ("Eb", PitchClass::Eb),
    ("E", PitchClass::E),
    ("F", PitchClass::F),
    ("F#", PitchClass::Fs),
    ("Gb", PitchClass::Fs),
    ("G", PitchClass::G),
    ("G#", PitchClass::Gs),
    ("Ab", PitchClass::Gs),
];

static READ_TABLE: Lazy<HashMap<&'static str, PitchClass>> =
    Lazy::new(|| READ_ENTRIES.iter().copied().collect());

impl PitchClass {
    /// All pitch classes in ascending order (A first)
    pub const ALL: [PitchClass; 12] = [
        PitchClass::A,
        PitchClass::Bb,
        PitchClass::B,
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Eb,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
    ];

    /// Numeric value in 1..=12
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of `index()`; `None` outside 1..=12
    pub fn from_index(index: i32) -> Option<PitchClass> {
        if (1..=12).contains(&index) {
            Some(Self::ALL[(index - 1) as usize])
        } else {
            None
        }
    }

    /// Canonical spelling used when writing a transposed note
    pub fn spelling(self) -> &'static str {
        WRITE_TABLE[(self.index() - 1) as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

impl FromStr for PitchClass {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_pitch(s)
    }
}

/// Look up a note spelling in the read table (case-sensitive)
pub fn read_pitch(spelling: &str) -> Result<PitchClass, TransposeError> {
    READ_TABLE
        .get(spelling)
        .copied()
        .ok_or_else(|| TransposeError::UnknownNote(spelling.to_string()))
}

/// Canonical spelling for a pitch class
pub fn write_pitch(pitch: PitchClass) -> &'static str {
    pitch.spelling()
}
