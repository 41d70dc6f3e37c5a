//! Pitch models for chord transposition

pub mod pitch_class;

pub use pitch_class::{read_pitch, write_pitch, PitchClass};
