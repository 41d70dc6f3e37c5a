//! Line-oriented front end
//!
//! Reads one line of the form `<progression> @<offset>` (offset: optional
//! minus sign and one or two digits), transposes the part before the `@`
//! and reports the result.

pub mod errors;

pub use errors::FrontendError;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{BufRead, Write};

use crate::transposition::transpose_chords;

pub const BANNER: &str = "Chord transposer v1.0";
pub const USAGE: &str =
    "Please enter a chord progression followed by \"@t\" where \"t\" is transpose constant in semitones (-12...12).";
pub const EXAMPLE: &str =
    "Example: F/Bb C F/Bb C G#maj7 F/G G Cm Cm/B G#maj7 Fm7 Gm7 G7 Cm Csus2 C @-2";
pub const PROMPT: &str = ">:";
pub const RESULT_PREFIX: &str = "Transposed progression: ";

// ASCII digits only; `\d` would also accept other scripts' decimal digits.
static OFFSET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@-?[0-9]{1,2}").expect("offset marker pattern is valid"));

/// Split `line` at the first `@offset` marker
///
/// Returns the text before the `@` and the parsed offset. Anything after
/// the marker is ignored.
///
/// # Examples
/// - "C G @-2" → ("C G ", -2)
/// - "Am @123" → ("Am ", 12)   (at most two digits are read)
pub fn split_offset_marker(line: &str) -> Result<(&str, i32), FrontendError> {
    let found = OFFSET_MARKER
        .find(line)
        .ok_or(FrontendError::MissingOffsetMarker)?;

    let marker = &found.as_str()[1..];
    let (sign, digits) = match marker.strip_prefix('-') {
        Some(digits) => (-1, digits),
        None => (1, marker),
    };
    let offset = sign * digits.bytes().fold(0, |n, b| n * 10 + i32::from(b - b'0'));

    Ok((&line[..found.start()], offset))
}

/// Transpose one raw input line
pub fn transpose_line(line: &str) -> Result<String, FrontendError> {
    let (progression, offset) = split_offset_marker(line)?;
    debug!("progression {:?}, offset {}", progression, offset);
    Ok(transpose_chords(progression, offset)?)
}

/// Run one prompt/answer exchange over the given streams
///
/// A missing `@offset` is reported on `output` and is not an error; unknown
/// notes and I/O failures are returned to the caller.
pub fn run_interactive<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<(), FrontendError> {
    writeln!(output, "{}", BANNER)?;
    writeln!(output, "{}", USAGE)?;
    writeln!(output, "{}", EXAMPLE)?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line.trim_end_matches(['\r', '\n']);

    respond(line, &mut output)
}

/// Answer a single line: print the transposed progression or the missing-marker notice
pub fn respond<W: Write>(line: &str, output: &mut W) -> Result<(), FrontendError> {
    match transpose_line(line) {
        Ok(result) => {
            writeln!(output, "{}{}", RESULT_PREFIX, result)?;
            Ok(())
        }
        Err(FrontendError::MissingOffsetMarker) => {
            warn!("no @offset marker in {:?}", line);
            writeln!(output, "{}", FrontendError::MissingOffsetMarker)?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}
