//! Command-line front end for the chord transposer
//!
//! Without arguments it prompts for one `<progression> @<offset>` line.
//! A line may also be passed directly, or the offset given with `--offset`.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chord_transposer::frontend::{self, FrontendError};
use chord_transposer::{tokenize, transpose_chords};

#[derive(Parser, Debug)]
#[command(name = "chord-transposer", version, about = "Transpose chord progressions by semitones")]
struct Args {
    /// Input line, e.g. "F/Bb C G#maj7 @-2" (prompted for when omitted)
    line: Option<String>,

    /// Semitone offset; when set, LINE (or one line of stdin) is the bare progression
    #[arg(short, long, allow_hyphen_values = true)]
    offset: Option<i32>,

    /// Print the located note tokens (of LINE or one line of stdin) as JSON instead of transposing
    #[arg(long)]
    tokens: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("logging disabled: {}", e);
    }
}

/// LINE if given, otherwise one line read from `input`
fn line_or_read<R: BufRead>(line: Option<String>, input: &mut R) -> io::Result<String> {
    match line {
        Some(line) => Ok(line),
        None => {
            let mut line = String::new();
            input.read_line(&mut line)?;
            Ok(line.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

fn run<R: BufRead, W: Write>(args: Args, mut input: R, mut out: W) -> Result<(), FrontendError> {
    if args.tokens {
        let text = line_or_read(args.line, &mut input)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&tokenize(&text))?)?;
        return Ok(());
    }

    match (args.line, args.offset) {
        (Some(line), None) => frontend::respond(&line, &mut out),
        (None, None) => frontend::run_interactive(input, out),
        (line, Some(offset)) => {
            let progression = line_or_read(line, &mut input)?;
            writeln!(out, "{}", transpose_chords(&progression, offset)?)?;
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chord_transposer::{Token, TransposeError};

    fn run_with(argv: &[&str], stdin: &str) -> (Result<(), FrontendError>, String) {
        let args = Args::try_parse_from(std::iter::once("chord-transposer").chain(argv.iter().copied())).unwrap();
        let mut out = Vec::new();
        let result = run(args, stdin.as_bytes(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_offset_with_line() {
        let (result, out) = run_with(&["--offset", "-2", "F/Bb C"], "");
        assert!(result.is_ok());
        assert_eq!(out, "Eb/G# Bb\n");
    }

    #[test]
    fn test_offset_reads_stdin() {
        let (result, out) = run_with(&["-o", "1"], "G#maj7\r\n");
        assert!(result.is_ok());
        assert_eq!(out, "Amaj7\n");
    }

    #[test]
    fn test_offset_unknown_note_fails() {
        let (result, _) = run_with(&["--offset", "1", "E#"], "");
        assert!(matches!(result, Err(FrontendError::Transpose(TransposeError::UnknownNote(_)))));
    }

    #[test]
    fn test_tokens_with_line() {
        let (result, out) = run_with(&["--tokens", "F/Bb"], "");
        assert!(result.is_ok());
        let tokens: Vec<Token> = serde_json::from_str(&out).unwrap();
        assert_eq!(tokens, vec![Token::new("F", 0), Token::new("Bb", 2)]);
    }

    #[test]
    fn test_tokens_reads_stdin() {
        let (result, out) = run_with(&["--tokens"], "Am C\n");
        assert!(result.is_ok());
        let tokens: Vec<Token> = serde_json::from_str(&out).unwrap();
        assert_eq!(tokens, vec![Token::new("A", 0), Token::new("C", 3)]);
    }

    #[test]
    fn test_line_without_offset_flag() {
        let (result, out) = run_with(&["Cm G7 @12"], "");
        assert!(result.is_ok());
        assert_eq!(out, "Transposed progression: Cm G7 \n");
    }

    #[test]
    fn test_interactive_prompt() {
        let (result, out) = run_with(&[], "C G\n");
        assert!(result.is_ok());
        assert!(out.ends_with(">:No transpose constant found!\n"));
    }
}
