/// Progression reconstruction
///
/// Rebuilds the output text from the located tokens and their replacement
/// spellings. Each replacement is followed by the original text up to the
/// next token (or the end of input for the last one).
///
/// Text in front of the first token is not emitted: "Key: C" transposed by
/// +2 comes back as "D". Callers that need a prefix kept must split it off
/// before transposing.

use crate::parse::Token;
use crate::transposition::TransposeError;

pub fn reconstruct<S: AsRef<str>>(
    original: &str,
    tokens: &[Token],
    spellings: &[S],
) -> Result<String, TransposeError> {
    if tokens.len() != spellings.len() {
        return Err(TransposeError::SpellingCountMismatch {
            tokens: tokens.len(),
            spellings: spellings.len(),
        });
    }

    let mut output = String::with_capacity(original.len() + tokens.len());

    for (i, (token, spelling)) in tokens.iter().zip(spellings).enumerate() {
        let gap_end = tokens.get(i + 1).map_or(original.len(), |next| next.start);
        output.push_str(spelling.as_ref());
        output.push_str(&original[token.end..gap_end]);
    }

    Ok(output)
}
