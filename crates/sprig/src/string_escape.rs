//! String literal escaping shared by the reader and printer

use crate::error::ReadError;

/// Decode the interior of a string literal (without its quotes).
///
/// Recognizes `\\`, `\n` and `\"` in a single left-to-right pass.
pub fn decode_string(raw: &str) -> Result<String, ReadError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('"') => out.push('"'),
            Some(other) => return Err(ReadError::UnrecognizedEscape { escape: other }),
            None => return Err(ReadError::UnrecognizedEscape { escape: '\\' }),
        }
    }
    Ok(out)
}

/// Encode a decoded string back into literal form, including quotes.
pub fn encode_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Whether `token` is a complete string literal: opening quote, closing
/// quote, and no escape swallowing the final quote.
pub fn is_terminated(token: &str) -> bool {
    let Some(body) = token.strip_prefix('"') else {
        return false;
    };
    let Some(interior) = body.strip_suffix('"') else {
        return false;
    };
    let trailing_backslashes = interior.chars().rev().take_while(|c| *c == '\\').count();
    trailing_backslashes % 2 == 0
}
