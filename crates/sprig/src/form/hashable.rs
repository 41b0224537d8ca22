//! Lookup keys for hash-map forms

use super::Form;
use crate::error::ReadError;

/// Prefix that keeps keyword keys apart from string keys.
///
/// `"x"` indexes as `x` while `:x` indexes as `\u{29E}x`, so the two never
/// collide.
pub const KEYWORD_SENTINEL: char = '\u{29E}';

/// The index key derived from a hash-map key form.
///
/// Only strings and keywords are valid keys. Strings index by their decoded
/// value; keywords by their name behind [`KEYWORD_SENTINEL`]. Keys are
/// therefore compared by name, not by interned identity, so a keyword from a
/// private [`KeywordTable`](super::KeywordTable) still finds its entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapKey(String);

impl MapKey {
    /// Derive the index key for `form`, rejecting non-string, non-keyword keys.
    pub fn from_form(form: &Form) -> Result<Self, ReadError> {
        match form {
            Form::Str { value, .. } => Ok(MapKey(value.to_string())),
            Form::Keyword { keyword, .. } => {
                let mut key = String::with_capacity(keyword.name().len() + 2);
                key.push(KEYWORD_SENTINEL);
                key.push_str(keyword.name());
                Ok(MapKey(key))
            }
            other => Err(ReadError::InvalidKey {
                key: format!("{:?}", other),
            }),
        }
    }

    /// Check whether `form` may be used as a key.
    pub fn is_valid_key(form: &Form) -> bool {
        matches!(form, Form::Str { .. } | Form::Keyword { .. })
    }

    /// The raw index string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
