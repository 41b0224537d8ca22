//! Form trait implementations: constructors, predicates, extractors, From traits, PartialEq

use std::sync::Arc;

use super::*;
use crate::error::ReadError;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Form {
    /// Create an integer form
    pub fn int(value: i64) -> Self {
        Form::Int { value, token: None }
    }

    /// Create a symbol form
    pub fn symbol(name: impl Into<Arc<str>>) -> Self {
        Form::Symbol {
            name: name.into(),
            token: None,
        }
    }

    /// Create a string form from its decoded value
    pub fn string(value: impl Into<Arc<str>>) -> Self {
        Form::Str {
            value: value.into(),
            token: None,
        }
    }

    /// Create a keyword form, interning `name` (given without the `:`)
    pub fn keyword(name: &str) -> Self {
        Form::Keyword {
            keyword: Keyword::intern(name),
            token: None,
        }
    }

    /// The boolean singleton for `b`
    pub fn boolean(b: bool) -> Self {
        if b {
            Form::TRUE
        } else {
            Form::FALSE
        }
    }

    /// Create a list form
    pub fn list(members: Vec<Form>) -> Self {
        Form::List(SeqForm::from_members(members))
    }

    /// Create a vector form
    pub fn vector(members: Vec<Form>) -> Self {
        Form::Vector(SeqForm::from_members(members))
    }

    /// Create a hash-map form from alternating keys and values
    pub fn hash_map(members: Vec<Form>) -> Result<Self, ReadError> {
        MapForm::from_members(members).map(Form::HashMap)
    }

    /// Create a builtin function form
    pub fn builtin(func: BuiltinFn) -> Self {
        Form::Builtin(func)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if form is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Form::List(_))
    }

    /// Check if form is a list, vector or hash-map
    pub fn is_collection(&self) -> bool {
        matches!(self, Form::List(_) | Form::Vector(_) | Form::HashMap(_))
    }

    /// Check if form is an atom (integer, symbol, string, keyword or boolean)
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            Form::Int { .. }
                | Form::Symbol { .. }
                | Form::Str { .. }
                | Form::Keyword { .. }
                | Form::Bool(_)
        )
    }

    /// Check if form is a symbol
    pub fn is_symbol(&self) -> bool {
        matches!(self, Form::Symbol { .. })
    }

    /// Check if form can be applied to arguments
    pub fn is_callable(&self) -> bool {
        matches!(self, Form::Builtin(_))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════

    /// Extract integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Form::Int { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Form::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract symbol name
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Form::Symbol { name, .. } => Some(&**name),
            _ => None,
        }
    }

    /// Extract decoded string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Form::Str { value, .. } => Some(&**value),
            _ => None,
        }
    }

    /// Extract keyword
    pub fn as_keyword(&self) -> Option<&Keyword> {
        match self {
            Form::Keyword { keyword, .. } => Some(keyword),
            _ => None,
        }
    }

    /// Extract list or vector members
    pub fn as_seq(&self) -> Option<&SeqForm> {
        match self {
            Form::List(seq) | Form::Vector(seq) => Some(seq),
            _ => None,
        }
    }

    /// Extract hash-map
    pub fn as_map(&self) -> Option<&MapForm> {
        match self {
            Form::HashMap(map) => Some(map),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Source Tokens
    // ═══════════════════════════════════════════════════════════════════

    /// The token an atom was read from.
    ///
    /// Collections report their opening delimiter. Booleans and computed
    /// forms have none.
    pub fn token(&self) -> Option<&Token> {
        match self {
            Form::Int { token, .. }
            | Form::Symbol { token, .. }
            | Form::Str { token, .. }
            | Form::Keyword { token, .. } => token.as_ref(),
            Form::List(seq) | Form::Vector(seq) => seq.open_token(),
            Form::HashMap(map) => map.open_token(),
            Form::Bool(_) | Form::Builtin(_) => None,
        }
    }

    /// The literal source text of an atom, when it was read from source.
    ///
    /// For strings this is the raw literal including quotes and escapes.
    pub fn source_text(&self) -> Option<&str> {
        if self.is_collection() {
            return None;
        }
        self.token().map(Token::text)
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<i64> for Form {
    fn from(value: i64) -> Self {
        Form::int(value)
    }
}

impl From<bool> for Form {
    fn from(b: bool) -> Self {
        Form::boolean(b)
    }
}

impl From<&str> for Form {
    fn from(s: &str) -> Self {
        Form::string(s)
    }
}

impl From<String> for Form {
    fn from(s: String) -> Self {
        Form::string(s)
    }
}

impl From<Keyword> for Form {
    fn from(keyword: Keyword) -> Self {
        Form::Keyword {
            keyword,
            token: None,
        }
    }
}

impl From<BuiltinFn> for Form {
    fn from(func: BuiltinFn) -> Self {
        Form::Builtin(func)
    }
}

// ═══════════════════════════════════════════════════════════════════
// Structural Equality
// ═══════════════════════════════════════════════════════════════════

impl PartialEq for Form {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Form::Int { value: a, .. }, Form::Int { value: b, .. }) => a == b,
            (Form::Symbol { name: a, .. }, Form::Symbol { name: b, .. }) => a == b,
            (Form::Str { value: a, .. }, Form::Str { value: b, .. }) => a == b,
            (Form::Keyword { keyword: a, .. }, Form::Keyword { keyword: b, .. }) => a == b,
            (Form::Bool(a), Form::Bool(b)) => a == b,
            (Form::List(a), Form::List(b)) => a == b,
            (Form::Vector(a), Form::Vector(b)) => a == b,
            (Form::HashMap(a), Form::HashMap(b)) => a == b,
            (Form::Builtin(a), Form::Builtin(b)) => a == b,
            _ => false,
        }
    }
}
