//! Error types for reading and evaluation

use thiserror::Error;

use crate::form::Form;
use crate::lexer::Token;

/// Errors raised while turning source text into a [`Form`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// A collection ended without its own closing delimiter
    #[error("expected '{expected}', got {}", found_text(.found))]
    MismatchedDelimiter {
        /// The closer that was never seen
        expected: &'static str,
        /// The wrong closer that ended the collection, or `None` at end of input
        found: Option<Token>,
    },

    /// A closing delimiter appeared where a form was expected
    #[error("unexpected '{token}' at offset {offset}")]
    UnexpectedDelimiter {
        /// The delimiter text
        token: String,
        /// Source offset of the delimiter
        offset: usize,
    },

    /// A string literal without its closing quote
    #[error("expected '\"', got EOF (string starting at offset {offset})")]
    UnbalancedString {
        /// Source offset of the opening quote
        offset: usize,
    },

    /// A backslash escape the string codec does not know
    #[error("unrecognized escape sequence '\\{escape}'")]
    UnrecognizedEscape {
        /// The character following the backslash
        escape: char,
    },

    /// Map keys must be strings or keywords
    #[error("invalid map key {key}: keys must be strings or keywords")]
    InvalidKey {
        /// Printed form of the rejected key
        key: String,
    },

    /// A map was closed or extended while a key had no value
    #[error("map key {key} has no value")]
    UnpairedMapKey {
        /// Printed form of the dangling key
        key: String,
    },

    /// Integer literal that does not fit in an `i64`
    #[error("integer literal out of range: {token}")]
    IntegerOutOfRange {
        /// The literal text
        token: String,
    },

    /// Tokens left over after the first complete form
    #[error("unexpected trailing input '{token}' at offset {offset}")]
    TrailingInput {
        /// The first leftover token
        token: String,
        /// Source offset of that token
        offset: usize,
    },

    /// Nothing but whitespace and comments
    #[error("no input")]
    EmptyInput,

    /// Collections nested deeper than the reader allows
    #[error("forms nested too deeply (max depth: {max})")]
    TooDeep {
        /// Configured nesting limit
        max: usize,
    },
}

/// Errors raised while evaluating a [`Form`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Symbol has no binding in the environment
    #[error("'{name}' not found")]
    UnboundSymbol {
        /// Symbol name
        name: String,
    },

    /// Head of an application is not a function
    #[error("'{form}' does not appear to be a function")]
    NotCallable {
        /// Literal text of the evaluated head
        form: String,
    },

    /// Wrong number of arguments to a builtin
    #[error("'{name}' expects {expected} argument{}, got {got}", plural(.expected))]
    ArityMismatch {
        /// Function name
        name: String,
        /// Required argument count
        expected: usize,
        /// Supplied argument count
        got: usize,
    },

    /// Operand of the wrong type
    #[error("type error: expected {expected}, got {got}")]
    TypeError {
        /// Expected type name
        expected: String,
        /// Actual type name
        got: String,
    },

    /// Integer division by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Checked arithmetic overflowed
    #[error("integer overflow")]
    IntegerOverflow,

    /// A builtin reported a failure of its own
    #[error("{name}: {message}")]
    BuiltinError {
        /// Builtin name
        name: String,
        /// Message from the builtin
        message: String,
    },

    /// Evaluation nested deeper than the context allows
    #[error("stack overflow: depth {depth} exceeds maximum {max}")]
    StackOverflow {
        /// Depth reached
        depth: usize,
        /// Configured limit
        max: usize,
    },

    /// The context's interrupt flag was raised
    #[error("evaluation interrupted")]
    Interrupted,
}

/// Any error produced by the read-eval-print pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SprigError {
    /// Reading failed
    #[error(transparent)]
    Read(#[from] ReadError),

    /// Evaluation failed
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Result type alias for sprig operations
pub type Result<T> = std::result::Result<T, SprigError>;

fn found_text(found: &Option<Token>) -> String {
    match found {
        Some(token) => format!("'{}' at offset {}", token.text(), token.offset()),
        None => "EOF".to_string(),
    }
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

/// Get a human-readable type name for a form.
pub fn type_name(form: &Form) -> &'static str {
    match form {
        Form::Int { .. } => "int",
        Form::Symbol { .. } => "symbol",
        Form::Str { .. } => "string",
        Form::Keyword { .. } => "keyword",
        Form::Bool(_) => "boolean",
        Form::List(_) => "list",
        Form::Vector(_) => "vector",
        Form::HashMap(_) => "hash-map",
        Form::Builtin(_) => "builtin",
    }
}
