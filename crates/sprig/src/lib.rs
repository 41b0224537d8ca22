//! # Sprig
//!
//! The read-eval-print core of a small Lisp.
//!
//! Source text flows through four stages:
//!
//! ```text
//! text → [lexer] → tokens → [reader] → Form → [eval] → Form → [printer] → text
//! ```
//!
//! - **Lexer**: splits text into [`Token`]s
//! - **Reader**: recursive descent from tokens to a [`Form`] tree
//! - **Evaluator**: walks a form against an [`Environment`]
//! - **Printer**: renders a form readably or for display
//!
//! ```
//! use sprig::rep::Session;
//!
//! let mut session = Session::new();
//! assert_eq!(session.rep("(+ 1 (* 2 3))").unwrap(), "7");
//! assert_eq!(session.rep("{:a (- 5 4)}").unwrap(), "{:a 1}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod form;
pub mod lexer;
pub mod printer;
pub mod reader;
pub mod rep;
pub mod string_escape;

// Re-export main types
pub use context::EvalContext;
pub use environment::{Binding, Environment};
pub use error::{EvalError, ReadError, Result, SprigError};
pub use eval::{call_value, eval_ast, eval_form, Evaluate};
pub use form::{BuiltinFn, BuiltinFnPtr, Form, Keyword, KeywordTable, MapForm, MapKey, SeqForm};
pub use lexer::{tokenize, Token};
pub use printer::{print_form, PrintOptions};
pub use reader::{read_str, Reader, ReaderOptions};

/// Sprig version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
