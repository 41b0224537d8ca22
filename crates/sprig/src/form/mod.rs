//! The form data model shared by the reader, printer and evaluator

mod callable;
mod display;
mod hashable;
mod impls;
mod keyword;
mod map;
mod seq;

pub use callable::{BuiltinFn, BuiltinFnPtr};
pub use hashable::{MapKey, KEYWORD_SENTINEL};
pub use keyword::{Keyword, KeywordTable};
pub use map::MapForm;
pub use seq::SeqForm;

use std::sync::Arc;

use crate::lexer::Token;

/// Universal value type: every piece of read source and every evaluation
/// result is a `Form`.
///
/// Atoms produced by the reader keep the token they came from; collections
/// keep their opening and closing delimiter tokens. Booleans are the two
/// singletons [`Form::TRUE`] and [`Form::FALSE`] and carry no token.
///
/// Equality is structural and ignores source tokens. Keywords compare by
/// identity, which interning makes equivalent to comparing names.
#[derive(Clone)]
pub enum Form {
    // ═══════════════════════════════════════════════════════════════════
    // Atoms
    // ═══════════════════════════════════════════════════════════════════
    /// Signed integer
    Int {
        /// The integer value
        value: i64,
        /// Source token, if read
        token: Option<Token>,
    },

    /// Name resolved through the environment
    Symbol {
        /// Symbol name
        name: Arc<str>,
        /// Source token, if read
        token: Option<Token>,
    },

    /// String literal; `value` is decoded, `token` holds the raw literal
    Str {
        /// Decoded text
        value: Arc<str>,
        /// Source token, if read
        token: Option<Token>,
    },

    /// Interned keyword such as `:foo`
    Keyword {
        /// The interned keyword
        keyword: Keyword,
        /// Source token, if read
        token: Option<Token>,
    },

    /// `true` or `false`
    Bool(bool),

    // ═══════════════════════════════════════════════════════════════════
    // Collections
    // ═══════════════════════════════════════════════════════════════════
    /// `( ... )`
    List(SeqForm),

    /// `[ ... ]`
    Vector(SeqForm),

    /// `{ key value ... }`
    HashMap(MapForm),

    // ═══════════════════════════════════════════════════════════════════
    // Callables
    // ═══════════════════════════════════════════════════════════════════
    /// Native function bound in the environment
    Builtin(BuiltinFn),
}

impl Form {
    /// The `true` singleton
    pub const TRUE: Form = Form::Bool(true);

    /// The `false` singleton
    pub const FALSE: Form = Form::Bool(false);
}
