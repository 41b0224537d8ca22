//! Callable forms

use std::fmt;
use std::sync::Arc;

use super::Form;
use crate::error::EvalError;

/// Type alias for builtin function pointers to reduce complexity
pub type BuiltinFnPtr = Arc<dyn Fn(&[Form]) -> Result<Form, EvalError> + Send + Sync>;

/// A built-in native function.
///
/// These are Rust functions exposed to the interpreter.
#[derive(Clone)]
pub struct BuiltinFn {
    /// Function name (for display/debugging)
    pub name: String,

    /// Arity (-1 for variadic)
    pub arity: i32,

    /// The actual function pointer
    pub func: BuiltinFnPtr,
}

impl BuiltinFn {
    /// Wrap a native function.
    pub fn new(
        name: impl Into<String>,
        arity: i32,
        func: impl Fn(&[Form]) -> Result<Form, EvalError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            arity,
            func: Arc::new(func),
        }
    }

    /// Whether the function accepts any number of arguments.
    pub fn is_variadic(&self) -> bool {
        self.arity < 0
    }
}

impl PartialEq for BuiltinFn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && std::ptr::eq(
                Arc::as_ptr(&self.func) as *const (),
                Arc::as_ptr(&other.func) as *const (),
            )
    }
}

impl fmt::Debug for BuiltinFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinFn({})", self.name)
    }
}
