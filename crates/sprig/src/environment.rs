//! Runtime environment mapping symbol names to bound forms

mod prelude;

use crate::error::EvalError;
use crate::form::{BuiltinFn, Form};

/// A single symbol binding.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The binding's name
    pub name: String,

    /// The bound value
    pub value: Form,
}

/// The environment symbols are resolved against.
///
/// A single flat scope: defining a name that already exists shadows the
/// earlier binding.
///
/// # Example
///
/// ```
/// use sprig::{Environment, Form};
///
/// let mut env = Environment::new();
/// env.define("x", Form::int(1));
/// env.define("x", Form::int(10)); // Shadows the first x
///
/// assert_eq!(env.get("x"), Some(&Form::int(10)));
/// assert_eq!(env.get("y"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    /// All bindings in a flat array (most recent at end)
    bindings: Vec<Binding>,

    /// Current evaluation depth (for recursion limiting)
    call_depth: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            call_depth: 0,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Depth Tracking (Stack Overflow Protection)
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a nested evaluation. Returns error if `max_depth` is reached.
    pub fn enter_call(&mut self, max_depth: usize) -> Result<(), EvalError> {
        if self.call_depth >= max_depth {
            return Err(EvalError::StackOverflow {
                depth: self.call_depth,
                max: max_depth,
            });
        }
        self.call_depth += 1;
        Ok(())
    }

    /// Leave a nested evaluation.
    pub fn exit_call(&mut self) {
        self.call_depth = self.call_depth.saturating_sub(1);
    }

    /// Get current evaluation depth.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` to `value`, shadowing any earlier binding.
    pub fn define(&mut self, name: impl Into<String>, value: Form) {
        self.bindings.push(Binding {
            name: name.into(),
            value,
        });
    }

    /// Register a built-in function under its own name.
    pub fn define_builtin(&mut self, builtin: BuiltinFn) {
        let name = builtin.name.clone();
        self.define(name, Form::Builtin(builtin));
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a binding by name.
    ///
    /// Returns the most recent binding with the given name, or `None`.
    pub fn get(&self, name: &str) -> Option<&Form> {
        self.bindings
            .iter()
            .rev()
            .find(|b| b.name == name)
            .map(|b| &b.value)
    }

    /// Resolve a symbol, failing with `UnboundSymbol` if it has no binding.
    pub fn lookup(&self, name: &str) -> Result<Form, EvalError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| EvalError::UnboundSymbol {
                name: name.to_string(),
            })
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
