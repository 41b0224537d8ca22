//! The read-eval-print pipeline for one line of input

use crate::error::{EvalError, ReadError, Result};
use crate::eval::eval_form;
use crate::printer::{print_form, PrintOptions};
use crate::reader::read_str;
use crate::{Environment, EvalContext, Form};

/// Parse one form from `source`.
pub fn read(source: &str) -> std::result::Result<Form, ReadError> {
    read_str(source)
}

/// Evaluate `form` in `env`.
pub fn eval(
    form: &Form,
    env: &mut Environment,
    ctx: &EvalContext,
) -> std::result::Result<Form, EvalError> {
    eval_form(form, env, ctx)
}

/// Render a result readably.
pub fn print(form: &Form) -> String {
    print_form(form, PrintOptions::readable())
}

/// Read, evaluate and print one line.
///
/// ```
/// use sprig::rep::rep;
/// use sprig::{Environment, EvalContext};
///
/// let mut env = Environment::with_prelude();
/// let out = rep("(* 6 7)", &mut env, &EvalContext::default()).unwrap();
/// assert_eq!(out, "42");
/// ```
pub fn rep(line: &str, env: &mut Environment, ctx: &EvalContext) -> Result<String> {
    let form = read(line)?;
    let value = eval(&form, env, ctx)?;
    Ok(print(&value))
}

/// An environment with the prelude loaded plus the context to evaluate in.
#[derive(Debug, Clone)]
pub struct Session {
    /// Bindings visible to evaluated forms
    pub env: Environment,

    /// Evaluation settings
    pub ctx: EvalContext,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session with the standard prelude and default settings.
    pub fn new() -> Self {
        Self::with_context(EvalContext::default())
    }

    /// A session with the standard prelude and the given settings.
    pub fn with_context(ctx: EvalContext) -> Self {
        Self {
            env: Environment::with_prelude(),
            ctx,
        }
    }

    /// Read, evaluate and print one line in this session.
    pub fn rep(&mut self, line: &str) -> Result<String> {
        rep(line, &mut self.env, &self.ctx)
    }

    /// Read and print one line without evaluating it.
    pub fn read_print(&self, line: &str) -> Result<String> {
        Ok(print(&read(line)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SprigError;

    #[test]
    fn test_session_rep() {
        let mut session = Session::new();
        assert_eq!(session.rep("(+ 1 2)").unwrap(), "3");
        assert_eq!(session.rep("[1 (- 5 3)]").unwrap(), "[1 2]");
    }

    #[test]
    fn test_read_print_does_not_evaluate() {
        let session = Session::new();
        assert_eq!(session.read_print("( + 1   2 )").unwrap(), "(+ 1 2)");
    }

    #[test]
    fn test_errors_surface_by_phase() {
        let mut session = Session::new();
        assert!(matches!(session.rep("(1 2"), Err(SprigError::Read(_))));
        assert!(matches!(session.rep("(foo 1)"), Err(SprigError::Eval(_))));
    }
}
