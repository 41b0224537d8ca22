//! Form evaluation
//!
//! A non-empty list is an application: every member is evaluated left to
//! right and the evaluated head is called with the rest as arguments. Every
//! other form goes through [`eval_ast`]: symbols resolve through the
//! environment, vectors and maps evaluate their members, and remaining atoms
//! (and the empty list) evaluate to themselves.

pub mod call;

use crate::{Environment, EvalContext, EvalError, Form};

pub use call::call_value;

/// Trait for evaluating forms to values.
///
/// This is the core abstraction for the tree-walking interpreter.
pub trait Evaluate {
    /// Evaluate this form in the given environment.
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Form, EvalError>;
}

impl Evaluate for Form {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Form, EvalError> {
        eval_form(self, env, ctx)
    }
}

/// Evaluate `form` against `env`.
///
/// ```
/// use sprig::{eval_form, read_str, Environment, EvalContext, Form};
///
/// let mut env = Environment::with_prelude();
/// let form = read_str("(+ 1 2)").unwrap();
/// let result = eval_form(&form, &mut env, &EvalContext::default()).unwrap();
/// assert_eq!(result, Form::int(3));
/// ```
pub fn eval_form(form: &Form, env: &mut Environment, ctx: &EvalContext) -> Result<Form, EvalError> {
    // Check for interruption before each form
    if ctx.is_interrupted() {
        return Err(EvalError::Interrupted);
    }

    env.enter_call(ctx.max_call_depth)?;
    let depth = env.call_depth() - 1;
    ctx.trace_enter(depth, form);

    let result = match form {
        Form::List(list) if !list.is_empty() => apply_list(form, env, ctx),
        _ => eval_ast(form, env, ctx),
    };

    env.exit_call();
    if let Ok(value) = &result {
        ctx.trace_exit(depth, value);
    }
    result
}

/// Evaluate a form without treating lists as applications.
pub fn eval_ast(form: &Form, env: &mut Environment, ctx: &EvalContext) -> Result<Form, EvalError> {
    match form {
        Form::Symbol { name, .. } => env.lookup(name),
        Form::List(seq) => seq.try_map(|m| eval_form(m, env, ctx)).map(Form::List),
        Form::Vector(seq) => seq.try_map(|m| eval_form(m, env, ctx)).map(Form::Vector),
        // Keys are strings or keywords, which evaluate to themselves
        Form::HashMap(map) => map
            .try_map_values(|v| eval_form(v, env, ctx))
            .map(Form::HashMap),
        Form::Int { .. }
        | Form::Str { .. }
        | Form::Keyword { .. }
        | Form::Bool(_)
        | Form::Builtin(_) => Ok(form.clone()),
    }
}

fn apply_list(list: &Form, env: &mut Environment, ctx: &EvalContext) -> Result<Form, EvalError> {
    let evaluated = eval_ast(list, env, ctx)?;
    let Some(members) = evaluated.as_seq() else {
        return Ok(evaluated);
    };
    match members.first() {
        Some(head) => call_value(head, members.rest()),
        None => Ok(evaluated.clone()),
    }
}
