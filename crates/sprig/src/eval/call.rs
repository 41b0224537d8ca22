//! Function application

use crate::form::BuiltinFn;
use crate::printer::{print_form, PrintOptions};
use crate::{EvalError, Form};

/// Call a form as a function with already-evaluated arguments.
///
/// # Errors
///
/// Returns `NotCallable` if the form is not a function.
/// Returns `ArityMismatch` if the argument count doesn't match.
pub fn call_value(func: &Form, args: &[Form]) -> Result<Form, EvalError> {
    match func {
        Form::Builtin(f) => call_builtin(f, args),
        other => Err(EvalError::NotCallable {
            form: literal_text(other),
        }),
    }
}

/// Call a built-in function.
fn call_builtin(func: &BuiltinFn, args: &[Form]) -> Result<Form, EvalError> {
    // Check arity (if not variadic)
    if !func.is_variadic() && args.len() != func.arity as usize {
        return Err(EvalError::ArityMismatch {
            name: func.name.clone(),
            expected: func.arity as usize,
            got: args.len(),
        });
    }

    (func.func)(args)
}

/// The text a form was read from, or its readable rendering if computed.
fn literal_text(form: &Form) -> String {
    match form.source_text() {
        Some(text) => text.to_string(),
        None => print_form(form, PrintOptions::readable()),
    }
}
