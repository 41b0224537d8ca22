//! Standard prelude with built-in arithmetic

use super::Environment;
use crate::error::{type_name, EvalError};
use crate::form::{BuiltinFn, Form};

impl Environment {
    /// Create an environment with the built-in arithmetic operators.
    pub fn with_prelude() -> Self {
        let mut env = Self::new();
        env.load_prelude();
        env
    }

    /// Load the standard prelude into this environment.
    pub fn load_prelude(&mut self) {
        self.define_builtin(BuiltinFn::new("+", 2, builtin_add));
        self.define_builtin(BuiltinFn::new("-", 2, builtin_sub));
        self.define_builtin(BuiltinFn::new("*", 2, builtin_mul));
        self.define_builtin(BuiltinFn::new("/", 2, builtin_div));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Built-in Function Implementations
// ═══════════════════════════════════════════════════════════════════════

fn int_operands(args: &[Form]) -> Result<(i64, i64), EvalError> {
    match args {
        [a, b] => Ok((expect_int(a)?, expect_int(b)?)),
        _ => Err(EvalError::BuiltinError {
            name: "arithmetic".to_string(),
            message: format!("expected 2 operands, got {}", args.len()),
        }),
    }
}

fn expect_int(form: &Form) -> Result<i64, EvalError> {
    form.as_int().ok_or_else(|| EvalError::TypeError {
        expected: "int".to_string(),
        got: type_name(form).to_string(),
    })
}

fn builtin_add(args: &[Form]) -> Result<Form, EvalError> {
    let (a, b) = int_operands(args)?;
    a.checked_add(b)
        .map(Form::int)
        .ok_or(EvalError::IntegerOverflow)
}

fn builtin_sub(args: &[Form]) -> Result<Form, EvalError> {
    let (a, b) = int_operands(args)?;
    a.checked_sub(b)
        .map(Form::int)
        .ok_or(EvalError::IntegerOverflow)
}

fn builtin_mul(args: &[Form]) -> Result<Form, EvalError> {
    let (a, b) = int_operands(args)?;
    a.checked_mul(b)
        .map(Form::int)
        .ok_or(EvalError::IntegerOverflow)
}

fn builtin_div(args: &[Form]) -> Result<Form, EvalError> {
    let (a, b) = int_operands(args)?;
    if b == 0 {
        return Err(EvalError::DivisionByZero);
    }
    // i64::MIN / -1 is the only overflowing case left
    a.checked_div(b)
        .map(Form::int)
        .ok_or(EvalError::IntegerOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_defines_arithmetic() {
        let env = Environment::with_prelude();
        for name in ["+", "-", "*", "/"] {
            assert!(env.get(name).is_some_and(Form::is_callable), "missing {}", name);
        }
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(builtin_add(&[Form::int(1), Form::int(2)]), Ok(Form::int(3)));
        assert_eq!(builtin_sub(&[Form::int(1), Form::int(2)]), Ok(Form::int(-1)));
        assert_eq!(builtin_mul(&[Form::int(4), Form::int(-3)]), Ok(Form::int(-12)));
        assert_eq!(builtin_div(&[Form::int(7), Form::int(2)]), Ok(Form::int(3)));
        assert_eq!(builtin_div(&[Form::int(-7), Form::int(2)]), Ok(Form::int(-3)));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            builtin_div(&[Form::int(1), Form::int(0)]),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            builtin_add(&[Form::int(i64::MAX), Form::int(1)]),
            Err(EvalError::IntegerOverflow)
        );
        assert_eq!(
            builtin_div(&[Form::int(i64::MIN), Form::int(-1)]),
            Err(EvalError::IntegerOverflow)
        );
    }

    #[test]
    fn test_type_error() {
        assert_eq!(
            builtin_add(&[Form::int(1), Form::string("2")]),
            Err(EvalError::TypeError {
                expected: "int".to_string(),
                got: "string".to_string(),
            })
        );
    }
}
