//! Environment tests

use sprig::*;

#[test]
fn test_environment_new_is_empty() {
    let env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.len(), 0);
    assert_eq!(env.call_depth(), 0);
}

#[test]
fn test_environment_define_and_get() {
    let mut env = Environment::new();
    env.define("x", Form::int(42));

    assert_eq!(env.get("x"), Some(&Form::int(42)));
    assert_eq!(env.get("y"), None);
}

#[test]
fn test_environment_shadowing() {
    let mut env = Environment::new();
    env.define("x", Form::int(1));
    env.define("x", Form::int(2));
    assert_eq!(env.get("x"), Some(&Form::int(2)));
    assert_eq!(env.len(), 2);
}

#[test]
fn test_environment_lookup() {
    let mut env = Environment::new();
    env.define("k", Form::keyword("v"));
    assert_eq!(env.lookup("k"), Ok(Form::keyword("v")));
    assert_eq!(
        env.lookup("missing"),
        Err(EvalError::UnboundSymbol {
            name: "missing".to_string()
        })
    );
}

#[test]
fn test_prelude_names() {
    let env = Environment::with_prelude();
    assert_eq!(env.len(), 4);
    for name in ["+", "-", "*", "/"] {
        assert!(env.get(name).is_some_and(Form::is_callable), "missing {}", name);
    }
}

#[test]
fn test_prelude_can_be_shadowed() {
    let mut env = Environment::with_prelude();
    env.define_builtin(BuiltinFn::new("+", -1, |args| Ok(Form::int(args.len() as i64))));
    let form = read_str("(+ 1 1 1)").unwrap();
    let result = eval_form(&form, &mut env, &EvalContext::default()).unwrap();
    assert_eq!(result, Form::int(3));
}
