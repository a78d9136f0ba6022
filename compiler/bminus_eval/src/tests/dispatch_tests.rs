//! Overload resolution: priority, arity, variadics, blocks and error
//! propagation.

#![allow(clippy::unwrap_used)]

use std::cell::Cell;
use std::rc::Rc;

use bminus_ir::Span;
use pretty_assertions::assert_eq;

use super::{empty_builder, run_with};
use crate::{
    EnvironmentBuilder, HostError, Param, RuntimeError, RuntimeErrorKind, Signature, TypeSet,
    Value,
};

fn sig(params: impl IntoIterator<Item = Param>) -> Signature {
    Signature::new(params).unwrap()
}

const INT: Param = Param::Value(TypeSet::INTEGER);
const STR: Param = Param::Value(TypeSet::STRING);

/// `COUNT` bumps the counter and returns it.
fn with_counter(builder: EnvironmentBuilder, counter: &Rc<Cell<i64>>) -> EnvironmentBuilder {
    let counter = Rc::clone(counter);
    builder.register("COUNT", sig([]), move |_| {
        counter.set(counter.get() + 1);
        Ok(Some(Value::Integer(counter.get())))
    })
}

#[test]
fn test_first_matching_overload_wins() {
    let env = empty_builder()
        .register("F", sig([INT]), |_| Ok(Some(Value::string("first"))))
        .register(
            "F",
            sig([Param::Value(TypeSet::INTEGER | TypeSet::STRING)]),
            |_| Ok(Some(Value::string("second"))),
        )
        .build();
    assert_eq!(
        run_with(env, "[F 1] [F \"x\"]").unwrap(),
        vec![Value::string("first"), Value::string("second")]
    );
}

#[test]
fn test_arity_mismatch_lists_single_signature() {
    let env = empty_builder()
        .register("F", sig([INT]), |_| Ok(None))
        .build();
    let err = run_with(env, "[F 1 2]").unwrap_err();
    assert_eq!(err.span, Span::new(0, 7));
    assert_eq!(
        err.message(),
        "no overload of F matches the given arguments\n  F(integer): expected 1 arguments, got 2"
    );
    let RuntimeErrorKind::NoMatchingOverload { attempts, .. } = &err.kind else {
        panic!("expected NoMatchingOverload, got {:?}", err.kind);
    };
    assert_eq!(attempts.len(), 1);
}

#[test]
fn test_variadic_accepts_any_count() {
    let env = || {
        empty_builder()
            .register("N", sig([Param::Variadic(TypeSet::INTEGER)]), |mut args| {
                let count = args.rest()?.len();
                Ok(Some(Value::Integer(i64::try_from(count).unwrap_or(i64::MAX))))
            })
            .build()
    };
    assert_eq!(
        run_with(env(), "[N] [N 1] [N 1 2 3 4 5]").unwrap(),
        vec![Value::Integer(0), Value::Integer(1), Value::Integer(5)]
    );

    let err = run_with(env(), "[N 1 \"x\" 3]").unwrap_err();
    assert_eq!(
        err.message(),
        "no overload of N matches the given arguments\n  N(integer...): type mismatch: expected integer, got string"
    );
}

#[test]
fn test_variadic_with_fixed_params_reports_minimum() {
    let env = empty_builder()
        .register("F", sig([STR, Param::Variadic(TypeSet::ANY)]), |_| Ok(None))
        .build();
    let err = run_with(env, "[F]").unwrap_err();
    assert_eq!(
        err.message(),
        "no overload of F matches the given arguments\n  F(string, any...): expected at least 1 arguments, got 0"
    );
}

#[test]
fn test_block_is_not_evaluated_unless_requested() {
    let counter = Rc::new(Cell::new(0));
    let env = with_counter(empty_builder(), &counter)
        .register("IGNORE", sig([Param::Block]), |_| Ok(None))
        .build();
    assert_eq!(run_with(env, "[IGNORE [COUNT]]").unwrap(), vec![]);
    assert_eq!(counter.get(), 0);
}

#[test]
fn test_malformed_block_is_harmless_until_evaluated() {
    let env = empty_builder()
        .register("IGNORE", sig([Param::Block]), |_| Ok(None))
        .register("FORCE", sig([Param::Block]), |mut args| {
            Ok(args.block()?.evaluate()?)
        })
        .build();
    let nodes = bminus_parse::parse("[IGNORE [NOPE 1 2]] [FORCE [NOPE 1 2]]").unwrap();
    let interpreter = crate::Interpreter::new(env);

    assert_eq!(interpreter.evaluate(&nodes[0]), Ok(None));
    let err = interpreter.evaluate(&nodes[1]).unwrap_err();
    assert_eq!(err, RuntimeError::undefined_function("NOPE", Span::new(28, 32)));
}

#[test]
fn test_block_may_be_evaluated_repeatedly() {
    let counter = Rc::new(Cell::new(0));
    let env = with_counter(empty_builder(), &counter)
        .register("TWICE", sig([Param::Block]), |mut args| {
            let block = args.block()?;
            block.evaluate()?;
            block.evaluate().map_err(HostError::from)
        })
        .build();
    assert_eq!(run_with(env, "[TWICE [COUNT]]").unwrap(), vec![Value::Integer(2)]);
    assert_eq!(counter.get(), 2);
}

#[test]
fn test_argument_error_aborts_resolution() {
    let env = empty_builder()
        .register("F", sig([STR]), |_| Ok(None))
        .register("F", sig([INT]), |_| Ok(None))
        .build();
    let err = run_with(env, "[F [NOPE]]").unwrap_err();
    assert_eq!(
        err.kind,
        RuntimeErrorKind::UndefinedFunction {
            name: "NOPE".to_string()
        }
    );
    assert_eq!(err.span, Span::new(4, 8));
}

#[test]
fn test_arguments_are_reevaluated_per_attempt() {
    let counter = Rc::new(Cell::new(0));
    let env = with_counter(empty_builder(), &counter)
        .register("F", sig([STR]), |_| Ok(Some(Value::string("string"))))
        .register("F", sig([INT]), |_| Ok(Some(Value::string("integer"))))
        .build();
    assert_eq!(
        run_with(env, "[F [COUNT]]").unwrap(),
        vec![Value::string("integer")]
    );
    assert_eq!(counter.get(), 2);
}

#[test]
fn test_nothing_is_a_type_mismatch() {
    let env = empty_builder()
        .register("VOID", sig([]), |_| Ok(None))
        .register("F", sig([INT]), |_| Ok(None))
        .build();
    let err = run_with(env, "[F [VOID]]").unwrap_err();
    assert_eq!(
        err.message(),
        "no overload of F matches the given arguments\n  F(integer): type mismatch: expected integer, got nothing"
    );
}

#[test]
fn test_env_slot_is_omitted_from_rendering_and_arity() {
    let env = empty_builder()
        .register("F", sig([Param::Env, INT]), |mut args| {
            let env = args.env()?;
            let n = args.int()?;
            Ok(Some(Value::Integer(n + i64::from(env.is_defined("f")))))
        })
        .build();
    let nodes = bminus_parse::parse("[F 1] [F]").unwrap();
    let interpreter = crate::Interpreter::new(env);
    assert_eq!(interpreter.evaluate(&nodes[0]), Ok(Some(Value::Integer(2))));
    assert_eq!(
        interpreter.evaluate(&nodes[1]).unwrap_err().message(),
        "no overload of F matches the given arguments\n  F(integer): expected 1 arguments, got 0"
    );
}

#[test]
fn test_raised_error_is_located_at_call() {
    let env = empty_builder()
        .register("BAD", sig([Param::Env]), |mut args| {
            Err(args.env()?.raise_error("bad things"))
        })
        .build();
    let err = run_with(env, "  [BAD]").unwrap_err();
    assert_eq!(err, RuntimeError::raised("bad things", Span::new(2, 7)));
}

#[test]
fn test_argument_misuse_is_an_interpreter_error() {
    let env = empty_builder()
        .register("F", sig([INT]), |mut args| {
            let s = args.string()?;
            Ok(Some(Value::String(s)))
        })
        .build();
    let err = run_with(env, "[F 1]").unwrap_err();
    assert_eq!(
        err,
        RuntimeError::interpreter("argument 0 is integer, expected string", Span::new(0, 5))
    );
    assert_eq!(
        err.message(),
        "interpreter error: argument 0 is integer, expected string"
    );
}

#[test]
fn test_exhausted_arguments_are_an_interpreter_error() {
    let env = empty_builder()
        .register("F", sig([]), |mut args| {
            let n = args.int()?;
            Ok(Some(Value::Integer(n)))
        })
        .build();
    let err = run_with(env, "[F]").unwrap_err();
    assert_eq!(
        err.message(),
        "interpreter error: argument 0 is missing, expected integer"
    );
}

#[test]
fn test_panic_in_host_is_an_interpreter_error() {
    let env = empty_builder()
        .register("BOOM", sig([]), |_| panic!("host blew up"))
        .build();
    let err = run_with(env, "[BOOM]").unwrap_err();
    assert_eq!(
        err,
        RuntimeError::interpreter("host blew up", Span::new(0, 6))
    );
}

#[test]
fn test_host_call_marker_tracks_host_bodies() {
    let env = || {
        empty_builder()
            .register("INSIDE", sig([]), |_| {
                Ok(Some(Value::Integer(i64::from(crate::in_host_call()))))
            })
            .register("BOOM", sig([]), |_| panic!("host blew up"))
            .build()
    };
    assert!(!crate::in_host_call());
    assert_eq!(run_with(env(), "[INSIDE]"), Ok(vec![Value::Integer(1)]));
    assert!(!crate::in_host_call());
    assert!(run_with(env(), "[BOOM]").is_err());
    assert!(!crate::in_host_call());
}

#[test]
fn test_nested_errors_propagate_unchanged() {
    let env = empty_builder()
        .register("OUTER", sig([Param::Env, Param::Block]), |mut args| {
            let env = args.env()?;
            let block = args.block()?;
            Ok(env.evaluate(block.node())?)
        })
        .register("INNER", sig([Param::Env]), |mut args| {
            Err(args.env()?.raise_error("inner failed"))
        })
        .build();
    let err = run_with(env, "[OUTER [INNER]]").unwrap_err();
    assert_eq!(err, RuntimeError::raised("inner failed", Span::new(7, 14)));
}
