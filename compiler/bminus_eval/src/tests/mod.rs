//! Evaluator tests that run parsed source end to end.

mod dispatch_tests;

use crate::{Environment, EnvironmentBuilder, Interpreter, RuntimeError, Value};

/// Parse and evaluate `source`; the source must be syntactically valid.
#[allow(clippy::unwrap_used)]
pub(crate) fn run_with(env: Environment, source: &str) -> Result<Vec<Value>, RuntimeError> {
    let nodes = bminus_parse::parse(source).unwrap();
    Interpreter::new(env).evaluate_all(&nodes)
}

/// Evaluate `source` against the standard library.
#[allow(clippy::unwrap_used)]
pub(crate) fn run_std(source: &str) -> Result<Vec<Value>, RuntimeError> {
    run_with(crate::std_lib::builder().unwrap().build(), source)
}

/// Evaluate a single statement against the standard library.
#[allow(clippy::unwrap_used)]
pub(crate) fn eval_std(source: &str) -> Value {
    let mut values = run_std(source).unwrap();
    assert_eq!(values.len(), 1, "expected one value from {source:?}");
    values.remove(0)
}

pub(crate) fn empty_builder() -> EnvironmentBuilder {
    EnvironmentBuilder::new()
}
