//! Overload resolution.
//!
//! Overloads are tried in declaration order. Each attempt binds arguments to
//! the signature slots one by one; an arity or type mismatch rejects only that
//! overload, while a runtime error from evaluating an argument aborts the
//! whole call. The first overload that binds completely is invoked.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use bminus_ir::{Node, Span};
use smallvec::SmallVec;
use tracing::trace;

use crate::args::{Arg, Args, Block, Env};
use crate::environment::{FunctionEntry, Overload};
use crate::errors::{Attempt, Mismatch, RuntimeError};
use crate::interpreter::Interpreter;
use crate::signature::{Param, Signature};
use crate::ty::TypeSet;
use crate::value::Value;

thread_local! {
    static HOST_DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// Whether the current thread is running a host function body.
///
/// Lets a panic hook tell host panics, which surface as interpreter errors,
/// apart from panics in the embedding program.
pub fn in_host_call() -> bool {
    HOST_DEPTH.with(|depth| depth.get() > 0)
}

/// Outcome of trying one overload.
enum Binding<'a> {
    Bound(Args<'a>),
    Rejected(Mismatch),
}

/// Resolve and invoke the overload of `entry` that fits `args`.
#[tracing::instrument(level = "debug", skip_all, fields(name = %entry.name()))]
pub(crate) fn dispatch<'a>(
    interpreter: &'a Interpreter,
    entry: &FunctionEntry,
    call_span: Span,
    args: &'a [Node],
) -> Result<Option<Value>, RuntimeError> {
    let mut attempts = Vec::with_capacity(entry.overloads().len());

    for (index, overload) in entry.overloads().iter().enumerate() {
        match bind(interpreter, overload.signature(), call_span, args)? {
            Binding::Bound(bound) => {
                trace!(overload = index, "bound");
                return invoke(overload, bound, call_span);
            }
            Binding::Rejected(mismatch) => {
                trace!(overload = index, %mismatch, "rejected");
                attempts.push(Attempt {
                    signature: overload.signature().render(entry.name().as_str()),
                    mismatch,
                });
            }
        }
    }

    Err(RuntimeError::no_matching_overload(
        entry.name().as_str(),
        attempts,
        call_span,
    ))
}

/// Trial-bind `args` to `signature`.
fn bind<'a>(
    interpreter: &'a Interpreter,
    signature: &Signature,
    call_span: Span,
    args: &'a [Node],
) -> Result<Binding<'a>, RuntimeError> {
    let fixed = signature.fixed_arity();
    let variadic = signature.variadic().is_some();
    if (!variadic && args.len() != fixed) || (variadic && args.len() < fixed) {
        return Ok(Binding::Rejected(Mismatch::Arity {
            expected: fixed,
            got: args.len(),
            at_least: variadic,
        }));
    }

    let mut bound: SmallVec<[Arg<'a>; 4]> = SmallVec::with_capacity(signature.params().len());
    let mut remaining = args.iter();

    for param in signature.params() {
        match *param {
            Param::Env => bound.push(Arg::Env(Env::new(interpreter, call_span))),
            Param::Block => {
                let Some(node) = remaining.next() else {
                    return Ok(Binding::Rejected(arity_mismatch(fixed, args.len(), variadic)));
                };
                bound.push(Arg::Block(Block::new(node, interpreter)));
            }
            Param::Value(set) => {
                let Some(node) = remaining.next() else {
                    return Ok(Binding::Rejected(arity_mismatch(fixed, args.len(), variadic)));
                };
                match check(interpreter, node, set)? {
                    Ok(value) => bound.push(Arg::Value(value)),
                    Err(mismatch) => return Ok(Binding::Rejected(mismatch)),
                }
            }
            Param::Variadic(set) => {
                let mut values = Vec::with_capacity(remaining.len());
                for node in remaining.by_ref() {
                    match check(interpreter, node, set)? {
                        Ok(value) => values.push(value),
                        Err(mismatch) => return Ok(Binding::Rejected(mismatch)),
                    }
                }
                bound.push(Arg::Rest(values));
            }
        }
    }

    Ok(Binding::Bound(Args::new(bound)))
}

fn arity_mismatch(expected: usize, got: usize, at_least: bool) -> Mismatch {
    Mismatch::Arity {
        expected,
        got,
        at_least,
    }
}

/// Evaluate one argument and check it against `set`.
///
/// The outer `Result` carries evaluation failures, which abort the call; the
/// inner one carries a type mismatch, which only rejects this overload.
fn check(
    interpreter: &Interpreter,
    node: &Node,
    set: TypeSet,
) -> Result<Result<Value, Mismatch>, RuntimeError> {
    let value = interpreter.evaluate(node)?;
    Ok(match value {
        Some(value) if set.accepts(&value.type_of()) => Ok(value),
        Some(value) => Err(Mismatch::Type {
            expected: set,
            got: Some(value.type_of()),
        }),
        None => Err(Mismatch::Type {
            expected: set,
            got: None,
        }),
    })
}

/// Run the chosen overload, turning host failures and panics into runtime
/// errors at the call site.
fn invoke(overload: &Overload, args: Args<'_>, call_span: Span) -> Result<Option<Value>, RuntimeError> {
    HOST_DEPTH.with(|depth| depth.set(depth.get() + 1));
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| overload.call(args)));
    HOST_DEPTH.with(|depth| depth.set(depth.get() - 1));
    match outcome {
        Ok(result) => result.map_err(|err| err.into_runtime(call_span)),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "host function panicked".to_string());
            Err(RuntimeError::interpreter(message, call_span))
        }
    }
}
