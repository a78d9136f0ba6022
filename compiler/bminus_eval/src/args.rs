//! Arguments handed to host functions.
//!
//! The dispatcher binds one [`Arg`] per signature slot, in signature order.
//! Host functions pull them out with the typed accessors on [`Args`]; asking
//! for the wrong kind of slot is a bug in the host function and surfaces as
//! an interpreter error.

use std::fmt;

use bminus_ir::{Node, Span};
use smallvec::SmallVec;

use crate::errors::{HostError, RuntimeError};
use crate::interpreter::Interpreter;
use crate::value::{Array, Value};

/// Capability to evaluate nodes and raise errors from inside a host function.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    interpreter: &'a Interpreter,
    call_span: Span,
}

impl<'a> Env<'a> {
    pub(crate) fn new(interpreter: &'a Interpreter, call_span: Span) -> Self {
        Env {
            interpreter,
            call_span,
        }
    }

    /// Evaluate a node with the same environment as the current call.
    pub fn evaluate(&self, node: &Node) -> Result<Option<Value>, RuntimeError> {
        self.interpreter.evaluate(node)
    }

    /// Build a domain error reported at the current call site.
    ///
    /// Return it from the host function: `return Err(env.raise_error(..))`.
    pub fn raise_error(&self, message: impl Into<String>) -> HostError {
        HostError::Raised(message.into())
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.interpreter.environment().contains(name)
    }

    pub fn call_span(&self) -> Span {
        self.call_span
    }
}

impl fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env")
            .field("call_span", &self.call_span)
            .finish_non_exhaustive()
    }
}

/// An unevaluated argument plus the means to evaluate it.
///
/// Evaluating is up to the host function: zero, one or many times.
#[derive(Clone, Copy)]
pub struct Block<'a> {
    node: &'a Node,
    interpreter: &'a Interpreter,
}

impl<'a> Block<'a> {
    pub(crate) fn new(node: &'a Node, interpreter: &'a Interpreter) -> Self {
        Block { node, interpreter }
    }

    pub fn evaluate(&self) -> Result<Option<Value>, RuntimeError> {
        self.interpreter.evaluate(self.node)
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn span(&self) -> Span {
        self.node.span
    }
}

impl fmt::Debug for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("node", self.node)
            .finish_non_exhaustive()
    }
}

/// One bound signature slot.
#[derive(Debug)]
pub enum Arg<'a> {
    Env(Env<'a>),
    Block(Block<'a>),
    Value(Value),
    /// Everything bound to the variadic slot.
    Rest(Vec<Value>),
}

impl Arg<'_> {
    fn describe(&self) -> String {
        match self {
            Arg::Env(_) => "environment".to_string(),
            Arg::Block(_) => "block".to_string(),
            Arg::Value(value) => value.type_of().to_string(),
            Arg::Rest(_) => "variadic arguments".to_string(),
        }
    }
}

/// Bound arguments of one call, consumed front to back.
#[derive(Debug)]
pub struct Args<'a> {
    items: smallvec::IntoIter<[Arg<'a>; 4]>,
    index: usize,
}

impl<'a> Args<'a> {
    pub(crate) fn new(items: SmallVec<[Arg<'a>; 4]>) -> Self {
        Args {
            items: items.into_iter(),
            index: 0,
        }
    }

    fn next_arg(&mut self, wanted: &str) -> Result<Arg<'a>, HostError> {
        let index = self.index;
        self.index += 1;
        self.items
            .next()
            .ok_or_else(|| HostError::internal(format!("argument {index} is missing, expected {wanted}")))
    }

    fn wrong_kind(&self, wanted: &str, found: &Arg<'_>) -> HostError {
        HostError::internal(format!(
            "argument {} is {}, expected {wanted}",
            self.index - 1,
            found.describe()
        ))
    }

    pub fn env(&mut self) -> Result<Env<'a>, HostError> {
        match self.next_arg("environment")? {
            Arg::Env(env) => Ok(env),
            other => Err(self.wrong_kind("environment", &other)),
        }
    }

    pub fn block(&mut self) -> Result<Block<'a>, HostError> {
        match self.next_arg("block")? {
            Arg::Block(block) => Ok(block),
            other => Err(self.wrong_kind("block", &other)),
        }
    }

    pub fn value(&mut self) -> Result<Value, HostError> {
        match self.next_arg("value")? {
            Arg::Value(value) => Ok(value),
            other => Err(self.wrong_kind("value", &other)),
        }
    }

    pub fn int(&mut self) -> Result<i64, HostError> {
        match self.next_arg("integer")? {
            Arg::Value(Value::Integer(n)) => Ok(n),
            other => Err(self.wrong_kind("integer", &other)),
        }
    }

    pub fn float(&mut self) -> Result<f64, HostError> {
        match self.next_arg("float")? {
            Arg::Value(Value::Float(n)) => Ok(n),
            other => Err(self.wrong_kind("float", &other)),
        }
    }

    /// An integer or float, widened to `f64`.
    #[allow(clippy::cast_precision_loss)]
    pub fn number(&mut self) -> Result<f64, HostError> {
        match self.next_arg("number")? {
            Arg::Value(Value::Integer(n)) => Ok(n as f64),
            Arg::Value(Value::Float(n)) => Ok(n),
            other => Err(self.wrong_kind("number", &other)),
        }
    }

    pub fn string(&mut self) -> Result<String, HostError> {
        match self.next_arg("string")? {
            Arg::Value(Value::String(s)) => Ok(s),
            other => Err(self.wrong_kind("string", &other)),
        }
    }

    pub fn array(&mut self) -> Result<Array, HostError> {
        match self.next_arg("array")? {
            Arg::Value(Value::Array(array)) => Ok(array),
            other => Err(self.wrong_kind("array", &other)),
        }
    }

    /// The values bound to the variadic slot.
    pub fn rest(&mut self) -> Result<Vec<Value>, HostError> {
        match self.next_arg("variadic arguments")? {
            Arg::Rest(values) => Ok(values),
            other => Err(self.wrong_kind("variadic arguments", &other)),
        }
    }
}
