//! B-Minus evaluator.
//!
//! Walks the syntax tree produced by `bminus_parse` and resolves each call
//! against host-registered functions. A function may have several overloads;
//! the first one whose signature fits the evaluated arguments is invoked.
//!
//! # Architecture
//!
//! - [`EnvironmentBuilder`] / [`Environment`]: the function table
//! - [`Signature`] / [`Param`]: validated overload shapes
//! - [`Interpreter`]: evaluation entry point
//! - [`Env`] / [`Block`] / [`Args`]: what a host function receives
//! - [`std_lib`]: the standard functions
//!
//! ```
//! use bminus_eval::{
//!     EnvironmentBuilder, Interpreter, Param, Signature, TypeSet, Value,
//! };
//! use bminus_ir::{Ident, Node, Span};
//!
//! let env = EnvironmentBuilder::new()
//!     .register(
//!         "double",
//!         Signature::new([Param::Value(TypeSet::INTEGER)])?,
//!         |mut args| Ok(Some(Value::Integer(args.int()? * 2))),
//!     )
//!     .build();
//! let interpreter = Interpreter::new(env);
//!
//! let call = Node::call(
//!     Ident::new("DOUBLE", Span::DUMMY),
//!     vec![Node::int(21, Span::DUMMY)],
//!     Span::DUMMY,
//! );
//! assert_eq!(interpreter.evaluate(&call), Ok(Some(Value::Integer(42))));
//! # Ok::<(), bminus_eval::SignatureError>(())
//! ```

mod args;
mod dispatch;
mod environment;
mod errors;
mod interpreter;
mod signature;
pub mod std_lib;
mod ty;
mod value;

pub use args::{Arg, Args, Block, Env};
pub use dispatch::in_host_call;
pub use environment::{Environment, EnvironmentBuilder, FunctionEntry, HostFn, Overload};
pub use errors::{Attempt, HostError, Mismatch, RuntimeError, RuntimeErrorKind};
pub use interpreter::Interpreter;
pub use signature::{Param, Signature, SignatureError};
pub use ty::{TypeSet, ValueType};
pub use value::{Array, MixedArrayError, Value};

#[cfg(test)]
mod tests;
