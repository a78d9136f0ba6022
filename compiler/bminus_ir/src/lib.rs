//! B-Minus IR - shared types for the reader and the evaluator.
//!
//! - [`Span`]: byte ranges into the source text
//! - [`Node`] / [`NodeKind`] / [`Ident`]: the syntax tree
//! - [`FunctionName`]: case-normalized function names
//! - [`ensure_sufficient_stack`]: stack growth for deep nesting

pub mod ast;
mod name;
mod span;
mod stack;

pub use ast::{Ident, Node, NodeKind};
pub use name::FunctionName;
pub use span::Span;
pub use stack::ensure_sufficient_stack;
