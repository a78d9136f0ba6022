//! Diagnostic system for B-Minus errors.
//!
//! Syntax and runtime errors are converted into a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message (what went wrong)
//! - a primary span (where it went wrong)
//! - notes (extra context, e.g. one line per rejected overload)
//!
//! Rendering lives in [`emitter`]; line/column lookup in [`span_utils`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
