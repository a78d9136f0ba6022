//! Runtime error types.
//!
//! `RuntimeError` is what evaluation returns to the caller. `HostError` is
//! what host functions return to the evaluator; the evaluator turns it into
//! a `RuntimeError` at the call site.

use std::fmt;

use bminus_diagnostic::{Diagnostic, ErrorCode};
use bminus_ir::Span;

use crate::ty::{TypeSet, ValueType};

/// Why one overload did not fit a call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mismatch {
    /// Wrong number of arguments. `at_least` is set for variadic overloads.
    Arity {
        expected: usize,
        got: usize,
        at_least: bool,
    },
    /// An argument's type is outside the parameter's set. `got` is `None`
    /// when the argument evaluated to nothing.
    Type {
        expected: TypeSet,
        got: Option<ValueType>,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Arity {
                expected,
                got,
                at_least: false,
            } => write!(f, "expected {expected} arguments, got {got}"),
            Mismatch::Arity {
                expected,
                got,
                at_least: true,
            } => write!(f, "expected at least {expected} arguments, got {got}"),
            Mismatch::Type {
                expected,
                got: Some(got),
            } => write!(f, "type mismatch: expected {expected}, got {got}"),
            Mismatch::Type {
                expected,
                got: None,
            } => write!(f, "type mismatch: expected {expected}, got nothing"),
        }
    }
}

/// A rejected overload: its rendered signature and why it was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attempt {
    pub signature: String,
    pub mismatch: Mismatch,
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.signature, self.mismatch)
    }
}

/// Typed runtime error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    UndefinedFunction {
        name: String,
    },
    /// Every overload was rejected; one attempt per overload, in order.
    NoMatchingOverload {
        name: String,
        attempts: Vec<Attempt>,
    },
    /// A host function reported a domain error.
    Raised {
        message: String,
    },
    /// A host function failed unexpectedly (misused arguments or panicked).
    Interpreter {
        message: String,
    },
}

impl RuntimeErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            RuntimeErrorKind::UndefinedFunction { .. } => ErrorCode::E2001,
            RuntimeErrorKind::NoMatchingOverload { .. } => ErrorCode::E2002,
            RuntimeErrorKind::Raised { .. } => ErrorCode::E2003,
            RuntimeErrorKind::Interpreter { .. } => ErrorCode::E2004,
        }
    }

    /// First line of the message.
    fn headline(&self) -> String {
        match self {
            RuntimeErrorKind::UndefinedFunction { name } => {
                format!("function {name} is not defined")
            }
            RuntimeErrorKind::NoMatchingOverload { name, .. } => {
                format!("no overload of {name} matches the given arguments")
            }
            RuntimeErrorKind::Raised { message } => message.clone(),
            RuntimeErrorKind::Interpreter { message } => format!("interpreter error: {message}"),
        }
    }
}

impl fmt::Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.headline())?;
        if let RuntimeErrorKind::NoMatchingOverload { attempts, .. } = self {
            for attempt in attempts {
                write!(f, "\n  {attempt}")?;
            }
        }
        Ok(())
    }
}

/// Error raised during evaluation, located at a span in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub span: Span,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, span: Span) -> Self {
        RuntimeError { kind, span }
    }

    pub fn undefined_function(name: impl Into<String>, span: Span) -> Self {
        Self::new(RuntimeErrorKind::UndefinedFunction { name: name.into() }, span)
    }

    pub fn no_matching_overload(name: impl Into<String>, attempts: Vec<Attempt>, span: Span) -> Self {
        Self::new(
            RuntimeErrorKind::NoMatchingOverload {
                name: name.into(),
                attempts,
            },
            span,
        )
    }

    pub fn raised(message: impl Into<String>, span: Span) -> Self {
        Self::new(
            RuntimeErrorKind::Raised {
                message: message.into(),
            },
            span,
        )
    }

    pub fn interpreter(message: impl Into<String>, span: Span) -> Self {
        Self::new(
            RuntimeErrorKind::Interpreter {
                message: message.into(),
            },
            span,
        )
    }

    /// Full message, including one line per rejected overload.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert to a diagnostic; rejected overloads become notes.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.kind.headline());
        match &self.kind {
            RuntimeErrorKind::UndefinedFunction { .. } => {
                diag = diag.with_label(self.span, "not defined");
            }
            RuntimeErrorKind::NoMatchingOverload { attempts, .. } => {
                diag = diag.with_label(self.span, "");
                for attempt in attempts {
                    diag = diag.with_note(attempt.to_string());
                }
            }
            RuntimeErrorKind::Raised { .. } | RuntimeErrorKind::Interpreter { .. } => {
                diag = diag.with_label(self.span, "raised here");
            }
        }
        diag
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for RuntimeError {}

/// Failure returned by a host function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostError {
    /// Domain error; reported at the call site as-is.
    Raised(String),
    /// Misuse of the evaluator API by the host function itself.
    Internal(String),
    /// A nested evaluation failed; propagated unchanged.
    Runtime(RuntimeError),
}

impl HostError {
    pub fn internal(message: impl Into<String>) -> Self {
        HostError::Internal(message.into())
    }

    /// Locate this error at the call site of the host function.
    pub fn into_runtime(self, call_span: Span) -> RuntimeError {
        match self {
            HostError::Raised(message) => RuntimeError::raised(message, call_span),
            HostError::Internal(message) => RuntimeError::interpreter(message, call_span),
            HostError::Runtime(err) => err,
        }
    }
}

impl From<RuntimeError> for HostError {
    fn from(err: RuntimeError) -> Self {
        HostError::Runtime(err)
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Raised(message) => f.write_str(message),
            HostError::Internal(message) => write!(f, "interpreter error: {message}"),
            HostError::Runtime(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for HostError {}
