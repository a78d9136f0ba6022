//! Syntax error types.
//!
//! Every reader failure aborts the whole parse; there is no recovery.

use std::fmt;

use bminus_diagnostic::{Diagnostic, ErrorCode};
use bminus_ir::Span;

/// Error produced by the reader.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Span,
}

/// What went wrong while reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Input ended inside a bracket group.
    UnexpectedEof,
    /// A bracket group has no leading literal string to name the function.
    ///
    /// `found` describes the first element, or is `None` for an empty group.
    MissingIdentifier { found: Option<String> },
    /// A word starting with a digit is not a valid integer.
    InvalidInt { text: String },
    /// A word that looks like a float is not a valid float.
    InvalidFloat { text: String },
    /// A quoted string has no closing quote.
    UnterminatedString,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::UnexpectedEof => write!(f, "unexpected end of input"),
            SyntaxErrorKind::MissingIdentifier { found: None } => {
                write!(f, "expected literal string, got nothing")
            }
            SyntaxErrorKind::MissingIdentifier { found: Some(found) } => {
                write!(f, "expected literal string, got {found}")
            }
            SyntaxErrorKind::InvalidInt { text } => {
                write!(f, "expected literal int, got `{text}`")
            }
            SyntaxErrorKind::InvalidFloat { text } => {
                write!(f, "invalid literal float `{text}`")
            }
            SyntaxErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
        }
    }
}

impl SyntaxErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            SyntaxErrorKind::UnexpectedEof => ErrorCode::E1001,
            SyntaxErrorKind::MissingIdentifier { .. } => ErrorCode::E1002,
            SyntaxErrorKind::InvalidInt { .. } => ErrorCode::E1003,
            SyntaxErrorKind::InvalidFloat { .. } => ErrorCode::E1004,
            SyntaxErrorKind::UnterminatedString => ErrorCode::E1005,
        }
    }
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        SyntaxError { kind, span }
    }

    pub fn unexpected_eof(span: Span) -> Self {
        Self::new(SyntaxErrorKind::UnexpectedEof, span)
    }

    pub fn missing_identifier(found: Option<String>, span: Span) -> Self {
        Self::new(SyntaxErrorKind::MissingIdentifier { found }, span)
    }

    pub fn invalid_int(text: impl Into<String>, span: Span) -> Self {
        Self::new(SyntaxErrorKind::InvalidInt { text: text.into() }, span)
    }

    pub fn invalid_float(text: impl Into<String>, span: Span) -> Self {
        Self::new(SyntaxErrorKind::InvalidFloat { text: text.into() }, span)
    }

    pub fn unterminated_string(span: Span) -> Self {
        Self::new(SyntaxErrorKind::UnterminatedString, span)
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert to a diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.message())
            .with_label(self.span, "");
        match &self.kind {
            SyntaxErrorKind::MissingIdentifier { .. } => {
                diag.with_note("a bracket group starts with the name of the function to call")
            }
            SyntaxErrorKind::UnterminatedString => {
                diag.with_note("string literals have no escapes; close with `\"`")
            }
            _ => diag,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for SyntaxError {}
