use std::fmt;

/// Error codes for all B-Minus diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Reader (syntax) errors
/// - E2xxx: Evaluation (runtime) errors
/// - E3xxx: Host registration errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Reader Errors (E1xxx)
    /// Unexpected end of input
    E1001,
    /// Bracket group without an identifier
    E1002,
    /// Invalid integer literal
    E1003,
    /// Invalid float literal
    E1004,
    /// Unterminated string literal
    E1005,

    // Runtime Errors (E2xxx)
    /// Function is not defined
    E2001,
    /// No overload matches the arguments
    E2002,
    /// Error raised by a host function
    E2003,
    /// Internal interpreter error inside a host function
    E2004,

    // Registration Errors (E3xxx)
    /// Invalid overload signature
    E3001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E3001 => "E3001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
