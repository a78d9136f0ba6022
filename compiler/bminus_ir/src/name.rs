//! Case-normalized function names.

use std::borrow::Borrow;
use std::fmt;

/// A function name as stored in the environment.
///
/// Names are upper-cased (ASCII only) on construction, so `add`, `Add` and
/// `ADD` all resolve to the same entry.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct FunctionName(String);

impl FunctionName {
    pub fn new(name: &str) -> Self {
        FunctionName(name.to_ascii_uppercase())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FunctionName {
    fn from(name: &str) -> Self {
        FunctionName::new(name)
    }
}

impl Borrow<str> for FunctionName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
