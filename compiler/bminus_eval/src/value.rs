//! Runtime values.
//!
//! Values are immutable once produced. Strings are the character-array
//! specialization and get their own variant; every other array carries its
//! element type and is homogeneous by construction.

use std::fmt;

use crate::ty::ValueType;

/// Runtime value produced by evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
    Array(Array),
}

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    pub fn type_of(&self) -> ValueType {
        match self {
            Value::Integer(_) => ValueType::Integer,
            Value::Float(_) => ValueType::Float,
            Value::String(_) => ValueType::String,
            Value::Array(array) => array.type_of(),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            // Debug keeps the fractional part: `3.0`, not `3`.
            Value::Float(n) => write!(f, "{n:?}"),
            Value::String(s) => f.write_str(s),
            Value::Array(array) => array.fmt(f),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

/// Homogeneous array of values.
#[derive(Clone, Debug, PartialEq)]
pub struct Array {
    elem: ValueType,
    items: Vec<Value>,
}

/// An array element whose type differs from the array's element type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MixedArrayError {
    pub expected: ValueType,
    pub found: ValueType,
    pub index: usize,
}

impl fmt::Display for MixedArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "array element {} is {}, expected {}",
            self.index, self.found, self.expected
        )
    }
}

impl std::error::Error for MixedArrayError {}

impl Array {
    /// Build an array, checking every item against `elem`.
    pub fn new(elem: ValueType, items: Vec<Value>) -> Result<Self, MixedArrayError> {
        for (index, item) in items.iter().enumerate() {
            let found = item.type_of();
            if found != elem {
                return Err(MixedArrayError {
                    expected: elem,
                    found,
                    index,
                });
            }
        }
        Ok(Array { elem, items })
    }

    /// Build an array whose element type is taken from the first item.
    ///
    /// Returns `Ok(None)` for an empty sequence, which has no element type.
    pub fn from_values(items: Vec<Value>) -> Result<Option<Self>, MixedArrayError> {
        let Some(first) = items.first() else {
            return Ok(None);
        };
        let elem = first.type_of();
        Array::new(elem, items).map(Some)
    }

    pub fn elem_type(&self) -> &ValueType {
        &self.elem
    }

    pub fn type_of(&self) -> ValueType {
        ValueType::Array(Box::new(self.elem.clone()))
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match item {
                Value::String(s) => write!(f, "{s:?}")?,
                other => write!(f, "{other}")?,
            }
        }
        f.write_str("]")
    }
}
