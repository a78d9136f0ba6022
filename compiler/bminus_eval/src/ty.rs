//! Runtime type tags.
//!
//! Overload matching only ever looks at the variant tag of a value, so a
//! parameter's accepted types are a bitflag union of tags. The full
//! [`ValueType`] (with array element types) exists for error messages.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Set of value variants accepted by a parameter.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeSet: u8 {
        const INTEGER = 1 << 0;
        const FLOAT = 1 << 1;
        const STRING = 1 << 2;
        const ARRAY = 1 << 3;

        /// Integers and floats.
        const NUMBER = Self::INTEGER.bits() | Self::FLOAT.bits();
        /// Every variant.
        const ANY = Self::INTEGER.bits()
            | Self::FLOAT.bits()
            | Self::STRING.bits()
            | Self::ARRAY.bits();
    }
}

impl TypeSet {
    /// Does this set accept values of type `ty`?
    #[inline]
    pub fn accepts(self, ty: &ValueType) -> bool {
        self.contains(ty.tag())
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("nothing");
        }
        if *self == TypeSet::ANY {
            return f.write_str("any");
        }
        let names = [
            (TypeSet::INTEGER, "integer"),
            (TypeSet::FLOAT, "float"),
            (TypeSet::STRING, "string"),
            (TypeSet::ARRAY, "array"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Full runtime type of a value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    Float,
    /// Array of characters; named "string" everywhere.
    String,
    Array(Box<ValueType>),
}

impl ValueType {
    /// The variant tag used for overload matching.
    pub fn tag(&self) -> TypeSet {
        match self {
            ValueType::Integer => TypeSet::INTEGER,
            ValueType::Float => TypeSet::FLOAT,
            ValueType::String => TypeSet::STRING,
            ValueType::Array(_) => TypeSet::ARRAY,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Integer => f.write_str("integer"),
            ValueType::Float => f.write_str("float"),
            ValueType::String => f.write_str("string"),
            ValueType::Array(elem) => write!(f, "array of {elem}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_set_display() {
        assert_eq!(TypeSet::INTEGER.to_string(), "integer");
        assert_eq!(TypeSet::NUMBER.to_string(), "integer | float");
        assert_eq!(
            (TypeSet::STRING | TypeSet::ARRAY).to_string(),
            "string | array"
        );
        assert_eq!(TypeSet::ANY.to_string(), "any");
        assert_eq!(TypeSet::empty().to_string(), "nothing");
    }

    #[test]
    fn test_value_type_display() {
        assert_eq!(ValueType::Integer.to_string(), "integer");
        assert_eq!(
            ValueType::Array(Box::new(ValueType::Array(Box::new(ValueType::Float)))).to_string(),
            "array of array of float"
        );
    }

    #[test]
    fn test_membership_uses_tag_only() {
        let nested = ValueType::Array(Box::new(ValueType::String));
        assert!(TypeSet::ARRAY.accepts(&nested));
        assert!(TypeSet::ANY.accepts(&nested));
        assert!(!TypeSet::NUMBER.accepts(&ValueType::String));
        assert!(TypeSet::NUMBER.accepts(&ValueType::Float));
    }
}
