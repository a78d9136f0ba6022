//! `J` and `DEBUG`.

use crate::environment::FunctionEntry;
use crate::errors::HostError;
use crate::signature::{Param, Signature, SignatureError};
use crate::ty::TypeSet;
use crate::value::Value;

pub fn text() -> Result<Vec<FunctionEntry>, SignatureError> {
    Ok(vec![j()?, debug()?])
}

/// `[J n]` is the letter `j` repeated `n` times.
fn j() -> Result<FunctionEntry, SignatureError> {
    Ok(FunctionEntry::new("J").with_overload(
        Signature::new([Param::Value(TypeSet::INTEGER)])?,
        |mut args| {
            let n = args.int()?;
            let count = usize::try_from(n)
                .map_err(|_| HostError::Raised(format!("J expects a non-negative count, got {n}")))?;
            let mut text = String::new();
            text.try_reserve_exact(count)
                .map_err(|_| HostError::Raised(format!("J count {n} is too large")))?;
            text.extend(std::iter::repeat_n('j', count));
            Ok(Some(Value::String(text)))
        },
    ))
}

/// Describe a value together with its type.
fn debug() -> Result<FunctionEntry, SignatureError> {
    Ok(FunctionEntry::new("DEBUG")
        .with_overload(
            Signature::new([Param::Value(TypeSet::INTEGER)])?,
            |mut args| Ok(Some(Value::String(format!("Integer {}", args.int()?)))),
        )
        .with_overload(
            Signature::new([Param::Value(TypeSet::FLOAT)])?,
            |mut args| Ok(Some(Value::String(format!("Float {:?}", args.float()?)))),
        )
        .with_overload(
            Signature::new([Param::Value(TypeSet::STRING)])?,
            |mut args| Ok(Some(Value::String(format!("String \"{}\"", args.string()?)))),
        )
        .with_overload(
            Signature::new([Param::Value(TypeSet::ARRAY)])?,
            |mut args| {
                let array = args.array()?;
                Ok(Some(Value::String(format!(
                    "Array of {} {array}",
                    array.elem_type()
                ))))
            },
        ))
}
