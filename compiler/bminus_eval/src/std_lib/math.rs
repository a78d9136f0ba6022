//! `ADD` and `SUM`.

use crate::environment::FunctionEntry;
use crate::errors::HostError;
use crate::signature::{Param, Signature, SignatureError};
use crate::ty::TypeSet;
use crate::value::Value;

const INT: Param = Param::Value(TypeSet::INTEGER);
const FLOAT: Param = Param::Value(TypeSet::FLOAT);
const NUMBER: Param = Param::Value(TypeSet::NUMBER);

pub fn math() -> Result<Vec<FunctionEntry>, SignatureError> {
    Ok(vec![add()?, sum()?])
}

/// Integer addition wraps; any float operand makes the result a float.
fn add() -> Result<FunctionEntry, SignatureError> {
    Ok(FunctionEntry::new("ADD")
        .with_overload(Signature::new([INT, INT])?, |mut args| {
            let (a, b) = (args.int()?, args.int()?);
            Ok(Some(Value::Integer(a.wrapping_add(b))))
        })
        .with_overload(Signature::new([FLOAT, FLOAT])?, |mut args| {
            let (a, b) = (args.float()?, args.float()?);
            Ok(Some(Value::Float(a + b)))
        })
        .with_overload(Signature::new([NUMBER, NUMBER])?, |mut args| {
            let (a, b) = (args.number()?, args.number()?);
            Ok(Some(Value::Float(a + b)))
        }))
}

fn sum() -> Result<FunctionEntry, SignatureError> {
    Ok(FunctionEntry::new("SUM")
        .with_overload(
            Signature::new([Param::Variadic(TypeSet::INTEGER)])?,
            |mut args| {
                let mut total = 0i64;
                for value in args.rest()? {
                    let n = value
                        .as_int()
                        .ok_or_else(|| HostError::internal("SUM received a non-integer"))?;
                    total = total.wrapping_add(n);
                }
                Ok(Some(Value::Integer(total)))
            },
        )
        .with_overload(
            Signature::new([Param::Variadic(TypeSet::NUMBER)])?,
            |mut args| {
                let mut total = 0.0;
                for value in args.rest()? {
                    total += to_f64(&value)?;
                }
                Ok(Some(Value::Float(total)))
            },
        ))
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(value: &Value) -> Result<f64, HostError> {
    match value {
        Value::Integer(n) => Ok(*n as f64),
        Value::Float(n) => Ok(*n),
        other => Err(HostError::internal(format!(
            "expected a number, got {}",
            other.type_of()
        ))),
    }
}
