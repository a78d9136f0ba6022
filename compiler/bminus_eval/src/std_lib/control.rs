//! Functions built on environment and block parameters: `LIST`, `REPEAT`,
//! `IF` and `FAIL`.

use crate::environment::FunctionEntry;
use crate::signature::{Param, Signature, SignatureError};
use crate::ty::TypeSet;
use crate::value::{Array, Value};

pub fn control() -> Result<Vec<FunctionEntry>, SignatureError> {
    Ok(vec![list()?, repeat()?, if_()?, fail()?])
}

/// `[LIST a b ...]` builds a homogeneous array.
fn list() -> Result<FunctionEntry, SignatureError> {
    Ok(FunctionEntry::new("LIST").with_overload(
        Signature::new([Param::Env, Param::Variadic(TypeSet::ANY)])?,
        |mut args| {
            let env = args.env()?;
            let items = args.rest()?;
            match Array::from_values(items) {
                Ok(Some(array)) => Ok(Some(Value::Array(array))),
                Ok(None) => Err(env.raise_error("LIST needs at least one element")),
                Err(err) => Err(env.raise_error(format!("LIST: {err}"))),
            }
        },
    ))
}

/// `[REPEAT n block]` evaluates `block` n times and collects the results.
///
/// Results that are nothing are skipped; if none remain, the call produces
/// nothing.
fn repeat() -> Result<FunctionEntry, SignatureError> {
    Ok(FunctionEntry::new("REPEAT").with_overload(
        Signature::new([Param::Env, Param::Value(TypeSet::INTEGER), Param::Block])?,
        |mut args| {
            let env = args.env()?;
            let n = args.int()?;
            let block = args.block()?;
            if n < 0 {
                return Err(env.raise_error(format!(
                    "REPEAT expects a non-negative count, got {n}"
                )));
            }

            let mut results = Vec::new();
            for _ in 0..n {
                if let Some(value) = block.evaluate()? {
                    results.push(value);
                }
            }
            match Array::from_values(results) {
                Ok(array) => Ok(array.map(Value::Array)),
                Err(err) => Err(env.raise_error(format!("REPEAT: {err}"))),
            }
        },
    ))
}

/// `[IF cond then else]`; any non-zero condition takes `then`. Only the
/// chosen block is evaluated.
fn if_() -> Result<FunctionEntry, SignatureError> {
    Ok(FunctionEntry::new("IF").with_overload(
        Signature::new([Param::Value(TypeSet::INTEGER), Param::Block, Param::Block])?,
        |mut args| {
            let cond = args.int()?;
            let then_block = args.block()?;
            let else_block = args.block()?;
            let chosen = if cond != 0 { then_block } else { else_block };
            Ok(chosen.evaluate()?)
        },
    ))
}

/// `[FAIL message]` raises `message` at the call site.
fn fail() -> Result<FunctionEntry, SignatureError> {
    Ok(FunctionEntry::new("FAIL").with_overload(
        Signature::new([Param::Env, Param::Value(TypeSet::STRING)])?,
        |mut args| {
            let env = args.env()?;
            let message = args.string()?;
            Err(env.raise_error(message))
        },
    ))
}
