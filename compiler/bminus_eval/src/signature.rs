//! Overload signatures.
//!
//! A signature is validated once, when it is built, so the dispatcher can
//! rely on its shape: at most one environment slot, at most one variadic
//! slot, and nothing value-consuming after the variadic.

use std::fmt;

use smallvec::SmallVec;

use crate::ty::TypeSet;

/// One parameter slot of an overload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Param {
    /// Evaluated argument whose type must be in the set.
    Value(TypeSet),
    /// The calling environment; consumes no argument.
    Env,
    /// Unevaluated argument node.
    Block,
    /// All remaining arguments, each evaluated and checked against the set.
    Variadic(TypeSet),
}

/// Reasons a signature is rejected at registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignatureError {
    DuplicateEnv,
    DuplicateVariadic,
    /// A value or block parameter follows the variadic one.
    VariadicNotLast,
    /// Parameter at `index` accepts no types at all.
    EmptyTypeSet { index: usize },
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureError::DuplicateEnv => {
                write!(f, "signature declares more than one environment parameter")
            }
            SignatureError::DuplicateVariadic => {
                write!(f, "signature declares more than one variadic parameter")
            }
            SignatureError::VariadicNotLast => {
                write!(f, "variadic parameter must be the last value parameter")
            }
            SignatureError::EmptyTypeSet { index } => {
                write!(f, "parameter {index} accepts no types")
            }
        }
    }
}

impl std::error::Error for SignatureError {}

/// Validated, ordered parameter list of one overload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    params: SmallVec<[Param; 4]>,
}

impl Signature {
    pub fn new(params: impl IntoIterator<Item = Param>) -> Result<Self, SignatureError> {
        let params: SmallVec<[Param; 4]> = params.into_iter().collect();

        let mut seen_env = false;
        let mut seen_variadic = false;
        for (index, param) in params.iter().enumerate() {
            match *param {
                Param::Env => {
                    if seen_env {
                        return Err(SignatureError::DuplicateEnv);
                    }
                    seen_env = true;
                }
                Param::Variadic(set) => {
                    if seen_variadic {
                        return Err(SignatureError::DuplicateVariadic);
                    }
                    if set.is_empty() {
                        return Err(SignatureError::EmptyTypeSet { index });
                    }
                    seen_variadic = true;
                }
                Param::Value(set) => {
                    if seen_variadic {
                        return Err(SignatureError::VariadicNotLast);
                    }
                    if set.is_empty() {
                        return Err(SignatureError::EmptyTypeSet { index });
                    }
                }
                Param::Block => {
                    if seen_variadic {
                        return Err(SignatureError::VariadicNotLast);
                    }
                }
            }
        }

        Ok(Signature { params })
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of arguments consumed by the fixed (non-variadic) parameters.
    pub fn fixed_arity(&self) -> usize {
        self.params
            .iter()
            .filter(|p| matches!(p, Param::Value(_) | Param::Block))
            .count()
    }

    pub fn variadic(&self) -> Option<TypeSet> {
        self.params.iter().find_map(|p| match p {
            Param::Variadic(set) => Some(*set),
            _ => None,
        })
    }

    /// Render as `NAME(integer, block, float...)`; the environment slot is
    /// omitted.
    pub fn render(&self, name: &str) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .filter_map(|p| match p {
                Param::Value(set) => Some(set.to_string()),
                Param::Block => Some("block".to_string()),
                Param::Variadic(set) => Some(format!("{set}...")),
                Param::Env => None,
            })
            .collect();
        format!("{name}({})", params.join(", "))
    }
}
