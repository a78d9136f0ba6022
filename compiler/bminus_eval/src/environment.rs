//! Function table.
//!
//! An [`EnvironmentBuilder`] collects host functions by name; `build()`
//! freezes it into an [`Environment`] that stays read-only for the whole run.
//!
//! # Registration
//!
//! - [`register`](EnvironmentBuilder::register) appends one overload to the
//!   entry for a name, so repeated calls accumulate overloads in order.
//! - [`add_function`](EnvironmentBuilder::add_function) and
//!   [`add_functions`](EnvironmentBuilder::add_functions) install prebuilt
//!   entries, replacing any existing entry with the same name.

use std::fmt;

use bminus_ir::FunctionName;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::args::Args;
use crate::errors::HostError;
use crate::signature::Signature;
use crate::value::Value;

/// Host function body.
pub type HostFn = Box<dyn Fn(Args<'_>) -> Result<Option<Value>, HostError>>;

/// One signature of a function plus the code that runs when it is chosen.
pub struct Overload {
    signature: Signature,
    body: HostFn,
}

impl Overload {
    pub fn new<F>(signature: Signature, body: F) -> Self
    where
        F: Fn(Args<'_>) -> Result<Option<Value>, HostError> + 'static,
    {
        Overload {
            signature,
            body: Box::new(body),
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub(crate) fn call(&self, args: Args<'_>) -> Result<Option<Value>, HostError> {
        (self.body)(args)
    }
}

impl fmt::Debug for Overload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overload")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// All overloads registered under one name, in resolution order.
#[derive(Debug)]
pub struct FunctionEntry {
    name: FunctionName,
    overloads: Vec<Overload>,
}

impl FunctionEntry {
    pub fn new(name: &str) -> Self {
        FunctionEntry {
            name: FunctionName::new(name),
            overloads: Vec::new(),
        }
    }

    /// Append an overload; earlier overloads take priority.
    #[must_use]
    pub fn with_overload<F>(mut self, signature: Signature, body: F) -> Self
    where
        F: Fn(Args<'_>) -> Result<Option<Value>, HostError> + 'static,
    {
        self.overloads.push(Overload::new(signature, body));
        self
    }

    pub fn name(&self) -> &FunctionName {
        &self.name
    }

    pub fn overloads(&self) -> &[Overload] {
        &self.overloads
    }
}

/// Builder for an [`Environment`].
#[derive(Debug, Default)]
pub struct EnvironmentBuilder {
    functions: FxHashMap<FunctionName, FunctionEntry>,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an overload to `name`, after any already registered.
    #[must_use]
    pub fn register<F>(mut self, name: &str, signature: Signature, body: F) -> Self
    where
        F: Fn(Args<'_>) -> Result<Option<Value>, HostError> + 'static,
    {
        let key = FunctionName::new(name);
        debug!(name = %key, signature = %signature.render(key.as_str()), "register overload");
        self.functions
            .entry(key.clone())
            .or_insert_with(|| FunctionEntry {
                name: key,
                overloads: Vec::new(),
            })
            .overloads
            .push(Overload::new(signature, body));
        self
    }

    /// Install a prebuilt entry, replacing any entry with the same name.
    #[must_use]
    pub fn add_function(mut self, entry: FunctionEntry) -> Self {
        debug!(name = %entry.name, overloads = entry.overloads.len(), "add function");
        self.functions.insert(entry.name.clone(), entry);
        self
    }

    /// Install a group of prebuilt entries; see [`add_function`](Self::add_function).
    #[must_use]
    pub fn add_functions(self, entries: impl IntoIterator<Item = FunctionEntry>) -> Self {
        entries.into_iter().fold(self, Self::add_function)
    }

    pub fn build(self) -> Environment {
        debug!(functions = self.functions.len(), "environment built");
        Environment {
            functions: self.functions,
        }
    }
}

/// Read-only name to function table used by one evaluation run.
#[derive(Debug, Default)]
pub struct Environment {
    functions: FxHashMap<FunctionName, FunctionEntry>,
}

impl Environment {
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::new()
    }

    /// Look up a function; the name is case-normalized first.
    pub fn get(&self, name: &str) -> Option<&FunctionEntry> {
        self.functions.get(FunctionName::new(name).as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&FunctionName> {
        let mut names: Vec<_> = self.functions.keys().collect();
        names.sort();
        names
    }
}
