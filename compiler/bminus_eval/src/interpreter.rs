//! Tree-walking evaluator.

use std::fmt;

use bminus_ir::{ensure_sufficient_stack, Ident, Node, NodeKind, Span};
use tracing::trace;

use crate::dispatch::dispatch;
use crate::environment::Environment;
use crate::errors::RuntimeError;
use crate::value::Value;

/// Evaluates syntax nodes against an [`Environment`].
///
/// Host functions reach back into the interpreter through the
/// [`Env`](crate::Env) and [`Block`](crate::Block) capabilities, so nested
/// evaluation always uses the same function table.
pub struct Interpreter {
    environment: Environment,
}

impl Interpreter {
    pub fn new(environment: Environment) -> Self {
        Interpreter { environment }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Evaluate one node. Calls may produce nothing.
    pub fn evaluate(&self, node: &Node) -> Result<Option<Value>, RuntimeError> {
        ensure_sufficient_stack(|| match &node.kind {
            NodeKind::Int(n) => Ok(Some(Value::Integer(*n))),
            NodeKind::Float(n) => Ok(Some(Value::Float(*n))),
            NodeKind::Str(s) => Ok(Some(Value::String(s.clone()))),
            NodeKind::Call { ident, args } => self.eval_call(ident, args, node.span),
        })
    }

    /// Evaluate top-level nodes in order, collecting the results that are not
    /// nothing. Stops at the first error.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = nodes.len()))]
    pub fn evaluate_all(&self, nodes: &[Node]) -> Result<Vec<Value>, RuntimeError> {
        let mut results = Vec::new();
        for node in nodes {
            if let Some(value) = self.evaluate(node)? {
                results.push(value);
            }
        }
        Ok(results)
    }

    fn eval_call(
        &self,
        ident: &Ident,
        args: &[Node],
        span: Span,
    ) -> Result<Option<Value>, RuntimeError> {
        let Some(entry) = self.environment.get(&ident.name) else {
            return Err(RuntimeError::undefined_function(
                ident.name.to_ascii_uppercase(),
                ident.span,
            ));
        };
        trace!(name = %entry.name(), args = args.len(), "call");
        dispatch(self, entry, span, args)
    }
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("functions", &self.environment.names())
            .finish()
    }
}
