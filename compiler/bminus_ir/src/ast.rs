//! Syntax tree produced by the reader.
//!
//! The tree is a closed set of node kinds; the evaluator matches on it
//! exhaustively. Every node carries the span of the text it was read from.

use std::fmt;

use crate::Span;

/// A single syntax node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

/// The node variants.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Integer literal, e.g. `42`.
    Int(i64),
    /// Float literal, e.g. `1.5`.
    Float(f64),
    /// String literal: quoted text, a bare word, or top-level free text.
    Str(String),
    /// Bracket call `[NAME arg ...]`.
    Call { ident: Ident, args: Vec<Node> },
}

/// Name of a called function, as written in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Node {
    #[inline]
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }

    pub fn int(value: i64, span: Span) -> Self {
        Node::new(NodeKind::Int(value), span)
    }

    pub fn float(value: f64, span: Span) -> Self {
        Node::new(NodeKind::Float(value), span)
    }

    pub fn string(value: impl Into<String>, span: Span) -> Self {
        Node::new(NodeKind::Str(value.into()), span)
    }

    pub fn call(ident: Ident, args: Vec<Node>, span: Span) -> Self {
        Node::new(NodeKind::Call { ident, args }, span)
    }

    /// Returns the text of a string literal node.
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` for a string literal with no content.
    ///
    /// The reader drops a leading run of these before picking the identifier
    /// of a bracket group.
    pub fn is_empty_str(&self) -> bool {
        matches!(&self.kind, NodeKind::Str(s) if s.is_empty())
    }

    /// Short description used in syntax error messages.
    pub fn describe(&self) -> String {
        match &self.kind {
            NodeKind::Int(v) => format!("literal int {v}"),
            NodeKind::Float(v) => format!("literal float {v}"),
            NodeKind::Str(s) => format!("literal string \"{s}\""),
            NodeKind::Call { .. } => "function call".to_string(),
        }
    }
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span,
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
