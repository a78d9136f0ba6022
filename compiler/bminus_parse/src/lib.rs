//! Reader for the B-Minus bracket-prefix syntax.
//!
//! A program is a sequence of statements. At the top level a statement is
//! either a bracket call `[NAME arg ...]` or a run of free text up to the next
//! `[`. Inside brackets an element is a nested call, a quoted string, a
//! number, or a bare word.
//!
//! ```
//! use bminus_ir::NodeKind;
//!
//! let nodes = bminus_parse::parse("[ADD 1 2]").unwrap();
//! assert_eq!(nodes.len(), 1);
//! assert!(matches!(&nodes[0].kind, NodeKind::Call { ident, .. } if ident.name == "ADD"));
//! ```

mod cursor;
mod error;

pub use cursor::Cursor;
pub use error::{SyntaxError, SyntaxErrorKind};

use bminus_ir::{ensure_sufficient_stack, Ident, Node, NodeKind};
use tracing::trace;

/// Parse source text into its top-level statements.
///
/// Empty or whitespace-only input yields an empty sequence.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Vec<Node>, SyntaxError> {
    Reader::new(source).read_program()
}

/// Recursive-descent reader over a [`Cursor`].
struct Reader<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Reader<'a> {
    fn new(source: &'a str) -> Self {
        Reader {
            cursor: Cursor::new(source),
        }
    }

    fn read_program(&mut self) -> Result<Vec<Node>, SyntaxError> {
        let mut nodes = Vec::new();
        loop {
            self.cursor.eat_whitespace();
            if self.cursor.is_eof() {
                return Ok(nodes);
            }
            let node = self.read_statement(true)?;
            trace!(span = ?node.span, kind = node.describe(), "statement");
            nodes.push(node);
        }
    }

    fn read_statement(&mut self, top_level: bool) -> Result<Node, SyntaxError> {
        ensure_sufficient_stack(|| match self.cursor.current() {
            None => Err(SyntaxError::unexpected_eof(self.cursor.point_span())),
            Some(b'[') => self.read_call(),
            Some(_) if top_level => Ok(self.read_free_text()),
            Some(b'"') => self.read_quoted(),
            Some(byte) if byte.is_ascii_digit() => self.read_number(),
            Some(_) => Ok(self.read_word()),
        })
    }

    /// `[` elements... `]`
    fn read_call(&mut self) -> Result<Node, SyntaxError> {
        let start = self.cursor.pos();
        self.cursor.advance();

        let mut params = Vec::new();
        loop {
            self.cursor.eat_whitespace();
            match self.cursor.current() {
                None => return Err(SyntaxError::unexpected_eof(self.cursor.point_span())),
                Some(b']') => {
                    self.cursor.advance();
                    break;
                }
                Some(_) => params.push(self.read_statement(false)?),
            }
        }
        let span = self.cursor.span_from(start);

        let leading_empty = params.iter().take_while(|p| p.is_empty_str()).count();
        let mut params = params.into_iter().skip(leading_empty);
        match params.next() {
            Some(Node {
                kind: NodeKind::Str(name),
                span: ident_span,
            }) => Ok(Node::call(
                Ident::new(name, ident_span),
                params.collect(),
                span,
            )),
            Some(other) => Err(SyntaxError::missing_identifier(
                Some(other.describe()),
                span,
            )),
            None => Err(SyntaxError::missing_identifier(None, span)),
        }
    }

    /// Top-level text up to the next `[`, trimmed.
    fn read_free_text(&mut self) -> Node {
        let start = self.cursor.pos();
        self.cursor.eat_until(b'[');
        let text = self.cursor.slice_from(start).trim();
        Node::string(text, self.cursor.span_from(start))
    }

    /// `"` content `"` with no escape processing.
    fn read_quoted(&mut self) -> Result<Node, SyntaxError> {
        let start = self.cursor.pos();
        self.cursor.advance();
        let content_start = self.cursor.pos();
        if !self.cursor.eat_until(b'"') {
            return Err(SyntaxError::unterminated_string(
                self.cursor.span_from(start),
            ));
        }
        let content = self.cursor.slice_from(content_start);
        self.cursor.advance();
        Ok(Node::string(content, self.cursor.span_from(start)))
    }

    /// A word starting with a digit: integer first, then float.
    fn read_number(&mut self) -> Result<Node, SyntaxError> {
        let start = self.cursor.pos();
        self.cursor.eat_until_delimiter();
        let text = self.cursor.slice_from(start);
        let span = self.cursor.span_from(start);

        if let Ok(value) = text.parse::<i64>() {
            return Ok(Node::int(value, span));
        }
        // Integers wider than i64 still read, as floats.
        if let Ok(value) = text.parse::<f64>() {
            return Ok(Node::float(value, span));
        }
        if text.contains(['.', 'e', 'E']) {
            Err(SyntaxError::invalid_float(text, span))
        } else {
            Err(SyntaxError::invalid_int(text, span))
        }
    }

    fn read_word(&mut self) -> Node {
        let start = self.cursor.pos();
        self.cursor.eat_until_delimiter();
        Node::string(
            self.cursor.slice_from(start),
            self.cursor.span_from(start),
        )
    }
}
