//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support. When
//! the source text is attached, each label is rendered with the offending
//! source line and a caret underline.

use std::io::Write;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Source text attached to an emitter for snippet rendering.
struct SourceContext<'s> {
    text: &'s str,
    lines: LineOffsetTable,
    path: Option<String>,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext<'s>>,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source text so labels render with a snippet.
    #[must_use]
    pub fn with_source(mut self, text: &'s str) -> Self {
        let path = self.source.take().and_then(|s| s.path);
        self.source = Some(SourceContext {
            text,
            lines: LineOffsetTable::build(text),
            path,
        });
        self
    }

    /// Attach a file path shown in `-->` location lines.
    ///
    /// Has no effect unless [`with_source`](Self::with_source) was called first.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        if let Some(source) = self.source.as_mut() {
            source.path = Some(path.into());
        }
        self
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_label(&mut self, label: &Label) {
        let marker = "-->";
        let color = colors::ERROR;

        let Some(source) = self.source.as_ref() else {
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
            return;
        };

        let (line, col) = source.lines.offset_to_line_col(source.text, label.span.start);
        let location = match &source.path {
            Some(path) => format!("{path}:{line}:{col}"),
            None => format!("{line}:{col}"),
        };
        let line_text = source.lines.line_text(source.text, line).unwrap_or("");

        // Underline runs to the end of the span or the end of its first line.
        let start_col = (col - 1) as usize;
        let span_chars = label
            .span
            .slice(source.text)
            .map_or(0, |s| s.lines().next().unwrap_or("").chars().count());
        let line_chars = line_text.chars().count();
        let width = span_chars.min(line_chars.saturating_sub(start_col)).max(1);
        let gutter = " ".repeat(line.to_string().len());

        let _ = writeln!(self.writer, "{gutter}{marker} {location}");
        let _ = writeln!(self.writer, "{gutter} |");
        let _ = writeln!(self.writer, "{line} | {line_text}");
        let _ = write!(self.writer, "{gutter} | {}", " ".repeat(start_col));
        self.write_colored(&"^".repeat(width), color);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, color);
        }
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        if self.colors {
            let _ = write!(
                self.writer,
                "{}[{}]{}",
                colors::BOLD,
                diagnostic.code,
                colors::RESET
            );
        } else {
            let _ = write!(self.writer, "[{}]", diagnostic.code);
        }
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests;
