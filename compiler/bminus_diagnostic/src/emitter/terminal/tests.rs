#![allow(clippy::unwrap_used)]

use super::*;
use crate::ErrorCode;
use bminus_ir::Span;
use pretty_assertions::assert_eq;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message("no overload of ADD matches the given arguments")
        .with_label(Span::new(0, 11), "")
        .with_note("ADD(integer, integer): type mismatch: expected integer, got string")
}

fn render(emitter_source: Option<&str>, diag: &Diagnostic) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
        if let Some(source) = emitter_source {
            emitter = emitter.with_source(source).with_file_path("demo.bm");
        }
        emitter.emit(diag);
        emitter.flush();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn test_no_source_fallback() {
    let text = render(None, &sample_diagnostic());
    assert!(text.starts_with("error[E2002]: no overload of ADD"));
    assert!(text.contains("--> 0..11"));
    assert!(text.contains("= note: ADD(integer, integer)"));
}

#[test]
fn test_snippet_rendering() {
    let source = "[ADD 1 \"x\"]";
    let text = render(Some(source), &sample_diagnostic());
    let expected = "\
error[E2002]: no overload of ADD matches the given arguments
 --> demo.bm:1:1
  |
1 | [ADD 1 \"x\"]
  | ^^^^^^^^^^^
  = note: ADD(integer, integer): type mismatch: expected integer, got string

";
    assert_eq!(text, expected);
}

#[test]
fn test_snippet_on_second_line() {
    let source = "hello\n[FOO 1]";
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("function FOO is not defined")
        .with_label(Span::new(7, 10), "not defined");
    let text = render(Some(source), &diag);
    assert!(text.contains(" --> demo.bm:2:2"));
    assert!(text.contains("2 | [FOO 1]"));
    assert!(text.contains("  |  ^^^ not defined"));
}

#[test]
fn test_zero_width_span_gets_one_caret() {
    let source = "[ADD 1";
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected end of input")
        .with_label(Span::point(6), "");
    let text = render(Some(source), &diag);
    assert!(text.contains("  |       ^"));
}

#[test]
fn test_colors_enabled() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Always, false);
    emitter.emit(&sample_diagnostic());
    emitter.flush();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\x1b["));
    assert!(text.contains("E2002"));
}

#[test]
fn test_color_mode_flags() {
    assert_eq!(ColorMode::from_flag("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::from_flag("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::from_flag("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::from_flag("sometimes"), None);
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
}
