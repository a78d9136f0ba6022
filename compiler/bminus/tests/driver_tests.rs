//! End-to-end tests for the driver: source in, values or rendered
//! diagnostics out.

#![allow(clippy::unwrap_used)]

use bminus::commands::read_file;
use bminus::{
    install_panic_hook, report_error, run_source, run_source_to, run_source_with, Error,
    RunOptions,
};
use bminus_diagnostic::emitter::ColorMode;
use bminus_diagnostic::ErrorCode;
use bminus_eval::{
    std_lib, EnvironmentBuilder, Param, RuntimeErrorKind, Signature, SignatureError, TypeSet,
    Value,
};
use bminus_ir::Span;
use pretty_assertions::assert_eq;

fn render(error: &Error, source: &str) -> String {
    let options = RunOptions {
        color: ColorMode::Never,
    };
    let mut out = Vec::new();
    report_error(error, source, "demo.bm", &options, false, &mut out);
    String::from_utf8(out).unwrap()
}

#[test]
fn test_add_scenario() {
    assert_eq!(run_source("[ADD 1 2]").unwrap(), vec![Value::Integer(3)]);
}

#[test]
fn test_j_scenario() {
    assert_eq!(
        run_source("[J 10]").unwrap(),
        vec![Value::string("jjjjjjjjjj")]
    );
}

#[test]
fn test_debug_scenario() {
    assert_eq!(
        run_source("[DEBUG \"hi\"]").unwrap(),
        vec![Value::string("String \"hi\"")]
    );
}

#[test]
fn test_mixed_program_prints_in_order() {
    let values = run_source("Hello!\n[ADD 1 2]\n[DEBUG 4]\n[REPEAT 2 [J 1]]").unwrap();
    let printed: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(printed, vec!["Hello!", "3", "Integer 4", "[\"j\", \"j\"]"]);
}

#[test]
fn test_custom_builder() {
    let builder = EnvironmentBuilder::new().register(
        "shout",
        Signature::new([Param::Value(TypeSet::STRING)]).unwrap(),
        |mut args| Ok(Some(Value::String(args.string()?.to_uppercase()))),
    );
    assert_eq!(
        run_source_with(builder, "[SHOUT hey]").unwrap(),
        vec![Value::string("HEY")]
    );
}

#[test]
fn test_results_before_a_runtime_error_are_written() {
    let mut out = Vec::new();
    let err = run_source_to(std_lib::builder().unwrap(), "[J 1] Hi [ADD 1 2] [NOPE] [J 2]", &mut out)
        .unwrap_err();
    assert_eq!(String::from_utf8(out).unwrap(), "j\nHi\n3\n");
    let Error::Runtime(runtime) = &err else {
        panic!("expected runtime error, got {err:?}");
    };
    assert_eq!(runtime.span, Span::new(20, 24));
}

#[test]
fn test_syntax_error_writes_nothing() {
    let mut out = Vec::new();
    let err = run_source_to(std_lib::builder().unwrap(), "[J 1] [ADD 1", &mut out).unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));
    assert!(out.is_empty());
}

#[test]
fn test_host_panic_is_reported_once_hook_is_installed() {
    install_panic_hook();
    let builder = EnvironmentBuilder::new().register(
        "boom",
        Signature::new([]).unwrap(),
        |_| panic!("host blew up"),
    );
    let mut out = Vec::new();
    let err = run_source_to(builder, "[BOOM]", &mut out).unwrap_err();
    let Error::Runtime(runtime) = &err else {
        panic!("expected runtime error, got {err:?}");
    };
    assert_eq!(
        runtime.kind,
        RuntimeErrorKind::Interpreter {
            message: "host blew up".to_string()
        }
    );
    assert_eq!(
        render(&err, "[BOOM]").lines().next(),
        Some("error[E2004]: interpreter error: host blew up")
    );
}

#[test]
fn test_empty_brackets_are_a_syntax_error() {
    let err = run_source("[]").unwrap_err();
    let Error::Syntax(syntax) = &err else {
        panic!("expected syntax error, got {err:?}");
    };
    assert_eq!(syntax.span, Span::new(0, 2));
    assert_eq!(err.to_diagnostic().unwrap().code, ErrorCode::E1002);
}

#[test]
fn test_renders_overload_failure() {
    let source = "[ADD \"a\" 1]";
    let err = run_source(source).unwrap_err();
    let expected = "\
error[E2002]: no overload of ADD matches the given arguments
 --> demo.bm:1:1
  |
1 | [ADD \"a\" 1]
  | ^^^^^^^^^^^
  = note: ADD(integer, integer): type mismatch: expected integer, got string
  = note: ADD(float, float): type mismatch: expected float, got string
  = note: ADD(integer | float, integer | float): type mismatch: expected integer | float, got string

";
    assert_eq!(render(&err, source), expected);
}

#[test]
fn test_renders_undefined_function_on_later_line() {
    let source = "[J 1]\n  [NOPE 1]";
    let err = run_source(source).unwrap_err();
    let text = render(&err, source);
    assert!(text.starts_with("error[E2001]: function NOPE is not defined\n"));
    assert!(text.contains(" --> demo.bm:2:4\n"));
    assert!(text.contains("2 |   [NOPE 1]\n"));
    assert!(text.contains("  |    ^^^^ not defined\n"));
}

#[test]
fn test_renders_unexpected_eof() {
    let source = "[ADD 1";
    let err = run_source(source).unwrap_err();
    let text = render(&err, source);
    assert!(text.starts_with("error[E1001]: unexpected end of input\n"));
    assert!(text.contains("1 | [ADD 1\n"));
    assert!(text.contains("  |       ^\n"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = read_file("/nonexistent/dir/program.bm").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(render(&err, ""), "error: cannot find file '/nonexistent/dir/program.bm'\n");
}

#[test]
fn test_signature_errors_convert() {
    let err = Error::from(SignatureError::DuplicateEnv);
    assert_eq!(
        err.to_string(),
        "invalid signature: signature declares more than one environment parameter"
    );
    assert_eq!(err.to_diagnostic().unwrap().code, ErrorCode::E3001);
}
