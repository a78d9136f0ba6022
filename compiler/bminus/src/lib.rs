//! B-Minus driver.
//!
//! Ties the reader and the evaluator together, owns the unified [`Error`]
//! type, and renders failures as diagnostics against the source text.

pub mod commands;

use std::io::Write;
use std::sync::Once;

use bminus_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use bminus_diagnostic::{Diagnostic, ErrorCode};
use bminus_eval::{std_lib, EnvironmentBuilder, Interpreter, RuntimeError, SignatureError, Value};
use bminus_parse::SyntaxError;
use tracing::debug;

/// Any failure of a driver run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Syntax(#[from] SyntaxError),
    #[error("{0}")]
    Runtime(#[from] RuntimeError),
    #[error("invalid signature: {0}")]
    Signature(#[from] SignatureError),
    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Diagnostic for errors that point into the source text.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            Error::Syntax(err) => Some(err.to_diagnostic()),
            Error::Runtime(err) => Some(err.to_diagnostic()),
            Error::Signature(err) => Some(
                Diagnostic::error(ErrorCode::E3001).with_message(format!("invalid signature: {err}")),
            ),
            Error::Io { .. } => None,
        }
    }
}

/// Options shared by the commands that report diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    pub color: ColorMode,
}

/// Parse `source` and evaluate it against the standard library.
pub fn run_source(source: &str) -> Result<Vec<Value>, Error> {
    run_source_with(std_lib::builder()?, source)
}

/// Parse `source` and evaluate it against the functions in `builder`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_source_with(builder: EnvironmentBuilder, source: &str) -> Result<Vec<Value>, Error> {
    let nodes = bminus_parse::parse(source)?;
    debug!(statements = nodes.len(), "parsed");
    let interpreter = Interpreter::new(builder.build());
    Ok(interpreter.evaluate_all(&nodes)?)
}

/// Parse `source`, then evaluate it statement by statement against the
/// functions in `builder`, writing each result to `out` as soon as it is
/// produced. Results printed before a runtime error stay printed.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_source_to<W: Write>(
    builder: EnvironmentBuilder,
    source: &str,
    out: &mut W,
) -> Result<(), Error> {
    let nodes = bminus_parse::parse(source)?;
    debug!(statements = nodes.len(), "parsed");
    let interpreter = Interpreter::new(builder.build());
    for node in &nodes {
        if let Some(value) = interpreter.evaluate(node)? {
            writeln!(out, "{value}").map_err(|source| Error::Io {
                message: "failed to write result".to_string(),
                source,
            })?;
        }
    }
    Ok(())
}

/// Write `error` to `writer`, with a source snippet when it has a span.
pub fn report_error<W: Write>(
    error: &Error,
    source: &str,
    path: &str,
    options: &RunOptions,
    is_tty: bool,
    writer: W,
) {
    let mut emitter = TerminalEmitter::with_color_mode(writer, options.color, is_tty)
        .with_source(source)
        .with_file_path(path);
    if let Some(diag) = error.to_diagnostic() {
        emitter.emit(&diag);
    } else {
        let mut writer = emitter.into_inner();
        let _ = writeln!(writer, "error: {error}");
        let _ = writer.flush();
        return;
    }
    emitter.flush();
}

/// Route panics raised inside host functions to tracing instead of stderr.
///
/// The evaluator already turns those panics into interpreter errors, so the
/// default hook's message would be a duplicate. Panics anywhere else still
/// reach the previously installed hook.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if bminus_eval::in_host_call() {
            debug!(%info, "host function panicked");
        } else {
            previous(info);
        }
    }));
}

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only initializes when `RUST_LOG` is set; nested calls render as a tree.
/// Enable with e.g. `RUST_LOG=bminus_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .with(filter)
                .init();
        }
    });
}
