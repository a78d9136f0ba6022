//! The `run` and `eval` commands: parse, evaluate, print each result.

use std::io::Write;

use super::{read_file, stderr_is_tty};
use bminus_eval::std_lib;

use crate::{report_error, run_source_to, Error, RunOptions};

/// Run a B-Minus source file.
pub fn run_file(path: &str, options: &RunOptions) -> bool {
    match read_file(path) {
        Ok(source) => execute(&source, path, options),
        Err(err) => {
            report_error(&err, "", path, options, stderr_is_tty(), std::io::stderr());
            false
        }
    }
}

/// Evaluate source text given on the command line.
pub fn eval_source(source: &str, options: &RunOptions) -> bool {
    execute(source, "<eval>", options)
}

fn execute(source: &str, path: &str, options: &RunOptions) -> bool {
    let mut out = std::io::stdout().lock();
    let result = std_lib::builder()
        .map_err(Error::from)
        .and_then(|builder| run_source_to(builder, source, &mut out));
    let _ = out.flush();
    drop(out);
    match result {
        Ok(()) => true,
        Err(err) => {
            report_error(&err, source, path, options, stderr_is_tty(), std::io::stderr());
            false
        }
    }
}
