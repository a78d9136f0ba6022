//! Command handlers for the `bminus` CLI.
//!
//! Each handler returns `true` on success; the binary maps `false` to a
//! non-zero exit status.

mod debug;
mod run;

pub use debug::parse_file;
pub use run::{eval_source, run_file};

use crate::Error;

/// Read a source file, turning I/O failures into a readable [`Error`].
pub fn read_file(path: &str) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|source| {
        let message = match source.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            std::io::ErrorKind::PermissionDenied => {
                format!("permission denied reading '{path}'")
            }
            std::io::ErrorKind::InvalidData => {
                format!("'{path}' contains invalid UTF-8 data")
            }
            _ => format!("error reading '{path}': {source}"),
        };
        Error::Io { message, source }
    })
}

fn stderr_is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}
