//! The `parse` command: dump the syntax tree of a file.

use super::{read_file, stderr_is_tty};
use crate::{report_error, Error, RunOptions};

pub fn parse_file(path: &str, options: &RunOptions) -> bool {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(err) => {
            report_error(&err, "", path, options, stderr_is_tty(), std::io::stderr());
            return false;
        }
    };

    match bminus_parse::parse(&source) {
        Ok(nodes) => {
            println!("{nodes:#?}");
            true
        }
        Err(err) => {
            report_error(
                &Error::from(err),
                &source,
                path,
                options,
                stderr_is_tty(),
                std::io::stderr(),
            );
            false
        }
    }
}
