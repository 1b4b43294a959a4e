//! bookmarkd entry point
//!
//! Parses arguments, dispatches to the CLI module and reports errors on
//! stderr with a non-zero exit code.

use bookmarkd::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
