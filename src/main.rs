//! spritefx - Command-line tool for growing effects out of pixel art sprites

use std::process::ExitCode;

use spritefx::cli;

fn main() -> ExitCode {
    cli::run()
}
