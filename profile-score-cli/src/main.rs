//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() -> ExitCode {
    match profile_score_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(profile_score_cli::CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("profile-score: {err}");
            ExitCode::FAILURE
        }
    }
}
