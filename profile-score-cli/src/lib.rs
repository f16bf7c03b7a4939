//! Command-line interface for offline profile scoring.
//!
//! `profile-score score <path>` scores a JSON profile document and prints the
//! report; `profile-score rubric` prints the criteria the report is built
//! from. Options are layered with `ortho_config`, so the profile path may
//! also come from configuration files or `PROFILE_SCORE_*` variables.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod fs;
mod rubric;
mod score;

pub use error::CliError;

use rubric::run_rubric;
use score::{ScoreArgs, run_score};

const ARG_SCORE_PROFILE: &str = "profile";
const ENV_SCORE_PROFILE: &str = "PROFILE_SCORE_CMDS_SCORE_PROFILE";

/// Run the CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Rubric => run_rubric(),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "profile-score",
    about = "Score professional-network profiles against a fixed rubric",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a profile document and print the report.
    Score(ScoreArgs),
    /// Print the scoring rubric as JSON.
    Rubric,
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
