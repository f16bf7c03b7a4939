//! Score command implementation for the profile scoring CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use profile_score_core::{ProfileData, ProfileScore};
use profile_score_scorer::RubricScorer;
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{ARG_SCORE_PROFILE, CliError, ENV_SCORE_PROFILE, write_json};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a profile document against the standard rubric. The \
                 document may use the scraped or the normalised schema; both \
                 produce the same report. The path can come from the command \
                 line, configuration files, or environment variables.",
    about = "Score a JSON profile document"
)]
#[ortho_config(prefix = "PROFILE_SCORE")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing the profile document.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Print one line per section instead of the full JSON report.
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) summary: bool,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Output layout for the score command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON report.
    Json,
    /// Plain-text section lines followed by the total.
    Summary,
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    /// Path to the JSON profile document.
    pub(crate) profile: Utf8PathBuf,
    /// How the report is written.
    pub(crate) format: OutputFormat,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.profile, ARG_SCORE_PROFILE)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let profile = args.profile.ok_or(CliError::MissingArgument {
            field: ARG_SCORE_PROFILE,
            env: ENV_SCORE_PROFILE,
        })?;
        let format = if args.summary {
            OutputFormat::Summary
        } else {
            OutputFormat::Json
        };
        Ok(Self { profile, format })
    }
}

pub(super) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(super) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let report = score_file(&config.profile)?;
    match config.format {
        OutputFormat::Json => write_json(writer, &report),
        OutputFormat::Summary => write_summary(writer, &report),
    }
}

/// Loads the profile at `path` and scores it with the standard rubric.
pub(super) fn score_file(path: &Utf8Path) -> Result<ProfileScore, CliError> {
    let profile = load_profile(path)?;
    log::debug!("scoring {path} as a {} profile", profile.schema());
    Ok(RubricScorer::standard().score(&profile))
}

/// Loads a JSON profile document from disk.
pub(super) fn load_profile(path: &Utf8Path) -> Result<ProfileData, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenProfile {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseProfile {
        path: path.to_path_buf(),
        source,
    })
}

fn write_summary(writer: &mut dyn Write, report: &ProfileScore) -> Result<(), CliError> {
    for section in report.section_scores() {
        writeln!(
            writer,
            "{}: {}/{}",
            section.section(),
            section.score(),
            section.max_possible_points()
        )
        .map_err(CliError::WriteOutput)?;
    }
    writeln!(
        writer,
        "total: {}/{} ({}%, {})",
        report.total_score(),
        report.max_total_score(),
        report.percentage(),
        report.grade()
    )
    .map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
