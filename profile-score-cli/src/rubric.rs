//! Rubric command: prints the active criteria registry.

use std::io::Write;

use profile_score_core::{CriteriaRegistry, ScoringCriterion};
use serde::Serialize;

use crate::{CliError, write_json};

/// JSON listing of a registry and its ceiling.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RubricListing<'a> {
    pub(crate) max_total_score: u32,
    pub(crate) sections: Vec<&'static str>,
    pub(crate) criteria: &'a [ScoringCriterion],
}

impl<'a> From<&'a CriteriaRegistry> for RubricListing<'a> {
    fn from(registry: &'a CriteriaRegistry) -> Self {
        Self {
            max_total_score: registry.max_total_score(),
            sections: registry.sections(),
            criteria: registry.criteria(),
        }
    }
}

pub(super) fn run_rubric() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rubric_with(CriteriaRegistry::standard(), &mut stdout)
}

pub(super) fn run_rubric_with(
    registry: &CriteriaRegistry,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    write_json(writer, &RubricListing::from(registry))
}
