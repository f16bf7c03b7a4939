//! Error types raised while building a criteria registry.

use thiserror::Error;

use crate::CriterionKind;

/// Errors raised when a criteria registry is malformed.
///
/// These are configuration errors: they surface while the registry is
/// constructed and never while a profile is being scored.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No criteria were supplied.
    #[error("criteria registry must contain at least one criterion")]
    Empty,
    /// A criterion names no section.
    #[error("criterion #{index} ({kind}) has an empty section name")]
    EmptySection {
        /// Position of the criterion in the registry.
        index: usize,
        /// Kind of the offending criterion.
        kind: CriterionKind,
    },
    /// A criterion can never award points.
    #[error("criterion {section}/{kind} must award at least one point")]
    ZeroMaxScore {
        /// Section of the offending criterion.
        section: String,
        /// Kind of the offending criterion.
        kind: CriterionKind,
    },
    /// A threshold criterion lacks a positive minimum.
    #[error("criterion {section}/{kind} requires a positive minimum")]
    MissingThreshold {
        /// Section of the offending criterion.
        section: String,
        /// Kind of the offending criterion.
        kind: CriterionKind,
    },
    /// A keyword criterion has nothing to match.
    #[error("criterion {section}/{kind} requires at least one keyword")]
    MissingKeywords {
        /// Section of the offending criterion.
        section: String,
        /// Kind of the offending criterion.
        kind: CriterionKind,
    },
}
