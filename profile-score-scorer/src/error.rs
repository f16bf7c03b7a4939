//! Error types raised while pairing a registry with a resolver.

use profile_score_core::CriterionKind;
use thiserror::Error;

/// Errors raised by [`RubricScorer::with_resolver`](crate::RubricScorer::with_resolver).
///
/// Both variants are configuration errors detected before any profile is
/// scored.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScorerError {
    /// A criterion reads a field the resolver has no candidate paths for.
    #[error("resolver has no candidate paths for field '{key}'")]
    UnresolvableField {
        /// Section, or `section.focus`, of the offending criterion.
        key: String,
    },
    /// A criterion kind has no evaluator.
    #[error("no evaluator is registered for criterion kind '{kind}'")]
    UnhandledKind {
        /// Kind without an evaluator.
        kind: CriterionKind,
    },
}
