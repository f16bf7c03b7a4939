//! Scoring engine for professional-network profiles.
//!
//! A [`RubricScorer`] walks a [`CriteriaRegistry`] section by section. For
//! every criterion it resolves the relevant field through a
//! [`FieldResolver`], which reconciles the raw scraper schema with the
//! AI-normalised one, applies the evaluator for the criterion's kind, and
//! phrases the outcome with a [`TitleRenderer`]. The result is an immutable
//! [`ProfileScore`] with per-section and per-criterion detail.
//!
//! Scoring is pure: no I/O, no shared state, and identical inputs always
//! produce identical reports.
//!
//! # Examples
//!
//! ```
//! use profile_score_core::Grade;
//! use serde_json::json;
//!
//! let profile = json!({
//!     "headline": "Senior Software Engineer, Payments",
//!     "skills": ["Rust", "SQL", "Kubernetes", "AWS", "Go"],
//! });
//! let report = profile_score_scorer::score(&profile);
//! assert_eq!(report.total_score(), 23);
//! assert_eq!(report.grade(), Grade::F);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aggregate;
mod error;
mod evaluators;
mod resolver;
mod title;

use profile_score_core::{
    CriteriaRegistry, CriterionResult, FieldSource, ProfileScore, ScoringCriterion,
};

pub use error::ScorerError;
pub use evaluators::{
    Evaluation, Evaluator, array_length_min, email_presence, evaluate, evaluator_for,
    keyword_match, partial_credit, presence, url_customization, word_count_min,
};
pub use resolver::{FieldPath, FieldResolver, ResolvedValue, is_blank};
pub use title::{EnglishTitles, TitleRenderer};

/// Scores profiles against one registry.
///
/// Construction checks that every criterion has resolver candidates and an
/// evaluator, so scoring itself cannot fail.
#[derive(Debug, Clone)]
pub struct RubricScorer<'r, T = EnglishTitles> {
    registry: &'r CriteriaRegistry,
    resolver: &'r FieldResolver,
    titles: T,
}

impl<'r> RubricScorer<'r> {
    /// Pair `registry` with the standard resolver.
    ///
    /// # Errors
    /// Returns [`ScorerError::UnresolvableField`] when a criterion reads a
    /// section the standard resolver does not know.
    ///
    /// # Examples
    /// ```
    /// use profile_score_core::{CriteriaRegistry, ScoringCriterion};
    /// use profile_score_scorer::{RubricScorer, ScorerError};
    ///
    /// let known = CriteriaRegistry::new(vec![ScoringCriterion::presence("country", "Country", 5)])?;
    /// assert!(RubricScorer::new(&known).is_ok());
    ///
    /// let unknown = CriteriaRegistry::new(vec![ScoringCriterion::presence("hobbies", "Hobbies", 5)])?;
    /// assert!(matches!(
    ///     RubricScorer::new(&unknown),
    ///     Err(ScorerError::UnresolvableField { .. })
    /// ));
    /// # Ok::<(), profile_score_core::RegistryError>(())
    /// ```
    pub fn new(registry: &'r CriteriaRegistry) -> Result<Self, ScorerError> {
        Self::with_resolver(registry, FieldResolver::standard())
    }

    /// Pair `registry` with a custom resolver.
    ///
    /// # Errors
    /// Returns [`ScorerError::UnresolvableField`] when the resolver has no
    /// candidate paths for a criterion's field, and
    /// [`ScorerError::UnhandledKind`] when no evaluator handles its kind.
    pub fn with_resolver(
        registry: &'r CriteriaRegistry,
        resolver: &'r FieldResolver,
    ) -> Result<Self, ScorerError> {
        for criterion in registry.criteria() {
            let key = criterion.field_key();
            if !resolver.handles(key) {
                return Err(ScorerError::UnresolvableField {
                    key: key.to_string(),
                });
            }
            if evaluator_for(criterion.kind).is_none() {
                return Err(ScorerError::UnhandledKind {
                    kind: criterion.kind,
                });
            }
        }
        Ok(Self {
            registry,
            resolver,
            titles: EnglishTitles,
        })
    }
}

impl RubricScorer<'static> {
    /// Scorer for the standard registry and resolver.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            registry: CriteriaRegistry::standard(),
            resolver: FieldResolver::standard(),
            titles: EnglishTitles,
        }
    }
}

impl Default for RubricScorer<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'r, T: TitleRenderer> RubricScorer<'r, T> {
    /// Replace the title renderer.
    #[must_use]
    pub fn with_renderer<U: TitleRenderer>(self, titles: U) -> RubricScorer<'r, U> {
        RubricScorer {
            registry: self.registry,
            resolver: self.resolver,
            titles,
        }
    }

    /// Registry the scorer walks.
    #[must_use]
    pub const fn registry(&self) -> &'r CriteriaRegistry {
        self.registry
    }

    /// Resolver used to locate fields.
    #[must_use]
    pub const fn resolver(&self) -> &'r FieldResolver {
        self.resolver
    }

    /// Evaluate one criterion against `profile`.
    #[must_use]
    pub fn evaluate_criterion<S>(&self, criterion: &ScoringCriterion, profile: &S) -> CriterionResult
    where
        S: FieldSource + ?Sized,
    {
        let resolved = self.resolver.resolve(criterion.field_key(), profile);
        let outcome = evaluate(criterion, &resolved);
        debug_assert!(
            outcome.is_some(),
            "no evaluator registered for {}",
            criterion.kind
        );
        let evaluation = outcome.unwrap_or_else(|| {
            log::error!(
                "no evaluator registered for {}; scoring {} as zero",
                criterion.kind,
                criterion.field_key()
            );
            Evaluation::absent()
        });
        let title = self.titles.render(criterion, &evaluation.measurement);
        CriterionResult::new(
            criterion.section,
            criterion.kind,
            title,
            evaluation.point,
            criterion.max_score,
            evaluation.measurement,
        )
    }
}

/// Score `profile` against the standard registry.
///
/// # Examples
/// ```
/// use profile_score_core::Grade;
///
/// let report = profile_score_scorer::score(&serde_json::json!({}));
/// assert_eq!(report.total_score(), 0);
/// assert_eq!(report.grade(), Grade::F);
/// ```
#[must_use]
pub fn score<S>(profile: &S) -> ProfileScore
where
    S: FieldSource + ?Sized,
{
    RubricScorer::standard().score(profile)
}

#[cfg(test)]
mod tests;
