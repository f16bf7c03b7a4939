//! Facade crate for the profile scoring engine.
//!
//! This crate re-exports the rubric model from `profile-score-core` and the
//! scoring engine from `profile-score-scorer`, so callers can depend on a
//! single crate.
//!
//! # Examples
//! ```
//! use profile_score::{Grade, score};
//! use serde_json::json;
//!
//! let report = score(&json!({}));
//! assert_eq!(report.total_score(), 0);
//! assert_eq!(report.max_total_score(), 118);
//! assert_eq!(report.grade(), Grade::F);
//! ```

#![forbid(unsafe_code)]

pub use profile_score_core::{
    CriteriaRegistry, CriterionKind, CriterionParams, CriterionResult, FieldKey, FieldSource,
    Grade, Measurement, NormalizedProfile, ProfileData, ProfileSchema, ProfileScore,
    RegistryError, ScoringCriterion, ScrapedProfile, SectionScore, percentage,
};
pub use profile_score_scorer::{
    EnglishTitles, FieldResolver, ResolvedValue, RubricScorer, ScorerError, TitleRenderer, score,
};
