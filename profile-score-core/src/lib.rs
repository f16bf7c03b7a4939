//! Core domain types for the profile score engine.
//!
//! The crate defines the declarative side of scoring: the criteria a profile
//! is judged against ([`ScoringCriterion`], [`CriteriaRegistry`]), the input
//! records a scorer reads through [`FieldSource`], and the immutable report
//! types ([`ProfileScore`], [`SectionScore`], [`CriterionResult`]) that a
//! scorer produces. Evaluation itself lives in `profile-score-scorer`.
//!
//! # Examples
//!
//! ```
//! use profile_score_core::{CriteriaRegistry, Grade, percentage};
//!
//! let registry = CriteriaRegistry::standard();
//! let pct = percentage(59, registry.max_total_score());
//! assert_eq!(pct, 50);
//! assert_eq!(Grade::from_percentage(pct), Grade::CMinus);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod criterion;
mod error;
mod grade;
mod profile;
mod registry;
mod report;

pub use criterion::{CriterionKind, CriterionParams, FieldKey, ScoringCriterion};
pub use error::RegistryError;
pub use grade::{Grade, percentage};
pub use profile::{FieldSource, NormalizedProfile, ProfileData, ProfileSchema, ScrapedProfile};
pub use registry::{CriteriaRegistry, HEADLINE_KEYWORDS, STANDARD_CRITERIA};
pub use report::{CriterionResult, Measurement, ProfileScore, SectionScore};
