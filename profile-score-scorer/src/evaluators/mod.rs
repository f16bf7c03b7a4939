//! Pure evaluation strategies, one per [`CriterionKind`].
//!
//! Evaluators take a criterion and the value the resolver found for it and
//! return the points awarded alongside a [`Measurement`]. They never panic
//! and never award more than the criterion's maximum; anything they cannot
//! interpret scores zero as [`Measurement::Absent`].

mod collection;
mod text;

use profile_score_core::{CriterionKind, Measurement, ScoringCriterion};

use crate::resolver::ResolvedValue;

pub use collection::{array_length_min, presence};
pub use text::{email_presence, keyword_match, url_customization, word_count_min};

/// Outcome of applying one criterion to one resolved value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Points awarded, never above the criterion's maximum.
    pub point: u32,
    /// What the evaluator observed.
    pub measurement: Measurement,
}

impl Evaluation {
    /// Zero points for a value that could not be used.
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            point: 0,
            measurement: Measurement::Absent,
        }
    }
}

/// Signature shared by every evaluation strategy.
pub type Evaluator = fn(&ScoringCriterion, &ResolvedValue<'_>) -> Evaluation;

const EVALUATORS: [(CriterionKind, Evaluator); 6] = [
    (CriterionKind::Presence, presence),
    (CriterionKind::UrlCustomization, url_customization),
    (CriterionKind::WordCountMin, word_count_min),
    (CriterionKind::ArrayLengthMin, array_length_min),
    (CriterionKind::KeywordMatch, keyword_match),
    (CriterionKind::EmailPresence, email_presence),
];

/// Look up the evaluator registered for `kind`.
#[must_use]
pub fn evaluator_for(kind: CriterionKind) -> Option<Evaluator> {
    EVALUATORS
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .map(|(_, evaluator)| *evaluator)
}

/// Apply the evaluator for `criterion.kind`.
///
/// Returns `None` only when no evaluator is registered for the kind.
///
/// # Examples
/// ```
/// use profile_score_core::ScoringCriterion;
/// use profile_score_scorer::{ResolvedValue, evaluate};
///
/// let rule = ScoringCriterion::word_count_min("headline", "Headline", 10, 10);
/// let outcome = evaluate(&rule, &ResolvedValue::Text("Senior Software Engineer, Payments"));
/// assert_eq!(outcome.map(|evaluation| evaluation.point), Some(4));
/// ```
#[must_use]
pub fn evaluate(criterion: &ScoringCriterion, resolved: &ResolvedValue<'_>) -> Option<Evaluation> {
    let evaluator = evaluator_for(criterion.kind)?;
    let evaluation = evaluator(criterion, resolved);
    Some(Evaluation {
        point: evaluation.point.min(criterion.max_score),
        measurement: evaluation.measurement,
    })
}

/// Award full marks at or above `min`, otherwise `round(count / min * max)`.
///
/// Rounding is half-up and the result is clamped into `0..=max`.
///
/// # Examples
/// ```
/// use profile_score_scorer::partial_credit;
///
/// assert_eq!(partial_credit(4, 10, 10), 4);
/// assert_eq!(partial_credit(5, 3, 15), 15);
/// assert_eq!(partial_credit(1, 8, 20), 3);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "partial credit is rounded and clamped into 0..=max before narrowing"
)]
pub fn partial_credit(count: u64, min: u32, max: u32) -> u32 {
    if count >= u64::from(min) {
        return max;
    }
    // Below the threshold, so `count` fits in a `u32`.
    let Ok(below) = u32::try_from(count) else {
        return max;
    };
    let scaled = f64::from(below) / f64::from(min) * f64::from(max);
    scaled.round().clamp(0.0, f64::from(max)) as u32
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
