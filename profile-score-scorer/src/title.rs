//! Human-readable explanations for criterion results.
//!
//! Titles are phrased from the structured [`Measurement`], never parsed back.
//! [`EnglishTitles`] produces the wording shown in reports; presentation
//! layers with other locales supply their own [`TitleRenderer`].

use profile_score_core::{CriterionKind, Measurement, ScoringCriterion};

/// Phrase the explanation for one criterion result.
///
/// Closures with the matching signature implement the trait.
///
/// # Examples
/// ```
/// use profile_score_core::{Measurement, ScoringCriterion};
/// use profile_score_scorer::TitleRenderer;
///
/// let terse = |criterion: &ScoringCriterion, _: &Measurement| criterion.section.to_owned();
/// let rule = ScoringCriterion::presence("country", "Country", 5);
/// assert_eq!(terse.render(&rule, &Measurement::Absent), "country");
/// ```
pub trait TitleRenderer {
    /// Render the title for `criterion` given what was measured.
    fn render(&self, criterion: &ScoringCriterion, measurement: &Measurement) -> String;
}

impl<F> TitleRenderer for F
where
    F: Fn(&ScoringCriterion, &Measurement) -> String,
{
    fn render(&self, criterion: &ScoringCriterion, measurement: &Measurement) -> String {
        self(criterion, measurement)
    }
}

/// English report wording, e.g. `"Headline: 6 words (min: 10)"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishTitles;

impl TitleRenderer for EnglishTitles {
    fn render(&self, criterion: &ScoringCriterion, measurement: &Measurement) -> String {
        let label = criterion.label;
        match measurement {
            Measurement::Absent => missing(criterion),
            Measurement::Presence { present: true } => format!("{label}: present"),
            Measurement::Presence { present: false } => format!("{label}: missing"),
            Measurement::Url {
                customized: true, ..
            } => format!("{label}: customized"),
            Measurement::Url {
                customized: false, ..
            } => format!("{label}: not customized (ends in digits)"),
            Measurement::Words { count, min } => {
                format!("{label}: {count} {} (min: {min})", plural(*count, "word"))
            }
            Measurement::Items { count, min } => {
                format!("{label}: {count} {} (min: {min})", plural(*count, "item"))
            }
            Measurement::Keywords { matched } => {
                let count = matched.len();
                let noun = if count == 1 { "keyword" } else { "keywords" };
                format!("{label}: {count} {noun} matched")
            }
            Measurement::Email { found: true } => format!("{label}: email found"),
            Measurement::Email { found: false } => format!("{label}: no email found"),
        }
    }
}

fn missing(criterion: &ScoringCriterion) -> String {
    let label = criterion.label;
    match (criterion.kind, criterion.params.min) {
        (CriterionKind::WordCountMin, Some(min)) => format!("{label}: missing (min: {min} words)"),
        (CriterionKind::ArrayLengthMin, Some(min)) => {
            format!("{label}: missing (min: {min} items)")
        }
        _ => format!("{label}: missing"),
    }
}

fn plural(count: u32, noun: &str) -> String {
    if count == 1 {
        noun.to_owned()
    } else {
        format!("{noun}s")
    }
}
