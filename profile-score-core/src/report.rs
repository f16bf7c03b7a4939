//! Score report types.
//!
//! Reports are built bottom-up: criterion results are grouped into
//! [`SectionScore`]s, which are summed into a [`ProfileScore`]. Constructors
//! derive every total from its parts, so the sums always agree. Fields are
//! read through accessors; a report is never mutated once built.

use serde::{Deserialize, Serialize};

use crate::{CriterionKind, Grade, percentage};

/// Locale-independent record of what an evaluator observed.
///
/// Presentation layers phrase titles from this rather than parsing the
/// English title text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Measurement {
    /// No usable value was found for the criterion.
    Absent,
    /// Whether the resolved value held any data.
    Presence {
        /// `true` when the value was non-empty.
        present: bool,
    },
    /// Trailing handle of the profile URL.
    Url {
        /// Final path segment of the URL.
        handle: String,
        /// `true` when the handle does not end in digits.
        customized: bool,
    },
    /// Word count against a threshold.
    #[serde(rename_all = "camelCase")]
    Words {
        /// Whitespace-separated tokens found.
        count: u32,
        /// Threshold for full credit.
        min: u32,
    },
    /// Item count against a threshold.
    #[serde(rename_all = "camelCase")]
    Items {
        /// Items found.
        count: u32,
        /// Threshold for full credit.
        min: u32,
    },
    /// Keywords found in the text.
    Keywords {
        /// Matched keywords, in registry order.
        matched: Vec<String>,
    },
    /// Whether the text contained an email address.
    Email {
        /// `true` when an address was found.
        found: bool,
    },
}

/// Points awarded by one criterion, with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionResult {
    section: String,
    kind: CriterionKind,
    title: String,
    point: u32,
    max_possible_points: u32,
    measurement: Measurement,
}

impl CriterionResult {
    /// Build a result, clamping `point` into `0..=max_possible_points`.
    #[must_use]
    pub fn new(
        section: impl Into<String>,
        kind: CriterionKind,
        title: impl Into<String>,
        point: u32,
        max_possible_points: u32,
        measurement: Measurement,
    ) -> Self {
        Self {
            section: section.into(),
            kind,
            title: title.into(),
            point: point.min(max_possible_points),
            max_possible_points,
            measurement,
        }
    }

    /// Section the criterion belongs to.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Kind of the criterion that produced this result.
    #[must_use]
    pub const fn kind(&self) -> CriterionKind {
        self.kind
    }

    /// Human-readable explanation, e.g. `"Headline: 6 words (min: 10)"`.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Points awarded.
    #[must_use]
    pub const fn point(&self) -> u32 {
        self.point
    }

    /// Points available.
    #[must_use]
    pub const fn max_possible_points(&self) -> u32 {
        self.max_possible_points
    }

    /// Structured observation behind the title.
    #[must_use]
    pub const fn measurement(&self) -> &Measurement {
        &self.measurement
    }
}

/// Aggregated points for one profile section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScore {
    section: String,
    score: u32,
    max_possible_points: u32,
    criteria: Vec<CriterionResult>,
}

impl SectionScore {
    /// Sum `criteria` into a section score.
    ///
    /// Returns `None` when `criteria` is empty; sections without criteria are
    /// left out of reports.
    #[must_use]
    pub fn from_criteria(section: impl Into<String>, criteria: Vec<CriterionResult>) -> Option<Self> {
        if criteria.is_empty() {
            return None;
        }
        let score = criteria
            .iter()
            .fold(0_u32, |sum, result| sum.saturating_add(result.point));
        let max_possible_points = criteria
            .iter()
            .fold(0_u32, |sum, result| sum.saturating_add(result.max_possible_points));
        Some(Self {
            section: section.into(),
            score,
            max_possible_points,
            criteria,
        })
    }

    /// Section name.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Points awarded across the section.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Points available across the section.
    #[must_use]
    pub const fn max_possible_points(&self) -> u32 {
        self.max_possible_points
    }

    /// Per-criterion detail, in registry order.
    #[must_use]
    pub fn criteria(&self) -> &[CriterionResult] {
        &self.criteria
    }
}

/// Overall score report for one profile snapshot.
///
/// # Examples
/// ```
/// use profile_score_core::{CriterionKind, CriterionResult, Grade, Measurement, ProfileScore, SectionScore};
///
/// let result = CriterionResult::new(
///     "country",
///     CriterionKind::Presence,
///     "Country: present",
///     5,
///     5,
///     Measurement::Presence { present: true },
/// );
/// let section = SectionScore::from_criteria("country", vec![result]).unwrap();
/// let report = ProfileScore::from_sections(vec![section]);
/// assert_eq!(report.percentage(), 100);
/// assert_eq!(report.grade(), Grade::APlus);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileScore {
    total_score: u32,
    max_total_score: u32,
    percentage: u32,
    grade: Grade,
    section_scores: Vec<SectionScore>,
}

impl ProfileScore {
    /// Sum section scores, then derive the percentage and grade.
    #[must_use]
    pub fn from_sections(section_scores: Vec<SectionScore>) -> Self {
        let total_score = section_scores
            .iter()
            .fold(0_u32, |sum, section| sum.saturating_add(section.score));
        let max_total_score = section_scores
            .iter()
            .fold(0_u32, |sum, section| sum.saturating_add(section.max_possible_points));
        let percentage = percentage(total_score, max_total_score);
        Self {
            total_score,
            max_total_score,
            percentage,
            grade: Grade::from_percentage(percentage),
            section_scores,
        }
    }

    /// Points awarded across all sections.
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Points available across all sections.
    #[must_use]
    pub const fn max_total_score(&self) -> u32 {
        self.max_total_score
    }

    /// Rounded overall percentage in `0..=100`.
    #[must_use]
    pub const fn percentage(&self) -> u32 {
        self.percentage
    }

    /// Letter grade for the percentage.
    #[must_use]
    pub const fn grade(&self) -> Grade {
        self.grade
    }

    /// Section breakdown, in registry order.
    #[must_use]
    pub fn section_scores(&self) -> &[SectionScore] {
        &self.section_scores
    }

    /// Look up a section by name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&SectionScore> {
        self.section_scores
            .iter()
            .find(|section| section.section == name)
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests should fail fast when fixtures are malformed"
)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::Value;

    fn result(point: u32, max: u32) -> CriterionResult {
        CriterionResult::new(
            "skills",
            CriterionKind::ArrayLengthMin,
            "Skills",
            point,
            max,
            Measurement::Absent,
        )
    }

    #[fixture]
    fn sections() -> Vec<SectionScore> {
        vec![
            SectionScore::from_criteria("skills", vec![result(10, 15)]).unwrap(),
            SectionScore::from_criteria("headline", vec![result(4, 10), result(2, 10)]).unwrap(),
        ]
    }

    #[rstest]
    fn results_clamp_points_to_their_maximum() {
        assert_eq!(result(25, 15).point(), 15);
    }

    #[rstest]
    fn sections_sum_their_criteria() {
        let section =
            SectionScore::from_criteria("headline", vec![result(4, 10), result(2, 10)]).unwrap();
        assert_eq!(section.score(), 6);
        assert_eq!(section.max_possible_points(), 20);
        assert_eq!(section.criteria().len(), 2);
    }

    #[rstest]
    fn sections_without_criteria_are_omitted() {
        assert!(SectionScore::from_criteria("ghost", Vec::new()).is_none());
    }

    #[rstest]
    fn profile_totals_sum_sections(sections: Vec<SectionScore>) {
        let report = ProfileScore::from_sections(sections);
        assert_eq!(report.total_score(), 16);
        assert_eq!(report.max_total_score(), 35);
        assert_eq!(report.percentage(), 46);
        assert_eq!(report.grade(), Grade::DPlus);
        assert_eq!(report.section("skills").map(SectionScore::score), Some(10));
        assert!(report.section("summary").is_none());
    }

    #[rstest]
    fn empty_reports_grade_as_f() {
        let report = ProfileScore::from_sections(Vec::new());
        assert_eq!(report.percentage(), 0);
        assert_eq!(report.grade(), Grade::F);
    }

    #[rstest]
    fn reports_serialise_with_camel_case_keys(sections: Vec<SectionScore>) {
        let json = serde_json::to_value(ProfileScore::from_sections(sections)).unwrap();
        assert_eq!(json.get("totalScore"), Some(&Value::from(16)));
        assert_eq!(json.get("maxTotalScore"), Some(&Value::from(35)));
        assert_eq!(json.get("grade"), Some(&Value::from("D+")));
        assert_eq!(
            json.pointer("/sectionScores/0/maxPossiblePoints"),
            Some(&Value::from(15))
        );
        assert_eq!(
            json.pointer("/sectionScores/0/criteria/0/measurement"),
            Some(&serde_json::json!({ "type": "absent" }))
        );
    }
}
