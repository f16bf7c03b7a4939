//! Section and profile aggregation.

use profile_score_core::{FieldSource, ProfileScore, ScoringCriterion, SectionScore};

use crate::{RubricScorer, TitleRenderer};

impl<T: TitleRenderer> RubricScorer<'_, T> {
    /// Evaluate `criteria` against `profile` and sum them into a section.
    ///
    /// Returns `None` when `criteria` is empty; such sections are left out
    /// of reports rather than shown as zero.
    #[must_use]
    pub fn aggregate_section<'c, S, I>(
        &self,
        section: &str,
        criteria: I,
        profile: &S,
    ) -> Option<SectionScore>
    where
        S: FieldSource + ?Sized,
        I: IntoIterator<Item = &'c ScoringCriterion>,
    {
        let results = criteria
            .into_iter()
            .map(|criterion| self.evaluate_criterion(criterion, profile))
            .collect();
        let aggregated = SectionScore::from_criteria(section, results)?;
        log::debug!(
            "section {section} scored {}/{}",
            aggregated.score(),
            aggregated.max_possible_points()
        );
        Some(aggregated)
    }

    /// Score `profile` across every registry section, in registry order.
    ///
    /// # Examples
    /// ```
    /// use profile_score_scorer::RubricScorer;
    /// use serde_json::json;
    ///
    /// let scorer = RubricScorer::standard();
    /// let report = scorer.score(&json!({ "country": "Jordan" }));
    /// assert_eq!(report.total_score(), 5);
    /// assert_eq!(report.max_total_score(), 118);
    /// assert_eq!(report.section_scores().len(), 20);
    /// ```
    #[must_use]
    pub fn score<S>(&self, profile: &S) -> ProfileScore
    where
        S: FieldSource + ?Sized,
    {
        let registry = self.registry();
        let sections = registry
            .sections()
            .into_iter()
            .filter_map(|section| {
                self.aggregate_section(section, registry.for_section(section), profile)
            })
            .collect();
        let report = ProfileScore::from_sections(sections);
        log::debug!(
            "profile scored {}/{} ({}%, {})",
            report.total_score(),
            report.max_total_score(),
            report.percentage(),
            report.grade()
        );
        report
    }
}
