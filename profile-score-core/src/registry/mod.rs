//! Ordered, read-only collections of scoring criteria.
//!
//! The standard registry is a `const` slice checked at compile time, so it is
//! frozen before any profile is scored. Custom registries go through
//! [`CriteriaRegistry::new`], which rejects malformed criteria up front.

mod standard;

use std::borrow::Cow;

use crate::{CriterionKind, RegistryError, ScoringCriterion};

pub use standard::{HEADLINE_KEYWORDS, STANDARD_CRITERIA};

static STANDARD_REGISTRY: CriteriaRegistry = CriteriaRegistry {
    criteria: Cow::Borrowed(STANDARD_CRITERIA),
};

/// Ordered list of scoring criteria.
///
/// # Examples
/// ```
/// use profile_score_core::CriteriaRegistry;
///
/// let registry = CriteriaRegistry::standard();
/// assert_eq!(registry.max_total_score(), 118);
/// assert_eq!(registry.sections().first(), Some(&"linkedInUrl"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaRegistry {
    criteria: Cow<'static, [ScoringCriterion]>,
}

impl CriteriaRegistry {
    /// Validate and construct a custom registry.
    ///
    /// # Errors
    /// Returns [`RegistryError`] when the list is empty or any criterion is
    /// malformed.
    ///
    /// # Examples
    /// ```
    /// use profile_score_core::{CriteriaRegistry, RegistryError, ScoringCriterion};
    ///
    /// let ok = CriteriaRegistry::new(vec![ScoringCriterion::presence("country", "Country", 5)]);
    /// assert!(ok.is_ok());
    ///
    /// let err = CriteriaRegistry::new(vec![ScoringCriterion::presence("country", "Country", 0)]);
    /// assert!(matches!(err, Err(RegistryError::ZeroMaxScore { .. })));
    /// ```
    pub fn new(criteria: Vec<ScoringCriterion>) -> Result<Self, RegistryError> {
        if criteria.is_empty() {
            return Err(RegistryError::Empty);
        }
        if let Some((index, defect)) = first_defect(&criteria) {
            return Err(defect.into_error(index, criteria.get(index)));
        }
        Ok(Self {
            criteria: Cow::Owned(criteria),
        })
    }

    /// Return the canonical profile rubric.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_REGISTRY
    }

    /// All criteria in registry order.
    #[must_use]
    pub fn criteria(&self) -> &[ScoringCriterion] {
        &self.criteria
    }

    /// Distinct section names in order of first appearance.
    #[must_use]
    pub fn sections(&self) -> Vec<&'static str> {
        let mut sections: Vec<&'static str> = Vec::new();
        for criterion in self.criteria.iter() {
            if !sections.contains(&criterion.section) {
                sections.push(criterion.section);
            }
        }
        sections
    }

    /// Criteria scoring `section`, in registry order.
    pub fn for_section<'a>(
        &'a self,
        section: &'a str,
    ) -> impl Iterator<Item = &'a ScoringCriterion> + 'a {
        self.criteria
            .iter()
            .filter(move |criterion| criterion.section == section)
    }

    /// Sum of every criterion's maximum score.
    #[must_use]
    pub fn max_total_score(&self) -> u32 {
        self.criteria
            .iter()
            .fold(0_u32, |total, criterion| total.saturating_add(criterion.max_score))
    }

    /// Number of criteria.
    #[must_use]
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Report whether the registry holds no criteria.
    ///
    /// Always `false` for registries built through [`CriteriaRegistry::new`]
    /// or [`CriteriaRegistry::standard`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CriterionDefect {
    EmptySection,
    ZeroMaxScore,
    MissingThreshold,
    MissingKeywords,
}

impl CriterionDefect {
    fn into_error(self, index: usize, criterion: Option<&ScoringCriterion>) -> RegistryError {
        let (section, kind) = criterion.map_or((String::new(), CriterionKind::Presence), |c| {
            (c.section.to_owned(), c.kind)
        });
        match self {
            Self::EmptySection => RegistryError::EmptySection { index, kind },
            Self::ZeroMaxScore => RegistryError::ZeroMaxScore { section, kind },
            Self::MissingThreshold => RegistryError::MissingThreshold { section, kind },
            Self::MissingKeywords => RegistryError::MissingKeywords { section, kind },
        }
    }
}

const fn defect(criterion: &ScoringCriterion) -> Option<CriterionDefect> {
    if criterion.section.is_empty() {
        return Some(CriterionDefect::EmptySection);
    }
    if criterion.max_score == 0 {
        return Some(CriterionDefect::ZeroMaxScore);
    }
    if criterion.kind.requires_threshold() {
        match criterion.params.min {
            Some(min) if min > 0 => {}
            _ => return Some(CriterionDefect::MissingThreshold),
        }
    }
    if criterion.kind.requires_keywords() && criterion.params.keywords.is_empty() {
        return Some(CriterionDefect::MissingKeywords);
    }
    None
}

/// Locate the first malformed criterion. Usable in `const` context.
pub(crate) const fn first_defect(
    criteria: &[ScoringCriterion],
) -> Option<(usize, CriterionDefect)> {
    let mut rest = criteria;
    let mut index = 0;
    while let [head, tail @ ..] = rest {
        if let Some(found) = defect(head) {
            return Some((index, found));
        }
        rest = tail;
        index += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn standard_registry_is_well_formed() {
        let registry = CriteriaRegistry::standard();
        assert_eq!(registry.len(), 23);
        assert!(first_defect(registry.criteria()).is_none());
        assert_eq!(registry.max_total_score(), 118);
    }

    #[rstest]
    fn sections_follow_first_appearance_order() {
        let sections = CriteriaRegistry::standard().sections();
        assert_eq!(sections.len(), 20);
        assert_eq!(
            sections.get(..5),
            Some(&["linkedInUrl", "country", "headline", "summary", "experiences"][..])
        );
        assert_eq!(sections.last(), Some(&"contactInfo"));
    }

    #[rstest]
    fn for_section_returns_every_rule_for_a_section() {
        let headline: Vec<_> = CriteriaRegistry::standard()
            .for_section("headline")
            .map(|criterion| criterion.kind)
            .collect();
        assert_eq!(
            headline,
            vec![CriterionKind::WordCountMin, CriterionKind::KeywordMatch]
        );
    }

    #[rstest]
    fn empty_registries_are_rejected() {
        assert_eq!(CriteriaRegistry::new(Vec::new()), Err(RegistryError::Empty));
    }

    #[rstest]
    #[case(
        ScoringCriterion::presence("", "Nameless", 1),
        RegistryError::EmptySection { index: 1, kind: CriterionKind::Presence }
    )]
    #[case(
        ScoringCriterion::array_length_min("skills", "Skills", 3, 0),
        RegistryError::ZeroMaxScore { section: "skills".into(), kind: CriterionKind::ArrayLengthMin }
    )]
    #[case(
        ScoringCriterion::word_count_min("summary", "Summary", 0, 20),
        RegistryError::MissingThreshold { section: "summary".into(), kind: CriterionKind::WordCountMin }
    )]
    #[case(
        ScoringCriterion::keyword_match("headline", "Headline", &[], 10),
        RegistryError::MissingKeywords { section: "headline".into(), kind: CriterionKind::KeywordMatch }
    )]
    fn malformed_criteria_are_rejected(
        #[case] broken: ScoringCriterion,
        #[case] expected: RegistryError,
    ) {
        let criteria = vec![ScoringCriterion::presence("country", "Country", 5), broken];
        assert_eq!(CriteriaRegistry::new(criteria), Err(expected));
    }

    #[rstest]
    fn threshold_kinds_without_min_are_rejected() {
        let mut rule = ScoringCriterion::array_length_min("skills", "Skills", 3, 15);
        rule.params.min = None;
        assert!(matches!(
            CriteriaRegistry::new(vec![rule]),
            Err(RegistryError::MissingThreshold { .. })
        ));
    }
}
