//! Declarative scoring rules.
//!
//! A [`ScoringCriterion`] pairs a logical profile section with an evaluation
//! strategy ([`CriterionKind`]) and the points it can award. Criteria carry no
//! behaviour; evaluators live in the scorer crate and are selected by kind.
//!
//! # Examples
//! ```
//! use profile_score_core::{CriterionKind, ScoringCriterion};
//!
//! let rule = ScoringCriterion::word_count_min("headline", "Headline", 10, 10);
//! assert_eq!(rule.kind, CriterionKind::WordCountMin);
//! assert_eq!(rule.params.min, Some(10));
//! assert_eq!(rule.field_key().to_string(), "headline");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Evaluation strategy applied to a resolved profile value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CriterionKind {
    /// Full points when the resolved value is non-empty.
    Presence,
    /// Full points when the profile URL ends in a customized handle.
    UrlCustomization,
    /// Points proportional to a minimum number of words.
    WordCountMin,
    /// Points proportional to a minimum number of items.
    ArrayLengthMin,
    /// Two points per matched keyword, capped at the maximum.
    KeywordMatch,
    /// Full points when the text contains an email address.
    EmailPresence,
}

impl CriterionKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Presence,
        Self::UrlCustomization,
        Self::WordCountMin,
        Self::ArrayLengthMin,
        Self::KeywordMatch,
        Self::EmailPresence,
    ];

    /// Return the stable machine-readable key for the kind.
    ///
    /// # Examples
    /// ```
    /// use profile_score_core::CriterionKind;
    ///
    /// assert_eq!(CriterionKind::WordCountMin.as_str(), "wordCountMin");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Presence => "presence",
            Self::UrlCustomization => "urlCustomization",
            Self::WordCountMin => "wordCountMin",
            Self::ArrayLengthMin => "arrayLengthMin",
            Self::KeywordMatch => "keywordMatch",
            Self::EmailPresence => "emailPresence",
        }
    }

    /// Report whether the kind awards partial credit against `params.min`.
    #[must_use]
    pub const fn requires_threshold(self) -> bool {
        matches!(self, Self::WordCountMin | Self::ArrayLengthMin)
    }

    /// Report whether the kind matches against `params.keywords`.
    #[must_use]
    pub const fn requires_keywords(self) -> bool {
        matches!(self, Self::KeywordMatch)
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriterionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown criterion kind '{s}'"))
    }
}

/// Optional parameters refining how a criterion is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriterionParams {
    /// Threshold for word and item counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    /// Lower-case terms searched for by keyword criteria.
    #[serde(skip_serializing_if = "no_keywords")]
    pub keywords: &'static [&'static str],
    /// Sub-field of the section the criterion inspects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<&'static str>,
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde passes skip predicates by reference"
)]
const fn no_keywords(keywords: &&'static [&'static str]) -> bool {
    keywords.is_empty()
}

impl CriterionParams {
    /// Parameters for kinds that need no configuration.
    pub const NONE: Self = Self {
        min: None,
        keywords: &[],
        focus: None,
    };
}

impl Default for CriterionParams {
    fn default() -> Self {
        Self::NONE
    }
}

/// A single scoring rule: one measurable check against profile data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringCriterion {
    /// Logical profile section, e.g. `headline`.
    pub section: &'static str,
    /// English display name used when rendering titles.
    pub label: &'static str,
    /// Evaluation strategy.
    pub kind: CriterionKind,
    /// Points awarded when the criterion is fully satisfied.
    pub max_score: u32,
    /// Strategy-specific parameters.
    pub params: CriterionParams,
}

impl ScoringCriterion {
    const fn bare(
        section: &'static str,
        label: &'static str,
        kind: CriterionKind,
        max_score: u32,
    ) -> Self {
        Self {
            section,
            label,
            kind,
            max_score,
            params: CriterionParams::NONE,
        }
    }

    /// Award `max_score` when the section holds any data.
    #[must_use]
    pub const fn presence(section: &'static str, label: &'static str, max_score: u32) -> Self {
        Self::bare(section, label, CriterionKind::Presence, max_score)
    }

    /// Award `max_score` when the profile URL handle does not end in digits.
    #[must_use]
    pub const fn url_customization(
        section: &'static str,
        label: &'static str,
        max_score: u32,
    ) -> Self {
        Self::bare(section, label, CriterionKind::UrlCustomization, max_score)
    }

    /// Award up to `max_score` for text reaching `min` words.
    #[must_use]
    pub const fn word_count_min(
        section: &'static str,
        label: &'static str,
        min: u32,
        max_score: u32,
    ) -> Self {
        Self::bare(section, label, CriterionKind::WordCountMin, max_score).with_min(min)
    }

    /// Award up to `max_score` for lists reaching `min` items.
    #[must_use]
    pub const fn array_length_min(
        section: &'static str,
        label: &'static str,
        min: u32,
        max_score: u32,
    ) -> Self {
        Self::bare(section, label, CriterionKind::ArrayLengthMin, max_score).with_min(min)
    }

    /// Award two points per keyword found, up to `max_score`.
    #[must_use]
    pub const fn keyword_match(
        section: &'static str,
        label: &'static str,
        keywords: &'static [&'static str],
        max_score: u32,
    ) -> Self {
        let mut criterion = Self::bare(section, label, CriterionKind::KeywordMatch, max_score);
        criterion.params.keywords = keywords;
        criterion
    }

    /// Award `max_score` when the text contains an email address.
    #[must_use]
    pub const fn email_presence(
        section: &'static str,
        label: &'static str,
        max_score: u32,
    ) -> Self {
        Self::bare(section, label, CriterionKind::EmailPresence, max_score)
    }

    /// Narrow the criterion to a sub-field of its section.
    #[must_use]
    pub const fn with_focus(mut self, focus: &'static str) -> Self {
        self.params.focus = Some(focus);
        self
    }

    const fn with_min(mut self, min: u32) -> Self {
        self.params.min = Some(min);
        self
    }

    /// Key used to look the criterion's value up in the field resolver.
    #[must_use]
    pub const fn field_key(&self) -> FieldKey<'static> {
        FieldKey {
            section: self.section,
            focus: self.params.focus,
        }
    }
}

/// Lookup key for the field resolver: a section plus an optional focus.
///
/// Displays as `section` or `section.focus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey<'a> {
    /// Logical section name.
    pub section: &'a str,
    /// Optional sub-field within the section.
    pub focus: Option<&'a str>,
}

impl<'a> FieldKey<'a> {
    /// Key addressing a whole section.
    #[must_use]
    pub const fn section(section: &'a str) -> Self {
        Self {
            section,
            focus: None,
        }
    }

    /// Key addressing a sub-field of a section.
    #[must_use]
    pub const fn focused(section: &'a str, focus: &'a str) -> Self {
        Self {
            section,
            focus: Some(focus),
        }
    }
}

impl fmt::Display for FieldKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.focus {
            Some(focus) => write!(f, "{}.{focus}", self.section),
            None => f.write_str(self.section),
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests should fail fast when fixtures are malformed"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("presence", CriterionKind::Presence)]
    #[case("urlCustomization", CriterionKind::UrlCustomization)]
    #[case("WORDCOUNTMIN", CriterionKind::WordCountMin)]
    #[case(" arrayLengthMin ", CriterionKind::ArrayLengthMin)]
    fn kinds_parse_from_their_keys(#[case] raw: &str, #[case] expected: CriterionKind) {
        assert_eq!(raw.parse::<CriterionKind>(), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown_kinds() {
        let err = "vibes".parse::<CriterionKind>().unwrap_err();
        assert!(err.contains("unknown criterion kind"));
    }

    #[rstest]
    fn kind_display_matches_serde_key() {
        for kind in CriterionKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.to_string()));
        }
    }

    #[rstest]
    fn focused_criteria_expose_dotted_keys() {
        let rule = ScoringCriterion::presence("experiences", "Experience descriptions", 10)
            .with_focus("description");
        assert_eq!(rule.field_key(), FieldKey::focused("experiences", "description"));
        assert_eq!(rule.field_key().to_string(), "experiences.description");
    }

    #[rstest]
    fn serialised_criteria_omit_unused_params() {
        let rule = ScoringCriterion::presence("country", "Country", 5);
        let json = serde_json::to_value(rule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "section": "country",
                "label": "Country",
                "kind": "presence",
                "maxScore": 5,
                "params": {}
            })
        );
    }
}
