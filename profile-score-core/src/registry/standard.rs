//! The canonical profile rubric.
//!
//! Section order here fixes the order of sections in every report.

use crate::ScoringCriterion;

/// Role and seniority terms rewarded in headlines.
pub const HEADLINE_KEYWORDS: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "head",
    "manager",
    "director",
    "engineer",
    "developer",
    "architect",
    "consultant",
    "specialist",
    "analyst",
    "founder",
    "expert",
];

/// Canonical criteria, in report order. The maximum total is 118 points.
pub const STANDARD_CRITERIA: &[ScoringCriterion] = &[
    ScoringCriterion::url_customization("linkedInUrl", "Profile URL", 5),
    ScoringCriterion::presence("country", "Country", 5),
    ScoringCriterion::word_count_min("headline", "Headline", 10, 10),
    ScoringCriterion::keyword_match("headline", "Headline", HEADLINE_KEYWORDS, 10),
    ScoringCriterion::word_count_min("summary", "Summary", 200, 20),
    ScoringCriterion::email_presence("summary", "Summary", 10),
    ScoringCriterion::presence("experiences", "Experience descriptions", 10)
        .with_focus("description"),
    ScoringCriterion::array_length_min("experiences", "Experience", 3, 10),
    ScoringCriterion::presence("education", "Education", 10),
    ScoringCriterion::array_length_min("skills", "Skills", 3, 15),
    ScoringCriterion::array_length_min("publications", "Publications", 1, 1),
    ScoringCriterion::array_length_min("languages", "Languages", 1, 1),
    ScoringCriterion::array_length_min("certificates", "Certificates", 1, 1),
    ScoringCriterion::array_length_min("honorsAwards", "Honors & awards", 1, 1),
    ScoringCriterion::array_length_min("volunteer", "Volunteer experience", 1, 1),
    ScoringCriterion::array_length_min("patents", "Patents", 1, 1),
    ScoringCriterion::array_length_min("testScores", "Test scores", 1, 1),
    ScoringCriterion::array_length_min("organizations", "Organizations", 1, 1),
    ScoringCriterion::array_length_min("featured", "Featured", 1, 1),
    ScoringCriterion::array_length_min("recommendations", "Recommendations", 1, 1),
    ScoringCriterion::array_length_min("causes", "Causes", 1, 1),
    ScoringCriterion::presence("projects", "Projects", 1),
    ScoringCriterion::presence("contactInfo", "Contact info", 1),
];

const _: () = assert!(
    super::first_defect(STANDARD_CRITERIA).is_none(),
    "standard criteria must be well formed"
);
