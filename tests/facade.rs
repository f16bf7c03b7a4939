//! Smoke tests for the facade re-exports.

use profile_score::{
    CriteriaRegistry, Grade, NormalizedProfile, ProfileData, ProfileSchema, RubricScorer, score,
};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn facade_scores_typed_and_raw_profiles_alike() {
    let typed = NormalizedProfile::new()
        .with_field("country", "Jordan")
        .with_field("skillsCount", 3);
    let raw = ProfileData::from(json!({ "geoCountryName": "Jordan", "skills": ["a", "b", "c"] }));

    assert_eq!(raw.schema(), ProfileSchema::Scraped);
    assert_eq!(score(&typed), score(&raw));
    assert_eq!(score(&raw).total_score(), 20);
}

#[rstest]
fn facade_exposes_the_standard_scorer() {
    let scorer = RubricScorer::standard();
    assert_eq!(scorer.registry(), CriteriaRegistry::standard());
    assert_eq!(scorer.score(&json!({})).grade(), Grade::F);
}
