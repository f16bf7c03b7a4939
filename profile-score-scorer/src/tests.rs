//! Unit coverage for scoring whole profiles.
#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

use profile_score_core::{
    CriteriaRegistry, CriterionKind, CriterionResult, FieldKey, Grade, Measurement,
    NormalizedProfile, ProfileData, ProfileSchema, ProfileScore, ScoringCriterion, SectionScore,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use crate::{FieldResolver, RubricScorer, ScorerError, score};

const HEADLINE: &str = "Senior Backend Engineer and Technical Lead for distributed payment systems";

fn summary() -> String {
    format!("{}Reach me at jane@example.com.", "word ".repeat(196))
}

#[fixture]
fn scraped() -> Value {
    json!({
        "publicIdentifier": "jane-doe",
        "geoCountryName": "Jordan",
        "followersCount": 812,
        "headline": HEADLINE,
        "summary": summary(),
        "positions": [
            { "title": "Staff Engineer", "description": "Built the ledger service." },
            { "title": "Senior Engineer", "description": "Ran payments on-call." },
            { "title": "Engineer", "description": "Shipped the first mobile release." },
        ],
        "educations": [{ "schoolName": "University of Jordan" }],
        "skills": ["Rust", "SQL", "Kubernetes", "AWS", "Go"],
        "languages": ["Arabic", "English"],
        "certifications": [{ "name": "CKA" }],
        "projects": [{ "title": "Open ledger" }],
    })
}

#[fixture]
fn normalized() -> Value {
    json!({
        "linkedInUrl": "https://www.linkedin.com/in/jane-doe/",
        "country": "Jordan",
        "headline": HEADLINE,
        "about": summary(),
        "experience": [
            { "role": "Staff Engineer", "description": "Built the ledger service." },
            { "role": "Senior Engineer", "description": "Ran payments on-call." },
            { "role": "Engineer", "description": "Shipped the first mobile release." },
        ],
        "education": [{ "school": "University of Jordan" }],
        "skillsCount": 5,
        "languagesCount": 2,
        "certificationsCount": 1,
        "projectsCount": 1,
    })
}

fn criterion_point(report: &ProfileScore, section: &str, kind: CriterionKind) -> Option<u32> {
    report
        .section(section)?
        .criteria()
        .iter()
        .find(|result| result.kind() == kind)
        .map(CriterionResult::point)
}

#[rstest]
fn short_headlines_earn_partial_credit() {
    let report = score(&json!({ "headline": "Senior Software Engineer, Payments" }));
    assert_eq!(
        criterion_point(&report, "headline", CriterionKind::WordCountMin),
        Some(4)
    );
    let headline = report.section("headline").expect("headline section");
    assert_eq!(
        headline.criteria().first().map(CriterionResult::title),
        Some("Headline: 4 words (min: 10)")
    );
}

#[rstest]
fn surplus_skills_are_capped() {
    let report = score(&json!({ "skills": ["a", "b", "c", "d", "e"] }));
    assert_eq!(
        criterion_point(&report, "skills", CriterionKind::ArrayLengthMin),
        Some(15)
    );
}

#[rstest]
#[case("https://www.linkedin.com/in/mohammad-omari-620959152", 0)]
#[case("https://www.linkedin.com/in/mohammad-omari", 5)]
#[case("https://www.linkedin.com/in/", 0)]
#[case("https://www.linkedin.com", 0)]
fn generated_url_handles_score_zero(#[case] url: &str, #[case] expected: u32) {
    let report = score(&json!({ "linkedInUrl": url }));
    let section = report.section("linkedInUrl").expect("url section");
    assert_eq!(section.score(), expected);
    assert_eq!(section.max_possible_points(), 5);
}

#[rstest]
fn missing_summary_keeps_a_zero_section() {
    let report = score(&json!({ "headline": "Engineer" }));
    let section = report.section("summary").expect("summary section");
    assert_eq!(section.score(), 0);
    assert_eq!(section.max_possible_points(), 30);
    let titles: Vec<&str> = section
        .criteria()
        .iter()
        .map(CriterionResult::title)
        .collect();
    assert_eq!(
        titles,
        vec!["Summary: missing (min: 200 words)", "Summary: missing"]
    );
}

#[rstest]
#[case(json!({}))]
#[case(json!([1, 2, 3]))]
#[case(json!("not a profile"))]
#[case(json!({ "skills": { "broken": true }, "headline": 42, "summary": null }))]
fn empty_or_malformed_profiles_score_zero(#[case] profile: Value) {
    let report = score(&profile);
    assert_eq!(report.total_score(), 0);
    assert_eq!(report.max_total_score(), 118);
    assert_eq!(report.percentage(), 0);
    assert_eq!(report.grade(), Grade::F);
    assert_eq!(report.section_scores().len(), 20);
}

#[rstest]
fn complete_profiles_score_highly(scraped: Value) {
    let report = score(&scraped);
    assert_eq!(report.total_score(), 104);
    assert_eq!(report.percentage(), 88);
    assert_eq!(report.grade(), Grade::A);
    assert_eq!(
        criterion_point(&report, "headline", CriterionKind::KeywordMatch),
        Some(6)
    );
    assert_eq!(
        criterion_point(&report, "summary", CriterionKind::EmailPresence),
        Some(10)
    );
}

#[rstest]
fn both_schemas_score_identically(scraped: Value, normalized: Value) {
    let raw = ProfileData::from(scraped);
    let tidy = ProfileData::from(normalized);
    assert_eq!(raw.schema(), ProfileSchema::Scraped);
    assert_eq!(tidy.schema(), ProfileSchema::Normalized);
    assert_eq!(score(&raw), score(&tidy));
}

#[rstest]
fn scoring_is_idempotent(scraped: Value) {
    let first = serde_json::to_string(&score(&scraped)).expect("serialise first report");
    let second = serde_json::to_string(&score(&scraped)).expect("serialise second report");
    assert_eq!(first, second);
}

#[rstest]
fn sections_follow_registry_order(scraped: Value) {
    let report = score(&scraped);
    let sections: Vec<&str> = report
        .section_scores()
        .iter()
        .map(SectionScore::section)
        .collect();
    assert_eq!(sections, CriteriaRegistry::standard().sections());
}

#[rstest]
fn measurements_accompany_titles(scraped: Value) {
    let report = score(&scraped);
    let url = report
        .section("linkedInUrl")
        .and_then(|section| section.criteria().first())
        .expect("url criterion");
    assert_eq!(url.title(), "Profile URL: customized");
    assert_eq!(
        url.measurement(),
        &Measurement::Url {
            handle: "jane-doe".to_owned(),
            customized: true,
        }
    );
}

#[rstest]
fn typed_records_are_scored_like_raw_json() {
    let profile = NormalizedProfile::new()
        .with_field("country", "Jordan")
        .with_field("skillsCount", 2);
    let report = score(&profile);
    assert_eq!(report.section("country").map(SectionScore::score), Some(5));
    assert_eq!(report.section("skills").map(SectionScore::score), Some(10));
}

#[rstest]
fn custom_registries_need_resolver_routes() {
    let registry = CriteriaRegistry::new(vec![
        ScoringCriterion::presence("country", "Country", 5),
        ScoringCriterion::array_length_min("hobbies", "Hobbies", 2, 4),
    ])
    .expect("valid registry");
    assert_eq!(
        RubricScorer::new(&registry).err(),
        Some(ScorerError::UnresolvableField {
            key: "hobbies".to_owned(),
        })
    );

    let resolver = FieldResolver::standard()
        .clone()
        .with_candidates(FieldKey::section("hobbies"), &["hobbies", "interests"]);
    let scorer = RubricScorer::with_resolver(&registry, &resolver).expect("routes cover registry");
    let report = scorer.score(&json!({ "country": "Jordan", "interests": ["chess"] }));
    assert_eq!(report.total_score(), 7);
    assert_eq!(report.max_total_score(), 9);
    assert_eq!(report.percentage(), 78);
    assert_eq!(report.grade(), Grade::BPlus);
}

#[rstest]
fn renderers_can_be_swapped() {
    let scorer = RubricScorer::standard().with_renderer(
        |criterion: &ScoringCriterion, measurement: &Measurement| {
            format!("{}:{}", criterion.section, matches!(measurement, Measurement::Absent))
        },
    );
    let report = scorer.score(&json!({ "country": "Jordan" }));
    let titles: Vec<&str> = report
        .section_scores()
        .iter()
        .take(2)
        .flat_map(|section| section.criteria())
        .map(CriterionResult::title)
        .collect();
    assert_eq!(titles, vec!["linkedInUrl:true", "country:false"]);
}

#[rstest]
fn standard_registry_is_fully_routed() {
    let standard = CriteriaRegistry::standard();
    let scorer = RubricScorer::new(standard).expect("standard registry is routed");
    assert_eq!(scorer.registry(), standard);
}

#[rstest]
fn scorers_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RubricScorer<'static>>();
    assert_send_sync::<FieldResolver>();
}
