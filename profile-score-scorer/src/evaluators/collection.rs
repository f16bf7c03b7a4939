//! Presence and list-size checks.

use profile_score_core::{Measurement, ScoringCriterion};

use super::{Evaluation, partial_credit, saturating_u32};
use crate::resolver::{ResolvedValue, is_blank};

/// Award the maximum when the resolved value holds any data.
///
/// Text must be non-blank, lists and counts non-zero, flags `true`, and
/// records must carry at least one non-blank field.
#[must_use]
pub fn presence(criterion: &ScoringCriterion, resolved: &ResolvedValue<'_>) -> Evaluation {
    let present = match resolved {
        ResolvedValue::Absent => return Evaluation::absent(),
        ResolvedValue::Text(text) => !text.trim().is_empty(),
        ResolvedValue::Count(count) => *count > 0,
        ResolvedValue::List(items) => !items.is_empty(),
        ResolvedValue::Flag(flag) => *flag,
        ResolvedValue::Record(fields) => fields.values().any(|value| !is_blank(value)),
    };
    Evaluation {
        point: if present { criterion.max_score } else { 0 },
        measurement: Measurement::Presence { present },
    }
}

/// Award up to the maximum for a list (or reported count) reaching
/// `params.min` items.
#[must_use]
pub fn array_length_min(criterion: &ScoringCriterion, resolved: &ResolvedValue<'_>) -> Evaluation {
    let count = match resolved {
        ResolvedValue::List(items) => u64::from(saturating_u32(items.len())),
        ResolvedValue::Count(count) => *count,
        ResolvedValue::Absent
        | ResolvedValue::Text(_)
        | ResolvedValue::Flag(_)
        | ResolvedValue::Record(_) => return Evaluation::absent(),
    };
    let min = criterion.params.min.unwrap_or_default();
    Evaluation {
        point: partial_credit(count, min, criterion.max_score),
        measurement: Measurement::Items {
            count: u32::try_from(count).unwrap_or(u32::MAX),
            min,
        },
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests should fail fast when fixtures are malformed"
)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn skills() -> ScoringCriterion {
        ScoringCriterion::array_length_min("skills", "Skills", 3, 15)
    }

    #[rstest]
    #[case(ResolvedValue::Text("Jordan"), 5)]
    #[case(ResolvedValue::Text("   "), 0)]
    #[case(ResolvedValue::Count(0), 0)]
    #[case(ResolvedValue::Count(2), 5)]
    #[case(ResolvedValue::Flag(true), 5)]
    #[case(ResolvedValue::Flag(false), 0)]
    #[case(ResolvedValue::List(Vec::new()), 0)]
    #[case(ResolvedValue::Absent, 0)]
    fn presence_requires_data(#[case] resolved: ResolvedValue<'static>, #[case] expected: u32) {
        let rule = ScoringCriterion::presence("country", "Country", 5);
        assert_eq!(presence(&rule, &resolved).point, expected);
    }

    #[rstest]
    fn records_need_a_non_blank_field() {
        let rule = ScoringCriterion::presence("contactInfo", "Contact info", 1);
        let blank = json!({ "email": "", "phone": null });
        let filled = json!({ "email": "", "phone": "+962 7 0000 0000" });
        let blank_fields = blank.as_object().expect("object literal");
        let filled_fields = filled.as_object().expect("object literal");
        assert_eq!(presence(&rule, &ResolvedValue::Record(blank_fields)).point, 0);
        assert_eq!(presence(&rule, &ResolvedValue::Record(filled_fields)).point, 1);
    }

    #[rstest]
    fn absent_values_are_reported_as_absent() {
        let rule = ScoringCriterion::presence("projects", "Projects", 1);
        assert_eq!(presence(&rule, &ResolvedValue::Absent), Evaluation::absent());
    }

    #[rstest]
    fn list_lengths_are_capped_at_the_maximum() {
        let payload = json!(["rust", "sql", "go", "k8s", "aws"]);
        let items: Vec<&Value> = payload.as_array().expect("array literal").iter().collect();
        let evaluation = array_length_min(&skills(), &ResolvedValue::List(items));
        assert_eq!(evaluation.point, 15);
        assert_eq!(evaluation.measurement, Measurement::Items { count: 5, min: 3 });
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 5)]
    #[case(2, 10)]
    #[case(3, 15)]
    fn counts_earn_partial_credit(#[case] count: u64, #[case] expected: u32) {
        let evaluation = array_length_min(&skills(), &ResolvedValue::Count(count));
        assert_eq!(evaluation.point, expected);
    }

    #[rstest]
    #[case(ResolvedValue::Text("rust, sql"))]
    #[case(ResolvedValue::Flag(true))]
    #[case(ResolvedValue::Absent)]
    fn non_list_values_score_zero(#[case] resolved: ResolvedValue<'static>) {
        assert_eq!(array_length_min(&skills(), &resolved), Evaluation::absent());
    }
}
