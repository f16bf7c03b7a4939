//! Checks over free text: word counts, keywords, emails and URL handles.

use std::sync::LazyLock;

use profile_score_core::{Measurement, ScoringCriterion};
use regex::Regex;

use super::{Evaluation, partial_credit, saturating_u32};
use crate::resolver::ResolvedValue;

/// Directory that precedes member handles in profile URLs.
const PROFILE_DIRECTORY: &str = "in";

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal exercised by unit tests"
)]
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b").expect("valid email pattern")
});

/// Award up to the maximum for text reaching `params.min` words.
#[must_use]
pub fn word_count_min(criterion: &ScoringCriterion, resolved: &ResolvedValue<'_>) -> Evaluation {
    let ResolvedValue::Text(text) = resolved else {
        return Evaluation::absent();
    };
    let count = saturating_u32(text.split_whitespace().count());
    let min = criterion.params.min.unwrap_or_default();
    Evaluation {
        point: partial_credit(u64::from(count), min, criterion.max_score),
        measurement: Measurement::Words { count, min },
    }
}

/// Award two points per keyword found in the text, up to the maximum.
///
/// Matching is case-insensitive and by substring, so `"lead"` also matches
/// `"leadership"`.
#[must_use]
pub fn keyword_match(criterion: &ScoringCriterion, resolved: &ResolvedValue<'_>) -> Evaluation {
    let ResolvedValue::Text(text) = resolved else {
        return Evaluation::absent();
    };
    let haystack = text.to_lowercase();
    let matched: Vec<String> = criterion
        .params
        .keywords
        .iter()
        .map(|keyword| keyword.to_lowercase())
        .filter(|keyword| !keyword.is_empty() && haystack.contains(keyword.as_str()))
        .collect();
    let point = saturating_u32(matched.len())
        .saturating_mul(2)
        .min(criterion.max_score);
    Evaluation {
        point,
        measurement: Measurement::Keywords { matched },
    }
}

/// Award the maximum when the text contains an email address.
#[must_use]
pub fn email_presence(criterion: &ScoringCriterion, resolved: &ResolvedValue<'_>) -> Evaluation {
    let ResolvedValue::Text(text) = resolved else {
        return Evaluation::absent();
    };
    let found = EMAIL.is_match(text);
    Evaluation {
        point: if found { criterion.max_score } else { 0 },
        measurement: Measurement::Email { found },
    }
}

/// Award the maximum when the profile URL ends in a customised handle.
///
/// Platform-assigned handles end in a run of digits
/// (`mohammad-omari-620959152`); customised ones do not. Query strings,
/// fragments and trailing slashes are ignored.
#[must_use]
pub fn url_customization(criterion: &ScoringCriterion, resolved: &ResolvedValue<'_>) -> Evaluation {
    let ResolvedValue::Text(url) = resolved else {
        return Evaluation::absent();
    };
    let Some(handle) = trailing_handle(url) else {
        return Evaluation::absent();
    };
    let customized = !handle.ends_with(|c: char| c.is_ascii_digit());
    Evaluation {
        point: if customized { criterion.max_score } else { 0 },
        measurement: Measurement::Url {
            handle: handle.to_owned(),
            customized,
        },
    }
}

/// Final non-empty path segment of `url`, without query or fragment.
///
/// The `scheme://host` authority is never a handle, and neither is a bare
/// `in` directory.
fn trailing_handle(url: &str) -> Option<&str> {
    let address = url
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let segments: Vec<&str> = strip_authority(address)
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();
    match segments.as_slice() {
        [only] if only.eq_ignore_ascii_case(PROFILE_DIRECTORY) => None,
        [.., last] => Some(*last),
        [] => None,
    }
}

/// Path portion of `address` once any `scheme://host` or `www.` host is removed.
fn strip_authority(address: &str) -> &str {
    let Some(authority_and_path) = address
        .split_once("://")
        .map(|(_, rest)| rest)
        .or_else(|| address.starts_with("www.").then_some(address))
    else {
        return address;
    };
    authority_and_path
        .split_once('/')
        .map_or("", |(_, path)| path)
}
