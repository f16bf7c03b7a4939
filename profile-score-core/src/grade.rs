//! Letter grades derived from an overall percentage.
//!
//! # Examples
//! ```
//! use profile_score_core::Grade;
//!
//! assert_eq!(Grade::from_percentage(90), Grade::APlus);
//! assert_eq!(Grade::from_percentage(89), Grade::A);
//! assert_eq!(Grade::from_percentage(34).as_str(), "F");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Letter bucket for an overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 90% and above.
    #[serde(rename = "A+")]
    APlus,
    /// 85% to 89%.
    #[serde(rename = "A")]
    A,
    /// 80% to 84%.
    #[serde(rename = "A-")]
    AMinus,
    /// 75% to 79%.
    #[serde(rename = "B+")]
    BPlus,
    /// 70% to 74%.
    #[serde(rename = "B")]
    B,
    /// 65% to 69%.
    #[serde(rename = "B-")]
    BMinus,
    /// 60% to 64%.
    #[serde(rename = "C+")]
    CPlus,
    /// 55% to 59%.
    #[serde(rename = "C")]
    C,
    /// 50% to 54%.
    #[serde(rename = "C-")]
    CMinus,
    /// 45% to 49%.
    #[serde(rename = "D+")]
    DPlus,
    /// 40% to 44%.
    #[serde(rename = "D")]
    D,
    /// 35% to 39%.
    #[serde(rename = "D-")]
    DMinus,
    /// Below 35%.
    #[serde(rename = "F")]
    F,
}

/// Inclusive lower bounds, highest first. Anything below the last bound is `F`.
const THRESHOLDS: [(u32, Grade); 12] = [
    (90, Grade::APlus),
    (85, Grade::A),
    (80, Grade::AMinus),
    (75, Grade::BPlus),
    (70, Grade::B),
    (65, Grade::BMinus),
    (60, Grade::CPlus),
    (55, Grade::C),
    (50, Grade::CMinus),
    (45, Grade::DPlus),
    (40, Grade::D),
    (35, Grade::DMinus),
];

impl Grade {
    /// Map a percentage to its grade; the first matching bound wins.
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        THRESHOLDS
            .iter()
            .find(|(floor, _)| percentage >= *floor)
            .map_or(Self::F, |(_, grade)| *grade)
    }

    /// Return the grade as displayed, e.g. `"A+"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        THRESHOLDS
            .iter()
            .map(|(_, grade)| *grade)
            .chain(std::iter::once(Self::F))
            .find(|grade| grade.as_str() == wanted)
            .ok_or_else(|| format!("unknown grade '{s}'"))
    }
}

/// Overall percentage, rounded half-up, in `0..=100`.
///
/// Returns `0` when `max_total` is zero.
///
/// # Examples
/// ```
/// use profile_score_core::percentage;
///
/// assert_eq!(percentage(60, 120), 50);
/// assert_eq!(percentage(1, 3), 33);
/// assert_eq!(percentage(0, 0), 0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the ratio is rounded and clamped into 0..=100 before narrowing"
)]
pub fn percentage(total: u32, max_total: u32) -> u32 {
    if max_total == 0 {
        return 0;
    }
    let ratio = f64::from(total) / f64::from(max_total) * 100.0;
    ratio.round().clamp(0.0, 100.0) as u32
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
    #[case(100, Grade::APlus)]
    #[case(90, Grade::APlus)]
    #[case(89, Grade::A)]
    #[case(85, Grade::A)]
    #[case(84, Grade::AMinus)]
    #[case(80, Grade::AMinus)]
    #[case(75, Grade::BPlus)]
    #[case(70, Grade::B)]
    #[case(65, Grade::BMinus)]
    #[case(60, Grade::CPlus)]
    #[case(55, Grade::C)]
    #[case(50, Grade::CMinus)]
    #[case(45, Grade::DPlus)]
    #[case(40, Grade::D)]
    #[case(35, Grade::DMinus)]
    #[case(34, Grade::F)]
    #[case(0, Grade::F)]
    fn grade_boundaries(#[case] pct: u32, #[case] expected: Grade) {
        assert_eq!(Grade::from_percentage(pct), expected);
    }

    #[rstest]
    fn grades_round_trip_through_strings() {
        for (_, grade) in THRESHOLDS {
            assert_eq!(grade.as_str().parse::<Grade>(), Ok(grade));
        }
        assert_eq!("f".parse::<Grade>(), Ok(Grade::F));
        assert!("E".parse::<Grade>().is_err());
    }

    #[rstest]
    fn grades_serialise_as_letters() {
        assert_eq!(serde_json::to_string(&Grade::BMinus).unwrap(), "\"B-\"");
        assert_eq!(serde_json::from_str::<Grade>("\"A+\"").unwrap(), Grade::APlus);
    }

    #[rstest]
    #[case(0, 120, 0)]
    #[case(120, 120, 100)]
    #[case(108, 120, 90)]
    #[case(107, 120, 89)]
    #[case(1, 8, 13)]
    #[case(5, 0, 0)]
    fn percentage_rounds_half_up(#[case] total: u32, #[case] max: u32, #[case] expected: u32) {
        assert_eq!(percentage(total, max), expected);
    }
}
