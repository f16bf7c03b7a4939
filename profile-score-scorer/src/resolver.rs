//! Map logical sections onto fields of either profile schema.
//!
//! Each [`FieldKey`] owns an ordered list of candidate [`FieldPath`]s. The
//! first candidate that yields a defined (present, non-`null`) value wins;
//! later candidates are never consulted. Nothing here fails: unknown keys and
//! unusable values come back as [`ResolvedValue::Absent`].

use std::fmt;
use std::sync::LazyLock;

use profile_score_core::{FieldKey, FieldSource};
use serde_json::{Map, Value};

static STANDARD_RESOLVER: LazyLock<FieldResolver> = LazyLock::new(FieldResolver::build_standard);

/// Candidate table for the standard registry, in priority order.
const STANDARD_ROUTES: &[(&str, Option<&str>, &[&str])] = &[
    (
        "linkedInUrl",
        None,
        &["linkedInUrl", "linkedinUrl", "profileUrl", "url", "publicIdentifier"],
    ),
    (
        "country",
        None,
        &["country", "geoCountryName", "location.country", "locationName"],
    ),
    ("headline", None, &["headline", "occupation"]),
    ("summary", None, &["summary", "about"]),
    (
        "experiences",
        None,
        &["experiences", "experience", "positions", "experienceCount", "positionsCount"],
    ),
    (
        "experiences",
        Some("description"),
        &[
            "experiences[].description",
            "experience[].description",
            "positions[].description",
        ],
    ),
    (
        "education",
        None,
        &["education", "educations", "school", "educationCount"],
    ),
    ("skills", None, &["skills", "skillsCount"]),
    ("publications", None, &["publications", "publicationsCount"]),
    ("languages", None, &["languages", "languagesCount"]),
    (
        "certificates",
        None,
        &["certificates", "certifications", "certificatesCount", "certificationsCount"],
    ),
    (
        "honorsAwards",
        None,
        &["honorsAwards", "honors", "awards", "honorsCount"],
    ),
    (
        "volunteer",
        None,
        &["volunteer", "volunteerExperiences", "volunteering", "volunteerCount"],
    ),
    ("patents", None, &["patents", "patentsCount"]),
    ("testScores", None, &["testScores", "testScoresCount"]),
    ("organizations", None, &["organizations", "organizationsCount"]),
    ("featured", None, &["featured", "featuredCount"]),
    (
        "recommendations",
        None,
        &["recommendations", "recommendationsCount", "recommendationsReceived"],
    ),
    ("causes", None, &["causes", "volunteerCauses", "causesCount"]),
    ("projects", None, &["projects", "projectsCount"]),
    (
        "contactInfo",
        None,
        &["contactInfo", "contact", "email", "emailAddress"],
    ),
];

/// A value located in a profile, borrowed from the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue<'a> {
    /// No candidate held a usable value.
    Absent,
    /// A string.
    Text(&'a str),
    /// A non-negative integer, typically a `*Count` field.
    Count(u64),
    /// An array, or the values collected by a list projection.
    List(Vec<&'a Value>),
    /// A boolean.
    Flag(bool),
    /// A nested object.
    Record(&'a Map<String, Value>),
}

impl<'a> ResolvedValue<'a> {
    /// Interpret a JSON value. Returns `None` for `null` so the next
    /// candidate is tried.
    ///
    /// Negative or fractional numbers are malformed and become
    /// [`ResolvedValue::Absent`].
    #[must_use]
    pub fn from_json(value: &'a Value) -> Option<Self> {
        let resolved = match value {
            Value::Null => return None,
            Value::String(text) => Self::Text(text),
            Value::Number(number) => number.as_u64().map_or(Self::Absent, Self::Count),
            Value::Array(items) => Self::List(items.iter().collect()),
            Value::Bool(flag) => Self::Flag(*flag),
            Value::Object(fields) => Self::Record(fields),
        };
        Some(resolved)
    }

    /// Report whether nothing usable was found.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Each,
}

/// A dotted path into a profile document.
///
/// Segments are separated by `.`; a `[]` suffix projects the remaining path
/// over every element of an array, keeping the non-blank results.
///
/// # Examples
/// ```
/// use profile_score_scorer::FieldPath;
/// use serde_json::json;
///
/// let path = FieldPath::from("positions[].description");
/// let profile = json!({ "positions": [{ "description": "Built things" }, {}] });
/// assert_eq!(path.lookup(&profile).map(|found| found.len()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    raw: String,
    root: String,
    rest: Vec<Segment>,
}

impl FieldPath {
    /// Collect the values this path addresses in `source`.
    ///
    /// Returns `None` when the path is undefined in the document (missing or
    /// `null`). A projection over an existing array is always defined, even
    /// when it collects nothing.
    #[must_use]
    pub fn lookup<'a, S>(&self, source: &'a S) -> Option<Vec<&'a Value>>
    where
        S: FieldSource + ?Sized,
    {
        let start = source.field(&self.root)?;
        let found = walk(start, &self.rest)?;
        match found {
            Found::One(Value::Null) => None,
            Found::One(value) => Some(vec![value]),
            Found::Many(values) => Some(values),
        }
    }

    /// Whether the path contains a list projection.
    #[must_use]
    pub fn is_projection(&self) -> bool {
        self.rest.contains(&Segment::Each)
    }

    fn resolve<'a, S>(&self, source: &'a S) -> Option<ResolvedValue<'a>>
    where
        S: FieldSource + ?Sized,
    {
        let start = source.field(&self.root)?;
        match walk(start, &self.rest)? {
            Found::One(value) => ResolvedValue::from_json(value),
            Found::Many(values) => Some(ResolvedValue::List(values)),
        }
    }
}

impl From<&str> for FieldPath {
    fn from(raw: &str) -> Self {
        let mut segments = raw
            .split('.')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .flat_map(|part| {
                part.strip_suffix("[]").map_or_else(
                    || vec![Segment::Key(part.to_owned())],
                    |key| vec![Segment::Key(key.to_owned()), Segment::Each],
                )
            });
        let root = match segments.next() {
            Some(Segment::Key(key)) => key,
            _ => String::new(),
        };
        Self {
            raw: raw.to_owned(),
            root,
            rest: segments.collect(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

enum Found<'a> {
    One(&'a Value),
    Many(Vec<&'a Value>),
}

fn walk<'a>(value: &'a Value, segments: &[Segment]) -> Option<Found<'a>> {
    let Some((head, rest)) = segments.split_first() else {
        return Some(Found::One(value));
    };
    match head {
        Segment::Key(key) => walk(value.get(key.as_str())?, rest),
        Segment::Each => {
            let collected = value
                .as_array()?
                .iter()
                .filter_map(|item| walk(item, rest))
                .flat_map(|found| match found {
                    Found::One(single) => vec![single],
                    Found::Many(values) => values,
                })
                .filter(|item| !is_blank(item))
                .collect();
            Some(Found::Many(collected))
        }
    }
}

/// Report whether a JSON value carries no information.
///
/// `null`, whitespace-only strings, empty arrays and empty objects are blank.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[derive(Debug, Clone)]
struct Route {
    section: String,
    focus: Option<String>,
    candidates: Vec<FieldPath>,
}

impl Route {
    fn matches(&self, key: FieldKey<'_>) -> bool {
        self.section == key.section && self.focus.as_deref() == key.focus
    }
}

/// Ordered candidate paths per field key.
///
/// # Examples
/// ```
/// use profile_score_core::FieldKey;
/// use profile_score_scorer::{FieldResolver, ResolvedValue};
/// use serde_json::json;
///
/// let resolver = FieldResolver::standard();
/// let scraped = json!({ "geoCountryName": "Jordan" });
/// let normalized = json!({ "country": "Jordan" });
/// let key = FieldKey::section("country");
/// assert_eq!(resolver.resolve(key, &scraped), ResolvedValue::Text("Jordan"));
/// assert_eq!(resolver.resolve(key, &normalized), ResolvedValue::Text("Jordan"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldResolver {
    routes: Vec<Route>,
}

impl FieldResolver {
    /// Create a resolver with no routes.
    #[must_use]
    pub const fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Return the resolver covering every section of the standard registry.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_RESOLVER
    }

    fn build_standard() -> Self {
        STANDARD_ROUTES
            .iter()
            .fold(Self::new(), |resolver, (section, focus, candidates)| {
                let key = FieldKey {
                    section: *section,
                    focus: *focus,
                };
                resolver.with_candidates(key, candidates)
            })
    }

    /// Set the candidate paths for `key`, replacing any existing route.
    pub fn insert(&mut self, key: FieldKey<'_>, candidates: &[&str]) {
        self.routes.retain(|route| !route.matches(key));
        self.routes.push(Route {
            section: key.section.to_owned(),
            focus: key.focus.map(str::to_owned),
            candidates: candidates.iter().copied().map(FieldPath::from).collect(),
        });
    }

    /// Set the candidate paths for `key` while consuming `self`, enabling
    /// chaining.
    #[must_use]
    pub fn with_candidates(mut self, key: FieldKey<'_>, candidates: &[&str]) -> Self {
        self.insert(key, candidates);
        self
    }

    /// Candidate paths for `key`, in priority order.
    #[must_use]
    pub fn candidates(&self, key: FieldKey<'_>) -> Option<&[FieldPath]> {
        self.routes
            .iter()
            .find(|route| route.matches(key))
            .map(|route| route.candidates.as_slice())
    }

    /// Report whether `key` has at least one candidate path.
    #[must_use]
    pub fn handles(&self, key: FieldKey<'_>) -> bool {
        self.candidates(key).is_some_and(|paths| !paths.is_empty())
    }

    /// Resolve `key` against `source`. The first defined candidate wins.
    #[must_use]
    pub fn resolve<'a, S>(&self, key: FieldKey<'_>, source: &'a S) -> ResolvedValue<'a>
    where
        S: FieldSource + ?Sized,
    {
        let Some(candidates) = self.candidates(key) else {
            log::trace!("no resolver route for {key}");
            return ResolvedValue::Absent;
        };
        candidates
            .iter()
            .find_map(|path| {
                let resolved = path.resolve(source)?;
                log::trace!("resolved {key} via {path}");
                Some(resolved)
            })
            .unwrap_or(ResolvedValue::Absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({ "about": "Normalised summary" }), ResolvedValue::Text("Normalised summary"))]
    #[case(json!({ "summary": "Scraped summary", "about": "ignored" }), ResolvedValue::Text("Scraped summary"))]
    #[case(json!({ "summary": null, "about": "fallback" }), ResolvedValue::Text("fallback"))]
    #[case(json!({}), ResolvedValue::Absent)]
    fn first_defined_candidate_wins(#[case] profile: Value, #[case] expected: ResolvedValue<'static>) {
        let resolved = FieldResolver::standard().resolve(FieldKey::section("summary"), &profile);
        assert_eq!(resolved, expected);
    }

    #[rstest]
    fn malformed_first_candidate_is_not_skipped() {
        let profile = json!({ "skills": -3, "skillsCount": 7 });
        let resolved = FieldResolver::standard().resolve(FieldKey::section("skills"), &profile);
        assert!(resolved.is_absent());
    }

    #[rstest]
    fn counts_stand_in_for_lists() {
        let profile = json!({ "skillsCount": 4 });
        let resolved = FieldResolver::standard().resolve(FieldKey::section("skills"), &profile);
        assert_eq!(resolved, ResolvedValue::Count(4));
    }

    #[rstest]
    fn nested_paths_are_followed() {
        let profile = json!({ "location": { "country": "Jordan" } });
        let resolved = FieldResolver::standard().resolve(FieldKey::section("country"), &profile);
        assert_eq!(resolved, ResolvedValue::Text("Jordan"));
    }

    #[rstest]
    fn projections_keep_only_non_blank_values() {
        let profile = json!({
            "positions": [
                { "description": "Led the platform team" },
                { "description": "   " },
                { "title": "Intern" },
            ]
        });
        let key = FieldKey::focused("experiences", "description");
        let ResolvedValue::List(values) = FieldResolver::standard().resolve(key, &profile) else {
            panic!("expected a projected list");
        };
        assert_eq!(values, vec![&json!("Led the platform team")]);
    }

    #[rstest]
    fn projection_over_missing_array_falls_through() {
        let profile = json!({
            "experience": "not a list",
            "positions": [{ "description": "Shipped" }],
        });
        let key = FieldKey::focused("experiences", "description");
        let resolved = FieldResolver::standard().resolve(key, &profile);
        assert_eq!(resolved, ResolvedValue::List(vec![&json!("Shipped")]));
    }

    #[rstest]
    fn unknown_keys_resolve_absent() {
        let profile = json!({ "hobbies": ["chess"] });
        let resolved = FieldResolver::standard().resolve(FieldKey::section("hobbies"), &profile);
        assert_eq!(resolved, ResolvedValue::Absent);
    }

    #[rstest]
    fn inserting_replaces_existing_routes() {
        let key = FieldKey::section("hobbies");
        let resolver = FieldResolver::new()
            .with_candidates(key, &["pastimes"])
            .with_candidates(key, &["hobbies"]);
        let paths: Vec<String> = resolver
            .candidates(key)
            .unwrap_or_default()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(paths, vec!["hobbies".to_owned()]);
    }

    #[rstest]
    #[case("experiences[].description", true)]
    #[case("location.country", false)]
    fn projection_paths_are_detected(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(FieldPath::from(raw).is_projection(), expected);
    }

    #[rstest]
    #[case(json!(null), true)]
    #[case(json!(" \n"), true)]
    #[case(json!([]), true)]
    #[case(json!({}), true)]
    #[case(json!(false), false)]
    #[case(json!(0), false)]
    #[case(json!("x"), false)]
    fn blank_values(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_blank(&value), expected);
    }
}
