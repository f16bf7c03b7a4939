//! Profile snapshots accepted by the scorer.
//!
//! Two payload shapes reach the engine: the raw scraper output
//! ([`ScrapedProfile`], with fields such as `positions` and `geoCountryName`)
//! and the AI-normalised record ([`NormalizedProfile`], with fields such as
//! `experience` and `about`). Both are thin wrappers over a JSON object so
//! partially populated or oddly typed payloads still load. Anything that can
//! expose top-level fields by name implements [`FieldSource`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level fields that only appear in raw scraper payloads.
const SCRAPED_MARKERS: &[&str] = &[
    "positions",
    "educations",
    "geoCountryName",
    "geoLocationName",
    "followersCount",
    "publicIdentifier",
];

/// Read access to a profile's top-level fields.
///
/// # Examples
/// ```
/// use profile_score_core::FieldSource;
/// use serde_json::json;
///
/// let payload = json!({ "headline": "Staff Engineer" });
/// assert_eq!(payload.field("headline"), Some(&json!("Staff Engineer")));
/// assert!(payload.field("summary").is_none());
/// ```
pub trait FieldSource {
    /// Return the top-level field `name`, if present.
    fn field(&self, name: &str) -> Option<&Value>;
}

impl FieldSource for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl FieldSource for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(name))
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }
}

macro_rules! profile_record {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Map<String, Value>);

        impl $name {
            /// Construct an empty record.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Set a field while returning `self` for chaining.
            #[must_use]
            pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
                self.0.insert(name.into(), value.into());
                self
            }

            /// Borrow the underlying JSON object.
            #[must_use]
            pub const fn as_map(&self) -> &Map<String, Value> {
                &self.0
            }

            /// Consume the wrapper and return the underlying JSON object.
            #[must_use]
            pub fn into_inner(self) -> Map<String, Value> {
                self.0
            }
        }

        impl From<Map<String, Value>> for $name {
            fn from(fields: Map<String, Value>) -> Self {
                Self(fields)
            }
        }

        impl FieldSource for $name {
            fn field(&self, name: &str) -> Option<&Value> {
                self.0.get(name)
            }
        }
    };
}

profile_record! {
    /// Raw profile payload as produced by the page scraper.
    ///
    /// # Examples
    /// ```
    /// use profile_score_core::{FieldSource, ScrapedProfile};
    ///
    /// let profile = ScrapedProfile::new().with_field("geoCountryName", "Jordan");
    /// assert!(profile.field("geoCountryName").is_some());
    /// ```
    ScrapedProfile
}

profile_record! {
    /// Profile payload after AI normalisation.
    ///
    /// # Examples
    /// ```
    /// use profile_score_core::{FieldSource, NormalizedProfile};
    ///
    /// let profile = NormalizedProfile::new().with_field("about", "Builder of things.");
    /// assert!(profile.field("about").is_some());
    /// ```
    NormalizedProfile
}

/// Which payload shape a document was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileSchema {
    /// Raw scraper output.
    Scraped,
    /// AI-normalised record.
    Normalized,
}

impl ProfileSchema {
    /// Return the schema name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scraped => "scraped",
            Self::Normalized => "normalized",
        }
    }
}

impl std::fmt::Display for ProfileSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either supported payload shape.
///
/// Deserialising from arbitrary JSON never fails: objects carrying a scraper
/// marker field become [`ProfileData::Scraped`], any other object becomes
/// [`ProfileData::Normalized`], and non-object documents become an empty
/// normalised record.
///
/// # Examples
/// ```
/// use profile_score_core::{ProfileData, ProfileSchema};
/// use serde_json::json;
///
/// let scraped = ProfileData::from(json!({ "positions": [] }));
/// assert_eq!(scraped.schema(), ProfileSchema::Scraped);
///
/// let normalized = ProfileData::from(json!({ "experience": [] }));
/// assert_eq!(normalized.schema(), ProfileSchema::Normalized);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "Value")]
pub enum ProfileData {
    /// Raw scraper output.
    Scraped(ScrapedProfile),
    /// AI-normalised record.
    Normalized(NormalizedProfile),
}

impl ProfileData {
    /// Return the detected payload shape.
    #[must_use]
    pub const fn schema(&self) -> ProfileSchema {
        match self {
            Self::Scraped(_) => ProfileSchema::Scraped,
            Self::Normalized(_) => ProfileSchema::Normalized,
        }
    }
}

impl Default for ProfileData {
    fn default() -> Self {
        Self::Normalized(NormalizedProfile::default())
    }
}

impl From<Value> for ProfileData {
    fn from(value: Value) -> Self {
        let Value::Object(fields) = value else {
            return Self::default();
        };
        if SCRAPED_MARKERS.iter().any(|marker| fields.contains_key(*marker)) {
            Self::Scraped(ScrapedProfile::from(fields))
        } else {
            Self::Normalized(NormalizedProfile::from(fields))
        }
    }
}

impl From<ScrapedProfile> for ProfileData {
    fn from(profile: ScrapedProfile) -> Self {
        Self::Scraped(profile)
    }
}

impl From<NormalizedProfile> for ProfileData {
    fn from(profile: NormalizedProfile) -> Self {
        Self::Normalized(profile)
    }
}

impl FieldSource for ProfileData {
    fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Scraped(profile) => profile.field(name),
            Self::Normalized(profile) => profile.field(name),
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
    use serde_json::json;

    #[rstest]
    #[case(json!({ "positions": [], "headline": "x" }), ProfileSchema::Scraped)]
    #[case(json!({ "geoCountryName": "Jordan" }), ProfileSchema::Scraped)]
    #[case(json!({ "experience": [], "about": "x" }), ProfileSchema::Normalized)]
    #[case(json!({}), ProfileSchema::Normalized)]
    #[case(json!([1, 2, 3]), ProfileSchema::Normalized)]
    #[case(json!(null), ProfileSchema::Normalized)]
    fn classification_follows_marker_fields(#[case] payload: Value, #[case] expected: ProfileSchema) {
        assert_eq!(ProfileData::from(payload).schema(), expected);
    }

    #[rstest]
    fn deserialising_never_rejects_odd_documents() {
        let data: ProfileData = serde_json::from_str("\"just a string\"").unwrap();
        assert_eq!(data, ProfileData::default());
        assert!(data.field("headline").is_none());
    }

    #[rstest]
    fn records_serialise_transparently() {
        let profile = NormalizedProfile::new().with_field("skillsCount", 4);
        let json = serde_json::to_value(ProfileData::from(profile)).unwrap();
        assert_eq!(json, json!({ "skillsCount": 4 }));
    }

    #[rstest]
    fn non_object_values_expose_no_fields() {
        assert!(json!("headline").field("headline").is_none());
        assert!(json!(42).field("skills").is_none());
    }
}
