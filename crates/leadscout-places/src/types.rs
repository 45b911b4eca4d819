//! Places API response types.
//!
//! All types model the JSON structures returned by the Places Web Service.
//! Every response carries a top-level `"status"` string (`"OK"` on success)
//! which the client checks before deserializing the payload.

use serde::Deserialize;

/// Response body for `textsearch/json`: `{ "status", "results": [...] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
}

/// Response body for `details/json`: `{ "status", "result": { ... } }`.
#[derive(Debug, Deserialize)]
pub(crate) struct DetailEnvelope {
    pub result: PlaceDetail,
}

/// A candidate returned by text search. Only the projection the pipeline
/// needs; the full detail record comes from a follow-up `details/json` call.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

/// Full detail for one place, limited to the fields requested via the
/// `fields` parameter. Everything except `place_id`-keyed identity is
/// optional on the wire; numeric fields default to zero when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub user_ratings_total: u32,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
}

/// Opening-hours fragment; `open_now` is tri-state (true/false/unknown).
#[derive(Debug, Clone, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
}

impl PlaceDetail {
    /// Whether the place is open right now, if the provider knows.
    #[must_use]
    pub fn open_now(&self) -> Option<bool> {
        self.opening_hours.as_ref().and_then(|h| h.open_now)
    }

    /// The website field, treating an empty string the same as absent.
    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref().filter(|w| !w.is_empty())
    }
}
