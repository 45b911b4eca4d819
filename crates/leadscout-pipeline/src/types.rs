//! Pipeline input and output records.

use serde::Serialize;

use crate::score::EcomPotential;

/// One lead-discovery request: where to look, what to look for, and how many
/// leads to return.
#[derive(Debug, Clone)]
pub struct LeadRequest {
    pub location: String,
    /// Industry name (no-website flow) or store-type code (e-commerce flow).
    pub subject: String,
    pub max_results: usize,
}

/// A business enriched with derived opportunity signals, ready to return to
/// the caller. Flow-specific fields are `None` for the other flow and are
/// omitted from the serialized output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub name: Option<String>,
    pub address: Option<String>,
    /// `"N/A"` when the provider has no phone number on file.
    pub phone: String,
    pub rating: f64,
    pub reviews: u32,
    pub has_website: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_ecommerce: Option<bool>,
    pub place_id: String,
    pub types: Vec<String>,
    pub category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
    pub google_maps_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecom_potential: Option<EcomPotential>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_platform: Option<&'static str>,
}

impl Lead {
    /// Descending sort key: the opportunity score for the no-website flow,
    /// the potential rank for the e-commerce flow, zero if neither is set.
    #[must_use]
    pub fn ranking_key(&self) -> u8 {
        if let Some(score) = self.opportunity_score {
            score
        } else {
            self.ecom_potential.map_or(0, EcomPotential::rank)
        }
    }
}

/// A completed pipeline run: the resolved search phrase plus the ranked
/// leads.
#[derive(Debug, Clone)]
pub struct LeadReport {
    pub query: String,
    pub leads: Vec<Lead>,
}

/// Maps deep-link for a place.
#[must_use]
pub fn google_maps_url(place_id: &str) -> String {
    format!("https://www.google.com/maps/place/?q=place_id:{place_id}")
}
