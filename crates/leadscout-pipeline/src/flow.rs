//! The enrich-and-filter pipeline shared by both lead flows.
//!
//! One control flow, parameterized by [`LeadFlow`]: text search, a bounded
//! sequential detail scan with a fixed inter-request pause, a flow-specific
//! inclusion test, scoring, and a final descending sort by ranking key.

use std::time::Duration;

use leadscout_places::{PlaceDetail, PlacesClient, PlacesError};

use crate::catalog::{primary_category, search_phrase, suggest_platform};
use crate::detect::EcommerceDetector;
use crate::error::PipelineError;
use crate::score::{ecom_potential, opportunity_score};
use crate::types::{google_maps_url, Lead, LeadReport, LeadRequest};

/// Text search tops out well below this; a larger `maxResults` only adds
/// dead scanning against the `2 × maxResults` candidate bound.
const MAX_RESULTS_CEILING: usize = 60;

/// Which lead flow a request runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadFlow {
    /// Businesses with no website at all. Scored 0–100.
    NoWebsite,
    /// Stores whose site (if any) shows no commerce indicators. Ranked by
    /// potential tier.
    NoEcommerce,
}

impl LeadFlow {
    /// The detail field mask requested from the provider. Only the
    /// no-website flow pays for `opening_hours`.
    fn detail_fields(self) -> &'static [&'static str] {
        match self {
            LeadFlow::NoWebsite => &[
                "name",
                "formatted_address",
                "formatted_phone_number",
                "website",
                "rating",
                "user_ratings_total",
                "business_status",
                "types",
                "opening_hours",
            ],
            LeadFlow::NoEcommerce => &[
                "name",
                "formatted_address",
                "formatted_phone_number",
                "website",
                "rating",
                "user_ratings_total",
                "types",
            ],
        }
    }

    fn inter_request_delay(self, settings: &PipelineSettings) -> Duration {
        let ms = match self {
            LeadFlow::NoWebsite => settings.no_website_delay_ms,
            LeadFlow::NoEcommerce => settings.no_ecommerce_delay_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Injected pacing policy: how long to pause after each detail fetch,
/// per flow.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub no_website_delay_ms: u64,
    pub no_ecommerce_delay_ms: u64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            no_website_delay_ms: 100,
            no_ecommerce_delay_ms: 200,
        }
    }
}

/// Orchestrates one lead-discovery run. Stateless across requests: every
/// run is search → bounded detail scan → filter/score → sort.
pub struct LeadPipeline {
    places: PlacesClient,
    detector: EcommerceDetector,
    settings: PipelineSettings,
}

impl LeadPipeline {
    #[must_use]
    pub fn new(
        places: PlacesClient,
        detector: EcommerceDetector,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            places,
            detector,
            settings,
        }
    }

    /// Runs one flow end to end and returns the ranked leads.
    ///
    /// At most `2 × maxResults` candidates are examined, and scanning stops
    /// early once `maxResults` leads are collected. A failed detail fetch
    /// skips that candidate only.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Provider`] if the provider answers the search with
    ///   a non-`"OK"` status. No detail calls are attempted.
    /// - [`PipelineError::Search`] if the search call itself fails.
    pub async fn find_leads(
        &self,
        flow: LeadFlow,
        request: &LeadRequest,
    ) -> Result<LeadReport, PipelineError> {
        let max_results = request.max_results.clamp(1, MAX_RESULTS_CEILING);
        let subject_phrase = match flow {
            LeadFlow::NoWebsite => request.subject.as_str(),
            LeadFlow::NoEcommerce => search_phrase(&request.subject),
        };
        let query = format!("{subject_phrase} in {}", request.location);

        let candidates = match self.places.text_search(&query).await {
            Ok(candidates) => candidates,
            Err(PlacesError::Status { status, message }) => {
                return Err(PipelineError::Provider { status, message });
            }
            Err(e) => return Err(PipelineError::Search(e)),
        };

        tracing::debug!(
            query = %query,
            candidates = candidates.len(),
            max_results,
            "text search complete"
        );

        let delay = flow.inter_request_delay(&self.settings);
        let mut leads: Vec<Lead> = Vec::new();

        for candidate in candidates.iter().take(max_results * 2) {
            let detail = match self
                .places
                .place_details(&candidate.place_id, flow.detail_fields())
                .await
            {
                Ok(detail) => detail,
                Err(e) => {
                    tracing::debug!(
                        place_id = %candidate.place_id,
                        error = %e,
                        "detail fetch failed, skipping candidate"
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
            };

            if let Some(lead) = self.admit(flow, request, &candidate.place_id, detail).await {
                leads.push(lead);
                if leads.len() >= max_results {
                    break;
                }
            }

            // Crude self-imposed provider pacing, one fixed pause per
            // detail fetch.
            tokio::time::sleep(delay).await;
        }

        // Vec::sort_by is stable, so ties keep search order.
        leads.sort_by(|a, b| b.ranking_key().cmp(&a.ranking_key()));

        tracing::info!(query = %query, found = leads.len(), "lead scan complete");

        Ok(LeadReport { query, leads })
    }

    /// Applies the flow's inclusion test and, on inclusion, builds the Lead
    /// with its derived fields. `None` means the candidate is filtered out.
    async fn admit(
        &self,
        flow: LeadFlow,
        request: &LeadRequest,
        place_id: &str,
        detail: PlaceDetail,
    ) -> Option<Lead> {
        let website = detail.website().map(str::to_owned);

        match flow {
            LeadFlow::NoWebsite => {
                if website.is_some() {
                    return None;
                }
                let open_now = detail.open_now();
                let score =
                    opportunity_score(detail.rating, detail.user_ratings_total, open_now);
                let mut lead = base_lead(place_id, detail);
                lead.is_open = open_now;
                lead.opportunity_score = Some(score);
                Some(lead)
            }
            LeadFlow::NoEcommerce => {
                // A missing site trivially means no e-commerce; only a
                // present site gets probed.
                if let Some(url) = &website {
                    if self.detector.has_ecommerce(url).await {
                        return None;
                    }
                }
                let potential = ecom_potential(detail.rating, detail.user_ratings_total);
                let mut lead = base_lead(place_id, detail);
                lead.has_website = website.is_some();
                lead.website = website;
                lead.has_ecommerce = Some(false);
                lead.ecom_potential = Some(potential);
                lead.suggested_platform = Some(suggest_platform(&request.subject));
                Some(lead)
            }
        }
    }
}

/// The flow-independent part of a Lead; the caller fills in the flow's
/// derived fields.
fn base_lead(place_id: &str, detail: PlaceDetail) -> Lead {
    let category = primary_category(&detail.types);
    Lead {
        name: detail.name,
        address: detail.formatted_address,
        phone: detail
            .formatted_phone_number
            .unwrap_or_else(|| "N/A".to_string()),
        rating: detail.rating,
        reviews: detail.user_ratings_total,
        has_website: false,
        website: None,
        has_ecommerce: None,
        place_id: place_id.to_owned(),
        types: detail.types,
        category,
        is_open: None,
        google_maps_url: google_maps_url(place_id),
        opportunity_score: None,
        ecom_potential: None,
        suggested_platform: None,
    }
}
