use leadscout_places::PlacesError;
use thiserror::Error;

/// Errors that abort a whole pipeline run.
///
/// Per-candidate detail failures are not represented here: they skip the
/// candidate and the scan continues.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The provider answered the search call with a non-`"OK"` status.
    /// Surfaced verbatim to the caller as `{error, message}`.
    #[error("search rejected by provider: {status}")]
    Provider {
        status: String,
        message: Option<String>,
    },

    /// The search call itself failed (network, non-2xx, bad JSON).
    #[error("search request failed: {0}")]
    Search(#[source] PlacesError),

    /// The underlying `reqwest::Client` could not be constructed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
