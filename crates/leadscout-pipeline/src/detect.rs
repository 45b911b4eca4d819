//! Content-based e-commerce detection.
//!
//! Fetches a business's own website and scans the body for commerce
//! indicators. Detection is fail-open: any fetch failure means "no
//! e-commerce detected", which keeps the business in the lead list.

use std::time::Duration;

use reqwest::Client;

use crate::error::PipelineError;

/// Case-insensitive substrings that mark a page as selling online: cart and
/// checkout vocabulary plus known platform signatures.
const ECOMMERCE_INDICATORS: &[&str] = &[
    "add to cart",
    "add-to-cart",
    "addtocart",
    "shopify",
    "woocommerce",
    "bigcommerce",
    "squarespace/commerce",
    "magento",
    "checkout",
    "shopping cart",
    "shopping-cart",
    "buy now",
    "purchase",
    "shop now",
];

/// Fetches arbitrary business websites and tests them for commerce
/// indicators.
///
/// The indicator set is injectable so it can be extended without touching
/// detector logic; [`EcommerceDetector::new`] uses the built-in set.
pub struct EcommerceDetector {
    client: Client,
    indicators: Vec<String>,
}

impl EcommerceDetector {
    /// Creates a detector with the built-in indicator set.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, PipelineError> {
        Self::with_indicators(
            timeout_secs,
            user_agent,
            ECOMMERCE_INDICATORS.iter().map(|s| (*s).to_string()),
        )
    }

    /// Creates a detector with a custom indicator set. Indicators are
    /// lowercased; matching is case-insensitive substring containment.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_indicators(
        timeout_secs: u64,
        user_agent: &str,
        indicators: impl IntoIterator<Item = String>,
    ) -> Result<Self, PipelineError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            indicators: indicators.into_iter().map(|s| s.to_lowercase()).collect(),
        })
    }

    /// Fetches `website_url` and reports whether the page looks like it
    /// sells online.
    ///
    /// Returns `false` on any failure — network error, timeout, unreadable
    /// body. The page is not rendered: no JavaScript, no redirect-chain
    /// inspection beyond what the HTTP client follows by default.
    pub async fn has_ecommerce(&self, website_url: &str) -> bool {
        match self.fetch_body(website_url).await {
            Ok(body) => self.scan(&body),
            Err(e) => {
                tracing::debug!(url = website_url, error = %e, "website fetch failed, assuming no e-commerce");
                false
            }
        }
    }

    /// Tests page content against the indicator set. Exposed for the scan
    /// logic to be testable without a live fetch.
    #[must_use]
    pub fn scan(&self, content: &str) -> bool {
        let content = content.to_lowercase();
        self.indicators.iter().any(|i| content.contains(i.as_str()))
    }

    // The body is read whatever the HTTP status: an error page without
    // commerce markup still correctly scans as "no e-commerce".
    async fn fetch_body(&self, url: &str) -> Result<String, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        response.text().await
    }
}
