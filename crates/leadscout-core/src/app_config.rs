use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Google Places API key. Optional: absence is logged as a warning at
    /// startup; provider calls will simply fail with REQUEST_DENIED.
    pub places_api_key: Option<String>,
    pub places_timeout_secs: u64,
    /// Timeout for fetching a candidate's own website during e-commerce
    /// detection.
    pub detector_timeout_secs: u64,
    pub detector_user_agent: String,
    /// Inter-request delay after each detail fetch, per flow.
    pub no_website_delay_ms: u64,
    pub no_ecommerce_delay_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_timeout_secs", &self.places_timeout_secs)
            .field("detector_timeout_secs", &self.detector_timeout_secs)
            .field("detector_user_agent", &self.detector_user_agent)
            .field("no_website_delay_ms", &self.no_website_delay_ms)
            .field("no_ecommerce_delay_ms", &self.no_ecommerce_delay_ms)
            .finish()
    }
}
