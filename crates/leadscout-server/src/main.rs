mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = leadscout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // The key is deliberately not a hard requirement: the server still
    // starts, and provider calls surface REQUEST_DENIED per request.
    let api_key = config.places_api_key.clone().unwrap_or_else(|| {
        tracing::warn!(
            "GOOGLE_MAPS_API_KEY not set; Places requests will fail until it is provided"
        );
        String::new()
    });

    let places = leadscout_places::PlacesClient::new(&api_key, config.places_timeout_secs)?;
    let detector = leadscout_pipeline::EcommerceDetector::new(
        config.detector_timeout_secs,
        &config.detector_user_agent,
    )?;
    let settings = leadscout_pipeline::PipelineSettings {
        no_website_delay_ms: config.no_website_delay_ms,
        no_ecommerce_delay_ms: config.no_ecommerce_delay_ms,
    };
    let pipeline = Arc::new(leadscout_pipeline::LeadPipeline::new(
        places, detector, settings,
    ));

    let app = build_app(AppState { pipeline });

    tracing::info!(addr = %config.bind_addr, env = %config.env, "starting leadscout server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
