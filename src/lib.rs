//! CliftonStrengths report extraction and AI-backed role matching.
//!
//! The pipeline takes an uploaded Gallup report (PDF bytes), recovers the
//! candidate's ranked themes (fast text parsing first, a vision model
//! fallback when the text pass fails or looks thin), then asks a generative
//! model to rank the Accenture technology role catalog against that profile
//! for a chosen graduate track.
//!
//! Entry point: [`pipeline::StrengthPipeline`].

pub mod config;
pub mod model;
pub mod reference;
pub mod pipeline;

use tracing_subscriber::EnvFilter;

pub use pipeline::{PipelineError, PipelineReport, StrengthPipeline};

/// Initialize tracing for binaries and integration harnesses. `RUST_LOG`
/// wins when set; otherwise the crate's default filter applies.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
