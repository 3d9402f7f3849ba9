//! Recipe Web
//!
//! Shared pieces of the two servers in this package:
//! - config/: Environment loading (secrets, server, OpenAI, rendering)
//! - setup/: Dependency injection and server setup
//! - api/: HTML pages and the health API

pub mod api;
pub mod config;
pub mod setup;

/// Initializes tracing with RUST_LOG env filter
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
