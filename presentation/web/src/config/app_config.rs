use std::env;

use crate::api::recipe::render::RenderMode;

use super::errors::ConfigError;
use super::openai_config::OpenAIConfig;
use super::render_config::render_mode_from_lookup;
use super::secrets::Secrets;
use super::server_config::ServerConfig;
use super::tunnel_config::TunnelConfig;

/// Everything the recipe server reads from the environment, resolved once
/// at startup.
pub struct AppConfig {
    pub server: ServerConfig,
    pub openai: OpenAIConfig,
    pub tunnel: TunnelConfig,
    pub render_mode: RenderMode,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Secrets are validated first so a missing key is reported before any
    /// other setting.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secrets = Secrets::from_lookup(&lookup)?;

        Ok(Self {
            server: ServerConfig::from_lookup(&lookup)?,
            tunnel: TunnelConfig::from_secrets(&secrets, &lookup)?,
            render_mode: render_mode_from_lookup(&lookup)?,
            openai: OpenAIConfig::from_lookup(secrets.openai_api_key, &lookup),
        })
    }
}
