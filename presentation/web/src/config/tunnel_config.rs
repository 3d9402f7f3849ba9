use std::env;

use super::errors::ConfigError;
use super::secrets::{NGROK_AUTH_TOKEN, Secrets, required};

/// Tunnel settings. The hello server only needs this part of the secrets.
#[derive(Clone)]
pub struct TunnelConfig {
    pub auth_token: String,
    pub enabled: bool,
}

impl TunnelConfig {
    /// Environment variables:
    /// - NGROK_AUTH_TOKEN: authtoken for the tunnel (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_token = required(&lookup, NGROK_AUTH_TOKEN)
            .ok_or(ConfigError::MissingVariable(NGROK_AUTH_TOKEN))?;

        Ok(Self {
            auth_token,
            enabled: true,
        })
    }

    /// Environment variables:
    /// - TUNNEL_ENABLED: "true"/"false" (default: "true")
    pub fn from_secrets<F>(secrets: &Secrets, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let enabled = match lookup("TUNNEL_ENABLED") {
            None => true,
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidValue {
                name: "TUNNEL_ENABLED",
                value: raw,
            })?,
        };

        Ok(Self {
            auth_token: secrets.ngrok_auth_token.clone(),
            enabled,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
