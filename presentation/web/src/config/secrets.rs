use std::env;

use super::errors::ConfigError;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const NGROK_AUTH_TOKEN: &str = "NGROK_AUTH_TOKEN";

/// Reads a required variable, treating blank values as missing.
pub(crate) fn required<F>(lookup: &F, name: &'static str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// The two secrets the recipe server needs. Loaded once at startup and
/// handed to the adapters that use them.
#[derive(Clone)]
pub struct Secrets {
    pub openai_api_key: String,
    pub ngrok_auth_token: String,
}

impl Secrets {
    /// Environment variables:
    /// - OPENAI_API_KEY: key for the text generation API (required)
    /// - NGROK_AUTH_TOKEN: authtoken for the tunnel (required)
    ///
    /// # Errors
    /// Returns an error naming every variable that is missing or blank
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = required(&lookup, OPENAI_API_KEY);
        let ngrok_auth_token = required(&lookup, NGROK_AUTH_TOKEN);

        match (openai_api_key, ngrok_auth_token) {
            (Some(openai_api_key), Some(ngrok_auth_token)) => Ok(Self {
                openai_api_key,
                ngrok_auth_token,
            }),
            (None, Some(_)) => Err(ConfigError::MissingVariable(OPENAI_API_KEY)),
            (Some(_), None) => Err(ConfigError::MissingVariable(NGROK_AUTH_TOKEN)),
            (None, None) => Err(ConfigError::MissingVariables(vec![
                OPENAI_API_KEY,
                NGROK_AUTH_TOKEN,
            ])),
        }
    }
}

// Secrets never show up in logs.
impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("openai_api_key", &"***")
            .field("ngrok_auth_token", &"***")
            .finish()
    }
}
