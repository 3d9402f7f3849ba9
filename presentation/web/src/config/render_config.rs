use crate::api::recipe::render::RenderMode;

use super::errors::ConfigError;

/// Environment variables:
/// - HTML_RENDER_MODE: "raw" or "escaped" (default: "raw")
pub fn render_mode_from_lookup<F>(lookup: F) -> Result<RenderMode, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup("HTML_RENDER_MODE") {
        None => Ok(RenderMode::Raw),
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            name: "HTML_RENDER_MODE",
            value: raw,
        }),
    }
}
