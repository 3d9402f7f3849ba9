use openai::client::DEFAULT_BASE_URL;
use openai::recipe_generator::{DEFAULT_LANGUAGE, DEFAULT_MODEL};

/// Configuration for OpenAI API access.
#[derive(Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub language: String,
}

impl OpenAIConfig {
    /// Environment variables:
    /// - OPENAI_BASE_URL (default: "https://api.openai.com/v1")
    /// - OPENAI_MODEL (default: "gpt-4o-mini")
    /// - RECIPE_LANGUAGE: language the recipe is written in (default: "Japanese")
    pub fn from_lookup<F>(api_key: String, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            api_key,
            base_url: non_blank("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_blank("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            language: non_blank("RECIPE_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_unset() {
        let config = OpenAIConfig::from_lookup("sk-test".to_string(), |_| None);

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.language, "Japanese");
    }

    #[test]
    fn should_override_language_when_set() {
        let config = OpenAIConfig::from_lookup("sk-test".to_string(), |name| match name {
            "RECIPE_LANGUAGE" => Some("Spanish".to_string()),
            _ => None,
        });

        assert_eq!(config.language, "Spanish");
    }
}
