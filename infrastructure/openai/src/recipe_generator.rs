use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::ItemName;
use business::domain::recipe::services::RecipeGeneratorService;

use crate::client::OpenAIClient;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LANGUAGE: &str = "Japanese";

const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

pub struct RecipeGeneratorOpenAI {
    client: OpenAIClient,
    model: String,
    language: String,
}

impl RecipeGeneratorOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    fn build_prompt(item_name: &ItemName, language: &str) -> String {
        format!(
            r#"Write a recipe or preparation instructions for "{}".
Answer in {}.
List the ingredients first, then the steps.
Feel free to add a creative twist or an original variation."#,
            item_name, language
        )
    }

    fn build_body(&self, item_name: &ItemName) -> Value {
        json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": Self::build_prompt(item_name, &self.language)},
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        })
    }

    fn map_status(status: StatusCode) -> RecipeError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RecipeError::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => RecipeError::QuotaExceeded,
            other => RecipeError::Upstream(other.as_u16()),
        }
    }

    fn extract_text(data: &Value) -> Result<String, RecipeError> {
        let content = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or(RecipeError::MalformedResponse)?;

        let text = content.trim();
        if text.is_empty() {
            return Err(RecipeError::MalformedResponse);
        }

        Ok(text.to_string())
    }
}

#[async_trait]
impl RecipeGeneratorService for RecipeGeneratorOpenAI {
    async fn generate(&self, item_name: &ItemName) -> Result<String, RecipeError> {
        let body = self.build_body(item_name);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| RecipeError::Transport)?;

        if !response.status().is_success() {
            return Err(Self::map_status(response.status()));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|_| RecipeError::MalformedResponse)?;

        Self::extract_text(&data)
    }
}
