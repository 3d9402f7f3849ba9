use async_trait::async_trait;

use super::errors::RecipeError;
use super::model::ItemName;

/// Service port for generating recipe text for a named item.
///
/// Implementations return the generated text trimmed of surrounding
/// whitespace, or the reason the generation failed.
#[async_trait]
pub trait RecipeGeneratorService: Send + Sync {
    async fn generate(&self, item_name: &ItemName) -> Result<String, RecipeError>;
}
