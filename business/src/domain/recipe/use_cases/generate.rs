use async_trait::async_trait;

use crate::domain::recipe::model::{ItemName, RecipeOutcome};

pub struct GenerateRecipeParams {
    pub item_name: ItemName,
}

#[async_trait]
pub trait GenerateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: GenerateRecipeParams) -> RecipeOutcome;
}
