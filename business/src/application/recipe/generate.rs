use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::model::RecipeOutcome;
use crate::domain::recipe::services::RecipeGeneratorService;
use crate::domain::recipe::use_cases::generate::{GenerateRecipeParams, GenerateRecipeUseCase};

pub struct GenerateRecipeUseCaseImpl {
    pub generator: Arc<dyn RecipeGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateRecipeUseCase for GenerateRecipeUseCaseImpl {
    async fn execute(&self, params: GenerateRecipeParams) -> RecipeOutcome {
        let item_name = params.item_name;
        self.logger
            .info(&format!("Generating recipe for: {}", item_name));

        match self.generator.generate(&item_name).await {
            Ok(text) => {
                self.logger.debug(&format!(
                    "Generated {} characters for: {}",
                    text.chars().count(),
                    item_name
                ));
                RecipeOutcome::Generated { item_name, text }
            }
            Err(reason) => {
                self.logger.error(&format!(
                    "Recipe generation failed for {}: {}",
                    item_name, reason
                ));
                RecipeOutcome::Failed { item_name, reason }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::errors::RecipeError;
    use crate::domain::recipe::model::ItemName;
    use mockall::mock;

    mock! {
        pub RecipeGenerator {}

        #[async_trait]
        impl RecipeGeneratorService for RecipeGenerator {
            async fn generate(&self, item_name: &ItemName) -> Result<String, RecipeError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(name: &str) -> GenerateRecipeParams {
        GenerateRecipeParams {
            item_name: ItemName::new(name).unwrap(),
        }
    }

    #[tokio::test]
    async fn should_return_generated_text_when_generator_succeeds() {
        let mut mock_generator = MockRecipeGenerator::new();
        mock_generator
            .expect_generate()
            .withf(|name| name.as_str() == "mojito")
            .times(1)
            .returning(|_| Ok("Shake with ice.".to_string()));

        let use_case = GenerateRecipeUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let outcome = use_case.execute(params("mojito")).await;

        assert_eq!(
            outcome,
            RecipeOutcome::Generated {
                item_name: ItemName::new("mojito").unwrap(),
                text: "Shake with ice.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn should_return_failed_outcome_when_generator_errors() {
        let mut mock_generator = MockRecipeGenerator::new();
        mock_generator
            .expect_generate()
            .returning(|_| Err(RecipeError::QuotaExceeded));

        let use_case = GenerateRecipeUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let outcome = use_case.execute(params("sangria")).await;

        assert!(matches!(
            outcome,
            RecipeOutcome::Failed {
                reason: RecipeError::QuotaExceeded,
                ..
            }
        ));
        assert_eq!(outcome.item_name().as_str(), "sangria");
    }

    #[tokio::test]
    async fn should_log_error_when_generation_fails() {
        let mut mock_generator = MockRecipeGenerator::new();
        mock_generator
            .expect_generate()
            .returning(|_| Err(RecipeError::Unauthorized));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_error()
            .withf(|message| message.contains("recipe.unauthorized"))
            .times(1)
            .returning(|_| ());

        let use_case = GenerateRecipeUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: Arc::new(logger),
        };

        let outcome = use_case.execute(params("croquetas")).await;

        assert!(!outcome.is_generated());
    }
}
