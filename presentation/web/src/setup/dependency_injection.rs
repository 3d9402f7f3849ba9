use std::sync::Arc;

use logger::TracingLogger;
use openai::client::OpenAIClient;
use openai::recipe_generator::RecipeGeneratorOpenAI;
use tunnel::ngrok_publisher::NgrokTunnelPublisher;

use business::application::recipe::generate::GenerateRecipeUseCaseImpl;
use business::application::tunnel::publish::PublishTunnelUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::tunnel::use_cases::publish::PublishTunnelUseCase;

use crate::api::health::routes::HealthApi;
use crate::api::recipe::render::PageRenderer;
use crate::api::recipe::routes::RecipePages;
use crate::config::app_config::AppConfig;
use crate::config::tunnel_config::TunnelConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub recipe_pages: RecipePages,
    pub publish_tunnel_use_case: Arc<dyn PublishTunnelUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = HealthApi::new("recipe-web");

        // Infrastructure adapters
        let openai_client =
            OpenAIClient::with_base_url(config.openai.api_key.clone(), config.openai.base_url.clone());
        let recipe_generator = Arc::new(
            RecipeGeneratorOpenAI::new(openai_client)
                .with_model(config.openai.model.clone())
                .with_language(config.openai.language.clone()),
        );

        // Recipe use cases
        let generate_recipe_use_case = Arc::new(GenerateRecipeUseCaseImpl {
            generator: recipe_generator,
            logger: logger.clone(),
        });

        let renderer = PageRenderer::new(config.render_mode)?;
        let recipe_pages = RecipePages::new(generate_recipe_use_case, renderer);

        let publish_tunnel_use_case = publish_tunnel_use_case(&config.tunnel, logger);

        Ok(Self {
            health_api,
            recipe_pages,
            publish_tunnel_use_case,
        })
    }
}

/// Shared by both servers.
pub fn publish_tunnel_use_case(
    config: &TunnelConfig,
    logger: Arc<dyn Logger>,
) -> Arc<dyn PublishTunnelUseCase> {
    let publisher = Arc::new(NgrokTunnelPublisher::new(config.auth_token.clone()));
    Arc::new(PublishTunnelUseCaseImpl { publisher, logger })
}
