use std::sync::Arc;

use poem::error::InternalServerError;
use poem::web::{Data, Form, Html};
use poem::{Endpoint, EndpointExt, Route, get, handler, post};
use serde::Deserialize;

use business::domain::recipe::model::ItemName;
use business::domain::recipe::use_cases::generate::{GenerateRecipeParams, GenerateRecipeUseCase};

use crate::api::recipe::render::{NO_ITEM_NAME_PAGE, PageRenderer, RecipePage};

#[derive(Debug, Deserialize)]
pub struct GenerateRecipeForm {
    pub item_name: Option<String>,
}

/// HTML pages of the recipe generator.
pub struct RecipePages {
    generate_use_case: Arc<dyn GenerateRecipeUseCase>,
    renderer: PageRenderer,
}

impl RecipePages {
    pub fn new(generate_use_case: Arc<dyn GenerateRecipeUseCase>, renderer: PageRenderer) -> Self {
        Self {
            generate_use_case,
            renderer,
        }
    }

    /// `GET /` and `POST /generate`.
    pub fn routes(self) -> impl Endpoint + 'static {
        Route::new()
            .at("/", get(index))
            .at("/generate", post(generate))
            .data(Arc::new(self))
    }
}

#[handler]
async fn index(Data(pages): Data<&Arc<RecipePages>>) -> poem::Result<Html<String>> {
    let html = pages.renderer.index().map_err(InternalServerError)?;
    Ok(Html(html))
}

/// Answers 200 in every case: a missing name yields a short apology page and
/// a failed generation yields the sentinel text.
#[handler]
async fn generate(
    Data(pages): Data<&Arc<RecipePages>>,
    form: Option<Form<GenerateRecipeForm>>,
) -> poem::Result<Html<String>> {
    let raw = form.and_then(|Form(form)| form.item_name);

    let item_name = match raw.as_deref().map(ItemName::new) {
        Some(Ok(item_name)) => item_name,
        _ => return Ok(Html(NO_ITEM_NAME_PAGE.to_string())),
    };

    let outcome = pages
        .generate_use_case
        .execute(GenerateRecipeParams { item_name })
        .await;

    let html = pages
        .renderer
        .recipe(&RecipePage::from_outcome(&outcome))
        .map_err(InternalServerError)?;

    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::application::recipe::generate::GenerateRecipeUseCaseImpl;
    use business::domain::logger::Logger;
    use business::domain::recipe::errors::RecipeError;
    use business::domain::recipe::services::RecipeGeneratorService;
    use mockall::mock;
    use poem::http::StatusCode;
    use poem::test::{TestClient, TestResponse};

    use crate::api::recipe::render::{FAILURE_SENTINEL, RenderMode};

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

    fn client_with(generator: MockRecipeGenerator) -> TestClient<impl Endpoint> {
        let use_case = Arc::new(GenerateRecipeUseCaseImpl {
            generator: Arc::new(generator),
            logger: mock_logger(),
        });
        let renderer = PageRenderer::new(RenderMode::Raw).unwrap();
        TestClient::new(RecipePages::new(use_case, renderer).routes())
    }

    fn never_called() -> MockRecipeGenerator {
        let mut generator = MockRecipeGenerator::new();
        generator.expect_generate().never();
        generator
    }

    async fn body_of(response: TestResponse) -> String {
        response.0.into_body().into_string().await.unwrap()
    }

    #[tokio::test]
    async fn should_serve_form_on_index() {
        let cli = client_with(never_called());

        let response = cli.get("/").send().await;

        response.assert_status_is_ok();
        let body = body_of(response).await;
        assert!(body.contains("<form"));
        assert!(body.contains(r#"name="item_name""#));
    }

    #[tokio::test]
    async fn should_apologize_without_calling_generator_when_name_omitted() {
        let cli = client_with(never_called());

        let response = cli
            .post("/generate")
            .form(&[("other", "value")])
            .send()
            .await;

        response.assert_status_is_ok();
        assert_eq!(body_of(response).await, NO_ITEM_NAME_PAGE);
    }

    #[tokio::test]
    async fn should_apologize_without_calling_generator_when_name_blank() {
        let cli = client_with(never_called());

        let response = cli
            .post("/generate")
            .form(&[("item_name", "   ")])
            .send()
            .await;

        response.assert_status_is_ok();
        assert!(body_of(response).await.contains("No item name was provided."));
    }

    #[tokio::test]
    async fn should_apologize_when_body_is_not_a_form() {
        let cli = client_with(never_called());

        let response = cli.post("/generate").send().await;

        response.assert_status_is_ok();
        assert_eq!(body_of(response).await, NO_ITEM_NAME_PAGE);
    }

    #[tokio::test]
    async fn should_render_generated_recipe_for_item() {
        let mut generator = MockRecipeGenerator::new();
        generator
            .expect_generate()
            .withf(|name| name.as_str() == "mojito")
            .times(1)
            .returning(|_| Ok("Shake with ice.".to_string()));
        let cli = client_with(generator);

        let response = cli
            .post("/generate")
            .form(&[("item_name", " mojito ")])
            .send()
            .await;

        response.assert_status_is_ok();
        let body = body_of(response).await;
        assert!(body.contains("mojito"));
        assert!(body.contains("Shake with ice."));
        assert!(body.contains(r#"<a href="/">"#));
    }

    #[tokio::test]
    async fn should_render_sentinel_with_ok_status_when_generator_fails() {
        let mut generator = MockRecipeGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(RecipeError::Transport));
        let cli = client_with(generator);

        let response = cli
            .post("/generate")
            .form(&[("item_name", "mojito")])
            .send()
            .await;

        response.assert_status(StatusCode::OK);
        assert!(body_of(response).await.contains(FAILURE_SENTINEL));
    }

    #[tokio::test]
    async fn should_render_identical_bodies_for_identical_submissions() {
        let mut generator = MockRecipeGenerator::new();
        generator
            .expect_generate()
            .times(2)
            .returning(|_| Ok("Muddle mint, add rum.".to_string()));
        let cli = client_with(generator);

        let first = cli
            .post("/generate")
            .form(&[("item_name", "mojito")])
            .send()
            .await;
        let second = cli
            .post("/generate")
            .form(&[("item_name", "mojito")])
            .send()
            .await;

        assert_eq!(body_of(first).await, body_of(second).await);
    }
}
