use poem::{Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::api::health::routes::HealthApi;
use crate::api::hello;
use crate::config::server_config::ServerConfig;
use crate::setup::dependency_injection::DependencyContainer;

pub struct Server;

impl Server {
    pub async fn run<E>(config: &ServerConfig, app: E) -> anyhow::Result<()>
    where
        E: Endpoint + 'static,
    {
        let addr = config.bind_address();
        println!("Server running at http://{}", addr);
        PoemServer::new(TcpListener::bind(&addr))
            .run(app.with(Tracing))
            .await?;
        Ok(())
    }
}

/// HTML pages at the root, health API under `/api`, plus Swagger UI.
pub fn recipe_app(config: &ServerConfig, container: DependencyContainer) -> impl Endpoint + 'static {
    let addr = config.bind_address();
    let api_service = OpenApiService::new(container.health_api, "Recipe Web API", "0.1.0")
        .server(format!("http://{}/api", addr));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();
    println!("Swagger UI at http://{}/docs", addr);

    Route::new()
        .nest("/", container.recipe_pages.routes())
        .nest("/api", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
}

pub fn hello_app() -> impl Endpoint + 'static {
    let api_service = OpenApiService::new(HealthApi::new("hello-web"), "Hello Web API", "0.1.0");

    Route::new()
        .nest("/", hello::routes::routes())
        .nest("/api", api_service)
}
