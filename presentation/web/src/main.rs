use dotenvy::dotenv;

use business::domain::tunnel::use_cases::publish::PublishTunnelParams;
use recipe_web::config::app_config::AppConfig;
use recipe_web::init_tracing;
use recipe_web::setup::{dependency_injection::DependencyContainer, server};

/// Recipe server entry point
///
/// Validates configuration, optionally publishes the ngrok tunnel, and serves
/// the recipe form.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration, aborting on any missing secret
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Publish tunnel; held until the server stops
    let _tunnel = if config.tunnel.enabled {
        let tunnel = container
            .publish_tunnel_use_case
            .execute(PublishTunnelParams {
                local_port: config.server.port,
            })
            .await?;
        Some(tunnel)
    } else {
        tracing::info!("Tunnel disabled, serving locally only");
        None
    };

    // 6. Run server
    let app = server::recipe_app(&config.server, container);
    server::Server::run(&config.server, app).await?;

    Ok(())
}
