use std::sync::Arc;

use dotenvy::dotenv;

use business::domain::tunnel::use_cases::publish::PublishTunnelParams;
use logger::TracingLogger;
use recipe_web::config::{server_config::ServerConfig, tunnel_config::TunnelConfig};
use recipe_web::init_tracing;
use recipe_web::setup::{dependency_injection::publish_tunnel_use_case, server};

/// Hello server entry point
///
/// Publishes the ngrok tunnel and serves a static page.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenv().ok();

    let tunnel_config = TunnelConfig::from_env()?;
    let server_config = ServerConfig::from_env()?;

    let _tunnel = publish_tunnel_use_case(&tunnel_config, Arc::new(TracingLogger))
        .execute(PublishTunnelParams {
            local_port: server_config.port,
        })
        .await?;

    server::Server::run(&server_config, server::hello_app()).await?;

    Ok(())
}
