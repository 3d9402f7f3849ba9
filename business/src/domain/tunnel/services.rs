use async_trait::async_trait;

use super::errors::TunnelError;
use super::model::PublishedTunnel;

/// Service port for exposing a local port under a public URL.
#[async_trait]
pub trait TunnelPublisher: Send + Sync {
    async fn publish(&self, local_port: u16) -> Result<PublishedTunnel, TunnelError>;
}
