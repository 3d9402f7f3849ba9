use async_trait::async_trait;

use crate::domain::tunnel::errors::TunnelError;
use crate::domain::tunnel::model::PublishedTunnel;

pub struct PublishTunnelParams {
    pub local_port: u16,
}

#[async_trait]
pub trait PublishTunnelUseCase: Send + Sync {
    async fn execute(&self, params: PublishTunnelParams) -> Result<PublishedTunnel, TunnelError>;
}
