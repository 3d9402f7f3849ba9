use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::tunnel::errors::TunnelError;
use crate::domain::tunnel::model::PublishedTunnel;
use crate::domain::tunnel::services::TunnelPublisher;
use crate::domain::tunnel::use_cases::publish::{PublishTunnelParams, PublishTunnelUseCase};

pub struct PublishTunnelUseCaseImpl {
    pub publisher: Arc<dyn TunnelPublisher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PublishTunnelUseCase for PublishTunnelUseCaseImpl {
    async fn execute(&self, params: PublishTunnelParams) -> Result<PublishedTunnel, TunnelError> {
        self.logger.info(&format!(
            "Opening public tunnel to local port {}",
            params.local_port
        ));

        let tunnel = match self.publisher.publish(params.local_port).await {
            Ok(tunnel) => tunnel,
            Err(err) => {
                self.logger
                    .error(&format!("Tunnel could not be opened: {}", err));
                return Err(err);
            }
        };

        println!(" * ngrok tunnel URL: {}", tunnel.url);
        self.logger
            .info(&format!("Tunnel published at {}", tunnel.url));

        Ok(tunnel)
    }
}
