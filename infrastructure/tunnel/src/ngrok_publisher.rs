use async_trait::async_trait;
use ngrok::prelude::*;
use url::Url;

use business::domain::tunnel::errors::TunnelError;
use business::domain::tunnel::model::{PublicUrl, PublishedTunnel};
use business::domain::tunnel::services::TunnelPublisher;

/// ngrok error codes returned when the authtoken is malformed, revoked or
/// unknown.
const AUTH_ERROR_CODES: &[&str] = &["ERR_NGROK_105", "ERR_NGROK_106", "ERR_NGROK_107"];

pub struct NgrokTunnelPublisher {
    auth_token: String,
}

impl NgrokTunnelPublisher {
    pub fn new(auth_token: String) -> Self {
        Self { auth_token }
    }

    fn forward_target(local_port: u16) -> Result<Url, TunnelError> {
        let raw = format!("http://localhost:{}", local_port);
        Url::parse(&raw).map_err(|_| TunnelError::InvalidUrl(raw))
    }

    fn classify(code: Option<&str>, message: String) -> TunnelError {
        match code {
            Some(code) if AUTH_ERROR_CODES.contains(&code) => TunnelError::AuthFailed,
            _ => TunnelError::ConnectionFailed(message),
        }
    }
}

#[async_trait]
impl TunnelPublisher for NgrokTunnelPublisher {
    async fn publish(&self, local_port: u16) -> Result<PublishedTunnel, TunnelError> {
        if self.auth_token.trim().is_empty() {
            return Err(TunnelError::AuthFailed);
        }

        let target = Self::forward_target(local_port)?;

        let session = ngrok::Session::builder()
            .authtoken(self.auth_token.clone())
            .connect()
            .await
            .map_err(|e| Self::classify(e.error_code(), e.to_string()))?;

        let forwarder = session
            .http_endpoint()
            .listen_and_forward(target)
            .await
            .map_err(|e| Self::classify(e.error_code(), e.to_string()))?;

        let url = PublicUrl::parse(forwarder.url())?;

        // The session must outlive the forwarder or the endpoint goes away.
        Ok(PublishedTunnel::new(url, (session, forwarder)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_fail_auth_when_token_empty() {
        let publisher = NgrokTunnelPublisher::new("   ".to_string());

        let result = publisher.publish(5000).await;

        assert!(matches!(result.unwrap_err(), TunnelError::AuthFailed));
    }

    #[test]
    fn should_forward_to_localhost_port() {
        let url = NgrokTunnelPublisher::forward_target(5000).unwrap();

        assert_eq!(url.as_str(), "http://localhost:5000/");
    }

    #[test]
    fn should_classify_invalid_token_codes_as_auth_failure() {
        for code in AUTH_ERROR_CODES {
            let err = NgrokTunnelPublisher::classify(Some(code), "rejected".to_string());
            assert!(matches!(err, TunnelError::AuthFailed));
        }
    }

    #[test]
    fn should_classify_other_errors_as_connection_failure() {
        let err = NgrokTunnelPublisher::classify(None, "dns error".to_string());

        assert_eq!(err, TunnelError::ConnectionFailed("dns error".to_string()));
    }

    #[tokio::test]
    #[ignore = "needs network access and NGROK_AUTH_TOKEN"]
    async fn should_publish_https_url_when_token_valid() {
        let token = std::env::var("NGROK_AUTH_TOKEN").unwrap();
        let publisher = NgrokTunnelPublisher::new(token);

        let tunnel = publisher.publish(5000).await.unwrap();

        assert!(tunnel.url.as_str().starts_with("https://"));
    }

    #[tokio::test]
    #[ignore = "needs network access"]
    async fn should_fail_auth_when_token_invalid() {
        let publisher = NgrokTunnelPublisher::new("definitely-not-a-token".to_string());

        let result = publisher.publish(5000).await;

        assert!(matches!(result.unwrap_err(), TunnelError::AuthFailed));
    }
}
