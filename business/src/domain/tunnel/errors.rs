#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TunnelError {
    #[error("tunnel.auth_failed")]
    AuthFailed,
    #[error("tunnel.connection_failed: {0}")]
    ConnectionFailed(String),
    #[error("tunnel.invalid_url: {0}")]
    InvalidUrl(String),
}
