use std::any::Any;

use url::Url;

use super::errors::TunnelError;

/// Publicly reachable URL handed out by the tunneling provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUrl(Url);

impl PublicUrl {
    /// Parses a provider URL. Only `https` and `http` endpoints with a host
    /// are accepted.
    pub fn parse(raw: &str) -> Result<Self, TunnelError> {
        let url = Url::parse(raw).map_err(|_| TunnelError::InvalidUrl(raw.to_string()))?;

        if !matches!(url.scheme(), "https" | "http") || url.host_str().is_none() {
            return Err(TunnelError::InvalidUrl(raw.to_string()));
        }

        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }
}

impl std::fmt::Display for PublicUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An open tunnel. The endpoint stays published for as long as this value
/// is alive.
pub struct PublishedTunnel {
    pub url: PublicUrl,
    _guard: Box<dyn Any + Send>,
}

impl PublishedTunnel {
    pub fn new(url: PublicUrl, guard: impl Any + Send) -> Self {
        Self {
            url,
            _guard: Box::new(guard),
        }
    }
}

impl std::fmt::Debug for PublishedTunnel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishedTunnel")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}
