use crate::error::ConfigError;
use reqwest::Url;

pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:5000";

/// Where the recommendation service lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    origin: String,
}

impl ClientConfig {
    pub fn new(origin: &str) -> Result<Self, ConfigError> {
        let trimmed = origin.trim().trim_end_matches('/');
        let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidOrigin {
            origin: origin.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidOrigin {
                origin: origin.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(Self {
            origin: trimmed.to_string(),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Full URL of the recommend endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/recommend", self.origin)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(
            ClientConfig::default().endpoint(),
            "http://127.0.0.1:5000/recommend"
        );
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = ClientConfig::new("https://careers.example.com/").unwrap();
        assert_eq!(config.origin(), "https://careers.example.com");
        assert_eq!(config.endpoint(), "https://careers.example.com/recommend");
    }

    #[test]
    fn test_rejects_garbage_origin() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ConfigError::InvalidOrigin { .. })
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = ClientConfig::new("ftp://127.0.0.1").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }
}
