use thiserror::Error;

/// Message shown to the user whenever a recommendation fetch fails
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch recommendations. Please try again.";

/// The single failure kind of the recommendation round trip.
///
/// Transport errors, non-success statuses and malformed bodies are all folded
/// into `FetchFailed`; `detail` carries the operator diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendationError {
    #[error("Recommendation fetch failed: {detail}")]
    FetchFailed { detail: String },
}

impl RecommendationError {
    pub fn fetch_failed(detail: impl Into<String>) -> Self {
        Self::FetchFailed {
            detail: detail.into(),
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::FetchFailed { detail } => detail,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid service origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_display_includes_detail() {
        let err = RecommendationError::fetch_failed("service responded with 503");
        assert_eq!(err.detail(), "service responded with 503");
        assert!(err.to_string().contains("503"));
    }
}
