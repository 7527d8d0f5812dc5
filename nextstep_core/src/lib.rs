//! Core of the nextstep career path recommender: the questionnaire state
//! machine, the option lists it draws from, and the client for the remote
//! recommendation service.

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod options;
pub mod types;
pub mod view;
pub mod wizard;

pub use client::{HttpRecommendationService, RecommendationService};
pub use config::ClientConfig;
pub use error::{ConfigError, RecommendationError, FETCH_FAILED_MESSAGE};
pub use fetch::{spawn_fetch, FetchHandle, FetchResult};
pub use types::{Recommendation, RecommendationRequest, RecommendationResponse};
pub use wizard::{Advance, FetchOutcome, Step, WizardController, WizardState};

pub const APP_TITLE: &str = "nextstep.ai - Career Path Recommender";

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        assert_eq!(get_version(), "0.1.0");
    }
}
