//! Recommendation service seam and its HTTP implementation.

use crate::config::ClientConfig;
use crate::error::{ConfigError, RecommendationError};
use crate::types::{Recommendation, RecommendationRequest, RecommendationResponse};
use reqwest::blocking::Client;
use std::time::Duration;

/// Anything that can turn a questionnaire into career recommendations
pub trait RecommendationService: Send + Sync {
    fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Recommendation>, RecommendationError>;
}

/// Talks to `POST {origin}/recommend` over HTTP
#[derive(Debug, Clone)]
pub struct HttpRecommendationService {
    endpoint: String,
    client: Client,
}

impl HttpRecommendationService {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        // No client-side timeout; the transport decides when to give up.
        let client = Client::builder().timeout(None::<Duration>).build()?;

        Ok(Self {
            endpoint: config.endpoint(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RecommendationService for HttpRecommendationService {
    fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Recommendation>, RecommendationError> {
        log::debug!(
            "[HTTP] POST {} ({} interests, {} strengths)",
            self.endpoint,
            request.interests.len(),
            request.strengths.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| RecommendationError::fetch_failed(format!("transport error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecommendationError::fetch_failed(format!(
                "service responded with {}",
                status
            )));
        }

        let body: RecommendationResponse = response.json().map_err(|e| {
            RecommendationError::fetch_failed(format!("malformed response body: {}", e))
        })?;

        let recommendations = body.into_recommendations();
        log::debug!("[HTTP] Received {} recommendations", recommendations.len());
        Ok(recommendations)
    }
}
