use serde::{Deserialize, Serialize};

/// A single career suggestion returned by the recommendation service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub career: String,
    pub description: String,
    /// Ordered steps toward the career
    pub roadmap: Vec<String>,
}

/// Body of `POST /recommend`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub name: String,
    pub interests: Vec<String>,
    pub strengths: Vec<String>,
}

/// Success body of `POST /recommend`
///
/// The service may omit `recommendations` or send `null`; both mean "none".
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
}

impl RecommendationResponse {
    pub fn into_recommendations(self) -> Vec<Recommendation> {
        self.recommendations.unwrap_or_default()
    }
}
