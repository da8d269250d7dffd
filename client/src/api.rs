//! Recommendation API client
//!
//! Calls the recommendation endpoint and validates the response shape
//! before handing it to the UI. Errors carry user-displayable messages;
//! there is no retry logic at this layer, the caller decides whether to
//! re-invoke.

use food4mood_shared::models::{
    ApiResponse, ErrorResponse, Mood, RecommendationRequest, UserProfile,
};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Errors surfaced to the UI layer
#[derive(Error, Debug)]
pub enum ClientError {
    /// The endpoint answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A success body missing `mood_summary`, `recommendations`, or the
    /// main course slot. The UI offers a regenerate action for this case.
    #[error("Invalid response structure from API")]
    InvalidResponseStructure,

    #[error("Failed to reach the recommendation service: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// True when regenerating the request is the right user action
    pub fn is_invalid_structure(&self) -> bool {
        matches!(self, ClientError::InvalidResponseStructure)
    }
}

/// HTTP client for the recommendation endpoint
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecommendationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Request a one-day meal plan for the given profile and mood
    pub async fn generate_meal_recommendations(
        &self,
        profile: &UserProfile,
        mood: &Mood,
    ) -> Result<ApiResponse, ClientError> {
        let url = format!("{}/api/v1/recommendations", self.base_url);
        let body = RecommendationRequest {
            profile: profile.clone(),
            mood: mood.clone(),
        };

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Prefer the server's structured error body; fall back to the
            // status line when the body is not the expected shape.
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("Request failed with status {}", status));
            warn!(status = status.as_u16(), "Recommendation request failed: {}", message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let value: Value =
            serde_json::from_str(&text).map_err(|_| ClientError::InvalidResponseStructure)?;
        if !has_required_structure(&value) {
            return Err(ClientError::InvalidResponseStructure);
        }

        serde_json::from_value(value).map_err(|_| ClientError::InvalidResponseStructure)
    }
}

/// Check the fields whose absence the UI treats as "no dishes found"
fn has_required_structure(value: &Value) -> bool {
    let present = |v: Option<&Value>| v.is_some_and(|v| !v.is_null());
    present(value.get("mood_summary"))
        && present(value.get("recommendations"))
        && present(
            value
                .get("recommendations")
                .and_then(|r| r.get("main_course")),
        )
}
