//! Meal recommendation API route

use crate::error::ApiError;
use crate::services::recommendations::RecommendationService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use food4mood_shared::models::{Mood, UserProfile};
use serde::Deserialize;
use serde_json::Value;

/// Request body for the recommendation endpoint
///
/// The contract requires both fields; they are optional here so a
/// missing one maps to a 400 with the contract's error message instead
/// of a deserialization rejection.
#[derive(Debug, Deserialize)]
struct GenerateRequest {
    profile: Option<UserProfile>,
    mood: Option<Mood>,
}

/// Create recommendation routes
pub fn recommendation_routes() -> Router<AppState> {
    Router::new().route(
        "/recommendations",
        post(generate_recommendations).fallback(method_not_allowed),
    )
}

/// POST /api/v1/recommendations - Generate a one-day meal plan
async fn generate_recommendations(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<Value>, ApiError> {
    let Some(provider) = state.provider() else {
        return Err(ApiError::Configuration(
            "The application is not configured correctly. Missing API key.".to_string(),
        ));
    };

    let (Some(profile), Some(mood)) = (req.profile, req.mood) else {
        return Err(ApiError::BadRequest(
            "Missing profile or mood data in request.".to_string(),
        ));
    };

    let plan = RecommendationService::generate(provider.as_ref(), &profile, &mood).await?;
    Ok(Json(plan))
}

/// Any non-POST method on the endpoint
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
