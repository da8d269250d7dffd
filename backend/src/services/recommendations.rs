//! Recommendation service - prompt assembly, provider call, response
//! normalization

use crate::error::ApiError;
use crate::provider::{strip_code_fences, MealPlanProvider};
use food4mood_shared::contract::{build_prompt, response_schema};
use food4mood_shared::models::{Mood, UserProfile};
use food4mood_shared::validation::{validate_mood, validate_profile};
use serde_json::Value;
use tracing::{debug, error};

/// Recommendation service
pub struct RecommendationService;

impl RecommendationService {
    /// Generate a one-day meal plan for the given profile and mood
    ///
    /// Inputs are validated before the provider is invoked. The provider
    /// output is normalized (fence stripping) and parsed as JSON; the
    /// full meal-slot shape is the consumer's concern, so the parsed
    /// value is forwarded as-is. There are no retries at this layer.
    pub async fn generate(
        provider: &dyn MealPlanProvider,
        profile: &UserProfile,
        mood: &Mood,
    ) -> Result<Value, ApiError> {
        validate_profile(profile).map_err(ApiError::Validation)?;
        validate_mood(mood).map_err(ApiError::Validation)?;

        let prompt = build_prompt(profile, mood);
        debug!(prompt_len = prompt.len(), "Requesting meal plan from provider");

        let raw = provider
            .generate(&prompt, response_schema())
            .await
            .map_err(|e| {
                error!("Provider call failed: {}", e);
                ApiError::Provider(e.to_string())
            })?;

        let json_text = strip_code_fences(&raw);
        serde_json::from_str(json_text).map_err(|e| {
            error!("Provider returned unparseable JSON: {}", e);
            ApiError::Provider(format!("Could not parse the model response as JSON: {}", e))
        })
    }
}
