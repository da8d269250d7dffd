//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. All fields are
//! Arcs, so cloning per request is O(1).

use crate::config::AppConfig;
use crate::provider::{GeminiClient, MealPlanProvider};
use std::sync::Arc;
use tracing::warn;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    provider: Option<Arc<dyn MealPlanProvider>>,
}

impl AppState {
    /// Create application state from configuration
    ///
    /// A missing Gemini key is not fatal here: the server starts and the
    /// recommendation endpoint reports the configuration error per
    /// request instead.
    pub fn new(config: AppConfig) -> Self {
        let provider = match config.gemini.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Some(Arc::new(GeminiClient::new(
                key.to_string(),
                &config.gemini,
            )) as Arc<dyn MealPlanProvider>),
            _ => {
                warn!("Gemini API key is not configured; recommendation requests will fail");
                None
            }
        };

        Self {
            config: Arc::new(config),
            provider,
        }
    }

    /// Create state with an explicit provider (used by tests)
    pub fn with_provider(
        config: AppConfig,
        provider: Option<Arc<dyn MealPlanProvider>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the configured provider, if any
    #[inline]
    pub fn provider(&self) -> Option<&Arc<dyn MealPlanProvider>> {
        self.provider.as_ref()
    }
}
