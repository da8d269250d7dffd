//! Common test utilities for integration tests
//!
//! This module provides a stub provider and an in-process router harness
//! shared by the integration tests.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use food4mood_backend::config::AppConfig;
use food4mood_backend::provider::{MealPlanProvider, ProviderError};
use food4mood_backend::routes;
use food4mood_backend::state::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Provider stub returning a canned payload or a canned failure
pub struct StubProvider {
    reply: Result<String, String>,
}

#[async_trait]
impl MealPlanProvider for StubProvider {
    async fn generate(
        &self,
        _prompt: &str,
        _response_schema: serde_json::Value,
    ) -> Result<String, ProviderError> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(body) => Err(ProviderError::Status {
                status: 503,
                body: body.clone(),
            }),
        }
    }
}

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a test application whose provider returns `reply`
    pub fn with_provider(reply: Result<String, String>) -> Self {
        let state = AppState::with_provider(
            AppConfig::default(),
            Some(Arc::new(StubProvider { reply })),
        );
        Self {
            app: routes::create_router(state),
        }
    }

    /// Create a test application with no provider configured
    pub fn without_provider() -> Self {
        let state = AppState::with_provider(AppConfig::default(), None);
        Self {
            app: routes::create_router(state),
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}
