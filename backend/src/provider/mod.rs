//! Meal plan provider port
//!
//! The backend talks to the generative model through the
//! [`MealPlanProvider`] trait so the HTTP layer can be exercised with a
//! stub and the concrete provider can change without touching handlers.

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

/// Provider-facing error type
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider returned no candidates")]
    EmptyResponse,
}

/// A text-generation provider constrained by an output schema
#[async_trait]
pub trait MealPlanProvider: Send + Sync {
    /// Generate raw text for `prompt`, constrained by `response_schema`.
    /// The returned text is expected to be JSON, possibly wrapped in
    /// markdown code fences.
    async fn generate(
        &self,
        prompt: &str,
        response_schema: serde_json::Value,
    ) -> Result<String, ProviderError>;
}

/// Remove a single pair of markdown code-fence markers from provider output
///
/// Providers occasionally wrap their JSON in ```` ```json ```` fences even
/// when instructed not to. Only a leading ```` ```json ```` and a trailing
/// ```` ``` ```` are removed; any other wrapping is left for the JSON
/// parser to reject.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix("```json").unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unfenced("{\"a\":1}", "{\"a\":1}")]
    #[case::fenced("```json\n{\"a\":1}\n```", "{\"a\":1}")]
    #[case::whitespace("  \n{\"a\":1}\n  ", "{\"a\":1}")]
    fn fenced_and_unfenced_normalize_the_same(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_code_fences(input), expected);
    }

    #[test]
    fn other_wrappings_are_not_recovered() {
        // A bare opening fence is not the documented hedge; leave it for
        // the JSON parser to reject.
        let wrapped = "```\n{\"a\":1}\n```";
        assert_eq!(strip_code_fences(wrapped), "```\n{\"a\":1}");
    }
}
