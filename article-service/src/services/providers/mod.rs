//! Text generation provider abstraction.
//!
//! The service talks to its provider only through [`TextProvider`], so the
//! Gemini backend can be swapped for the mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited by provider")]
    RateLimited,

    #[error("Content filtered: {0}")]
    ContentFiltered(String),

    #[error("Provider returned no text")]
    EmptyResponse,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Sampling parameters forwarded to the provider as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: i32,
    pub max_output_tokens: i32,
}

impl GenerationParams {
    /// Defaults for free-form generation.
    pub const DEFAULT: Self = Self {
        temperature: 0.9,
        top_p: 1.0,
        top_k: 1,
        max_output_tokens: 2048,
    };

    /// Fixed preset for long-form article output.
    pub const ARTICLE: Self = Self {
        temperature: 0.7,
        top_p: 0.95,
        top_k: 40,
        max_output_tokens: 3000,
    };
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    Other,
}

impl FinishReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishReason::Complete => "complete",
            FinishReason::Length => "length",
            FinishReason::Other => "other",
        }
    }
}

/// Result of a successful provider call.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub text: String,
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub finish_reason: FinishReason,
}

#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate text for a single prompt.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Model identifier, for logs and metrics.
    fn model(&self) -> &str;

    /// Verify the provider is reachable with the configured credential.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
