//! Prompt validation, article prompt construction and the provider call.

use crate::dtos::{ArticleRequest, ArticleResponse, GenerateRequest, GenerateResponse};
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use metrics::{counter, histogram};
use service_core::error::AppError;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Prompt is required and cannot be empty")]
    EmptyPrompt,

    #[error("Error generating {operation}: {source}")]
    Provider {
        operation: &'static str,
        source: ProviderError,
    },
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::EmptyPrompt => AppError::BadRequest(anyhow::anyhow!(err.to_string())),
            GenerationError::Provider { .. } => {
                AppError::InternalError(anyhow::anyhow!(err.to_string()))
            }
        }
    }
}

/// Wrap a topic into the article instruction. The topic appears once, verbatim.
pub fn article_prompt(topic: &str) -> String {
    format!(
        "Write a comprehensive, well-structured article about: {topic}\n\
         \n\
         Please include:\n\
         - An engaging introduction\n\
         - Clear main points with explanations\n\
         - Relevant examples or details\n\
         - A thoughtful conclusion\n\
         \n\
         Make it informative, engaging, and well-formatted with proper paragraphs.\n"
    )
}

#[derive(Clone)]
pub struct GenerationService {
    provider: Arc<dyn TextProvider>,
}

impl GenerationService {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<dyn TextProvider> {
        &self.provider
    }

    /// Forward a free-form prompt with the caller's sampling parameters.
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenerationError> {
        request
            .validate()
            .map_err(|_| GenerationError::EmptyPrompt)?;

        let generated_text = self
            .call_provider("content", &request.prompt, &request.params())
            .await?;

        Ok(GenerateResponse { generated_text })
    }

    /// Generate an article about the requested topic with the fixed article preset.
    pub async fn generate_article(
        &self,
        request: &ArticleRequest,
    ) -> Result<ArticleResponse, GenerationError> {
        request
            .validate()
            .map_err(|_| GenerationError::EmptyPrompt)?;

        let prompt = article_prompt(&request.prompt);
        let article = self
            .call_provider("article", &prompt, &GenerationParams::ARTICLE)
            .await?;

        Ok(ArticleResponse { article })
    }

    async fn call_provider(
        &self,
        operation: &'static str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerationError> {
        let start = Instant::now();
        let result = self.provider.generate(prompt, params).await;
        histogram!("genai_provider_latency_seconds", "operation" => operation)
            .record(start.elapsed().as_secs_f64());

        match result {
            Ok(response) => {
                counter!("genai_requests_total", "operation" => operation, "outcome" => "success")
                    .increment(1);
                counter!("genai_tokens_total", "type" => "input")
                    .increment(response.input_tokens.max(0) as u64);
                counter!("genai_tokens_total", "type" => "output")
                    .increment(response.output_tokens.max(0) as u64);

                tracing::info!(
                    operation,
                    model = %self.provider.model(),
                    finish_reason = response.finish_reason.as_str(),
                    output_len = response.text.len(),
                    "Generation completed"
                );
                Ok(response.text)
            }
            Err(e) => {
                counter!("genai_requests_total", "operation" => operation, "outcome" => "error")
                    .increment(1);
                tracing::error!(
                    operation,
                    model = %self.provider.model(),
                    error = %e,
                    "Provider call failed"
                );
                Err(GenerationError::Provider {
                    operation,
                    source: e,
                })
            }
        }
    }
}
