use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::services::providers::GenerationParams;

pub const EMPTY_PROMPT_MESSAGE: &str = "Prompt is required and cannot be empty";

fn validate_prompt(prompt: &str) -> Result<(), ValidationError> {
    if prompt.trim().is_empty() {
        return Err(ValidationError::new("empty_prompt")
            .with_message(Cow::Borrowed(EMPTY_PROMPT_MESSAGE)));
    }
    Ok(())
}

/// Free-form generation request. Omitted or `null` sampling parameters take their defaults.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct GenerateRequest {
    #[validate(custom(function = "validate_prompt"))]
    #[schema(example = "tell me a joke about ai")]
    pub prompt: String,

    #[serde(default)]
    #[schema(default = 0.9, example = 0.9)]
    pub temperature: Option<f32>,

    #[serde(default)]
    #[schema(default = 1.0, example = 1.0)]
    pub top_p: Option<f32>,

    #[serde(default)]
    #[schema(default = 1, example = 1)]
    pub top_k: Option<i32>,

    #[serde(default)]
    #[schema(default = 2048, example = 2048)]
    pub max_output_tokens: Option<i32>,
}

impl GenerateRequest {
    pub fn params(&self) -> GenerationParams {
        let defaults = GenerationParams::DEFAULT;
        GenerationParams {
            temperature: self.temperature.unwrap_or(defaults.temperature),
            top_p: self.top_p.unwrap_or(defaults.top_p),
            top_k: self.top_k.unwrap_or(defaults.top_k),
            max_output_tokens: self.max_output_tokens.unwrap_or(defaults.max_output_tokens),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    #[schema(example = "Why did the neural network break up? It needed more space.")]
    pub generated_text: String,
}

/// Article request: `prompt` is the topic, not the full instruction.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ArticleRequest {
    #[validate(custom(function = "validate_prompt"))]
    #[schema(example = "artificial intelligence")]
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub article: String,
}
