use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::JsonBody;

use crate::dtos::{
    ArticleRequest, ArticleResponse, ErrorResponse, GenerateRequest, GenerateResponse,
};
use crate::startup::AppState;

/// Generate free-form text from a prompt
#[utoipa::path(
    post,
    path = "/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Text generated", body = GenerateResponse),
        (status = 400, description = "Prompt is empty", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Provider error", body = ErrorResponse)
    ),
    tag = "Generation"
)]
#[tracing::instrument(skip(state, request))]
pub async fn generate_text(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let params = request.params();
    tracing::debug!(
        prompt_len = request.prompt.len(),
        temperature = params.temperature,
        top_p = params.top_p,
        top_k = params.top_k,
        max_output_tokens = params.max_output_tokens,
        "Generate request received"
    );

    let response = state.generator.generate(&request).await?;
    Ok(Json(response))
}

/// Generate a structured article about a topic
#[utoipa::path(
    post,
    path = "/api/generate-article",
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article generated", body = ArticleResponse),
        (status = 400, description = "Prompt is empty", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Provider error", body = ErrorResponse)
    ),
    tag = "Generation"
)]
#[tracing::instrument(skip(state, request))]
pub async fn generate_article(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ArticleRequest>,
) -> Result<Json<ArticleResponse>, AppError> {
    tracing::debug!(topic_len = request.prompt.len(), "Article request received");

    let response = state.generator.generate_article(&request).await?;
    Ok(Json(response))
}
