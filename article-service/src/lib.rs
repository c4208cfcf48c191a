//! AI article generator service.
//!
//! Validates prompts, forwards them to a text generation provider (Gemini) and
//! returns the generated text as JSON.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

use utoipa::OpenApi;

pub use startup::{build_router, AppState, Application};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Article Generator API",
        description = "Generate articles using Google's Gemini AI"
    ),
    paths(
        handlers::health::root,
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::generation::generate_text,
        handlers::generation::generate_article,
    ),
    components(schemas(
        dtos::GenerateRequest,
        dtos::GenerateResponse,
        dtos::ArticleRequest,
        dtos::ArticleResponse,
        dtos::HealthResponse,
        dtos::ServiceInfo,
        dtos::Endpoints,
        dtos::ErrorResponse,
    )),
    tags(
        (name = "Generation", description = "Prompt-driven text and article generation"),
        (name = "Observability", description = "Service health and metadata"),
    )
)]
pub struct ApiDoc;
