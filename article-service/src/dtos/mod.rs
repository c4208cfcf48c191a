pub mod generation;
pub mod service;

pub use generation::{ArticleRequest, ArticleResponse, GenerateRequest, GenerateResponse};
pub use service::{Endpoints, HealthResponse, ServiceInfo};
pub use service_core::error::ErrorResponse;
