use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SERVICE_NAME: &str = "AI Article Generator API";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Static descriptor returned by the root endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    #[schema(example = "AI Article Generator API")]
    pub message: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Endpoints {
    pub generate: String,
    pub generate_article: String,
    pub health: String,
    pub docs: String,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            message: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: Endpoints {
                generate: "/generate".to_string(),
                generate_article: "/api/generate-article".to_string(),
                health: "/health".to_string(),
                docs: "/docs".to_string(),
            },
        }
    }
}
