//! HTTP handlers for the article service.

pub mod generation;
pub mod health;
