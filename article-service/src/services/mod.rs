pub mod generation;
pub mod providers;

pub use generation::{article_prompt, GenerationError, GenerationService};
