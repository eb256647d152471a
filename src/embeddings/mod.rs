// Embeddings module
// Provider seam for turning text into fixed-length vectors

pub mod openai;

use async_trait::async_trait;

use crate::Result;

pub use openai::EmbeddingClient;

/// A text-embedding provider.
///
/// One call per text, no internal retries and no caching; callers decide
/// whether a failed call is retried or aborts the surrounding operation.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}
