// Query pipeline module
// Embeds a free-text question and retrieves the nearest stored claims


use tracing::debug;

use crate::Result;
use crate::embeddings::Embedder;
use crate::index::{QueryMatch, VectorIndex};

pub use crate::index::DEFAULT_TOP_K;

/// Orchestrates embedder and vector store for a single similarity query
pub struct QueryPipeline<E, S> {
    embedder: E,
    store: S,
}

impl<E: Embedder, S: VectorIndex> QueryPipeline<E, S> {
    #[inline]
    pub fn new(embedder: E, store: S) -> Self {
        Self { embedder, store }
    }

    /// Return the `top_k` stored claims nearest to the query text, in the
    /// store's descending-similarity order.
    ///
    /// The first provider failure aborts the query; there is no partial
    /// result.
    #[inline]
    pub async fn query(
        &self,
        index_name: &str,
        query_text: &str,
        top_k: usize,
    ) -> Result<Vec<QueryMatch>> {
        debug!("Querying index {} with top_k {}", index_name, top_k);

        let vector = self.embedder.embed(query_text).await?;
        let matches = self.store.query(index_name, vector, top_k, true).await?;

        debug!("Query returned {} matches", matches.len());
        Ok(matches)
    }
}
