// Vector index module
// Wire types and provider seam for the external vector index

pub mod pinecone;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::claims::ClaimMetadata;

pub use pinecone::PineconeClient;

/// Default number of matches returned by a similarity query
pub const DEFAULT_TOP_K: usize = 20;

/// A vector plus metadata, keyed by id, as stored in the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorEntry {
    pub id: String,
    pub values: Vec<f32>,
    pub metadata: ClaimMetadata,
}

/// A ranked match returned by a similarity query
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryMatch {
    pub id: String,
    pub score: f32,
    #[serde(default)]
    pub metadata: Option<ClaimMetadata>,
}

/// A named vector index accepting upserts and top-K similarity queries.
///
/// Upserting an id that already exists replaces the stored entry wholesale.
/// Query results come back in the provider's descending-similarity order and
/// are not re-ranked on this side.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    async fn upsert(&self, index_name: &str, entries: Vec<VectorEntry>) -> Result<()>;

    async fn query(
        &self,
        index_name: &str,
        vector: Vec<f32>,
        top_k: usize,
        include_metadata: bool,
    ) -> Result<Vec<QueryMatch>>;
}
