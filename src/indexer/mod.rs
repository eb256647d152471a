// Ingestion pipeline module
// Formats, embeds, and upserts harvested claims in rate-limited batches


use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::ClaimsError;
use crate::claims::{ClaimRecord, RawClaim, format_claim};
use crate::config::{DEFAULT_BATCH_DELAY_MS, DEFAULT_BATCH_SIZE, IngestConfig};
use crate::embeddings::Embedder;
use crate::index::{VectorEntry, VectorIndex};

/// Batch size and inter-batch delay for ingestion.
///
/// The delay exists to stay under provider rate limits; tests disable it with
/// a zero duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacingPolicy {
    pub batch_size: usize,
    pub batch_delay: Duration,
}

impl Default for PacingPolicy {
    #[inline]
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay: Duration::from_millis(DEFAULT_BATCH_DELAY_MS),
        }
    }
}

impl From<&IngestConfig> for PacingPolicy {
    #[inline]
    fn from(config: &IngestConfig) -> Self {
        Self {
            batch_size: config.batch_size,
            batch_delay: Duration::from_millis(config.batch_delay_ms),
        }
    }
}

/// A batch that could not be stored, with enough context to replay it
#[derive(Debug)]
pub struct BatchFailure {
    /// Zero-based index of the batch within the run
    pub batch_index: usize,
    pub item_count: usize,
    pub error: ClaimsError,
}

/// Outcome of one ingestion run
#[derive(Debug, Default)]
pub struct IngestReport {
    pub total_records: usize,
    pub stored_records: usize,
    pub batches_attempted: usize,
    pub failures: Vec<BatchFailure>,
}

impl IngestReport {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Orchestrates formatter, embedder, and vector store for a collection of
/// harvested claims.
///
/// Records are processed strictly in input order, one embedding call at a
/// time, one upsert per batch, with a fixed pause between successive batches.
/// There is deliberately no parallelism here: the providers are rate limited.
pub struct IngestionPipeline<E, S> {
    embedder: E,
    store: S,
    policy: PacingPolicy,
}

impl<E: Embedder, S: VectorIndex> IngestionPipeline<E, S> {
    #[inline]
    pub fn new(embedder: E, store: S, policy: PacingPolicy) -> Self {
        Self {
            embedder,
            store,
            policy,
        }
    }

    /// Ingest raw claims into the named index.
    ///
    /// Sequence numbers are assigned 0-based in input order across the whole
    /// call, which makes re-running the same input against the same index an
    /// overwrite rather than a duplication.
    ///
    /// Best-effort: an embedding failure abandons the containing batch before
    /// its upsert (never a partial batch), a failed upsert is recorded, and
    /// later batches are still attempted. The returned report carries the
    /// per-batch failures alongside the totals.
    #[inline]
    pub async fn ingest(&self, index_name: &str, claims: Vec<RawClaim>) -> IngestReport {
        let records: Vec<ClaimRecord> = claims
            .into_iter()
            .enumerate()
            .map(|(sequence, claim)| format_claim(&claim, sequence))
            .collect();

        let mut report = IngestReport {
            total_records: records.len(),
            ..IngestReport::default()
        };

        if records.is_empty() {
            info!("No claims to ingest");
            return report;
        }

        let batch_count = records.len().div_ceil(self.policy.batch_size);
        info!(
            "Ingesting {} records into index {} in {} batches",
            records.len(),
            index_name,
            batch_count
        );

        for (batch_index, batch) in records.chunks(self.policy.batch_size).enumerate() {
            if batch_index > 0 && !self.policy.batch_delay.is_zero() {
                debug!("Pausing {:?} before next batch", self.policy.batch_delay);
                sleep(self.policy.batch_delay).await;
            }

            report.batches_attempted += 1;

            match self.ingest_batch(index_name, batch).await {
                Ok(()) => {
                    report.stored_records += batch.len();
                    info!(
                        "Stored batch {} of {} ({} records)",
                        batch_index + 1,
                        batch_count,
                        batch.len()
                    );
                }
                Err(error) => {
                    error!(
                        "Batch {} of {} failed ({} records): {}",
                        batch_index + 1,
                        batch_count,
                        batch.len(),
                        error
                    );
                    report.failures.push(BatchFailure {
                        batch_index,
                        item_count: batch.len(),
                        error,
                    });
                }
            }
        }

        info!(
            "Ingestion finished: {}/{} records stored, {} failed batches",
            report.stored_records,
            report.total_records,
            report.failures.len()
        );

        report
    }

    /// Embed every record of a batch, then upsert the batch in one call.
    ///
    /// The first embedding failure aborts the batch so that a partially
    /// embedded batch is never upserted.
    async fn ingest_batch(&self, index_name: &str, batch: &[ClaimRecord]) -> crate::Result<()> {
        let mut entries = Vec::with_capacity(batch.len());

        for record in batch {
            let values = self.embedder.embed(&record.embedding_input).await?;
            entries.push(VectorEntry {
                id: record.id.clone(),
                values,
                metadata: record.metadata.clone(),
            });
        }

        self.store.upsert(index_name, entries).await
    }
}
