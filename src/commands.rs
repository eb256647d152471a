use anyhow::{Context, Result};
use console::style;
use tracing::info;

use crate::config::Config;
use crate::embeddings::EmbeddingClient;
use crate::harvester::{HarvestConfig, Harvester, SCOPES_OF_APPLICATION};
use crate::index::PineconeClient;
use crate::indexer::{IngestionPipeline, PacingPolicy};
use crate::search::QueryPipeline;

/// Harvest the full catalog and ingest every claim into the configured index
#[inline]
pub async fn run_ingest() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    info!("Starting catalog harvest");
    let harvester = Harvester::new(HarvestConfig::default())?;
    let claims = harvester.harvest().await?;

    println!(
        "Harvested {} claims from {} scopes",
        claims.len(),
        SCOPES_OF_APPLICATION.len()
    );

    let embedder = EmbeddingClient::new(&config.embedding)?;
    let store = PineconeClient::new(&config.pinecone)?;
    let pipeline = IngestionPipeline::new(embedder, store, PacingPolicy::from(&config.ingest));

    let report = pipeline.ingest(&config.pinecone.index_name, claims).await;

    println!(
        "Stored {}/{} records in {} batches",
        report.stored_records, report.total_records, report.batches_attempted
    );

    if !report.is_complete() {
        println!("{} batches failed and can be replayed:", report.failures.len());
        for failure in &report.failures {
            println!(
                "  batch {} ({} records): {}",
                failure.batch_index, failure.item_count, failure.error
            );
        }
    }

    Ok(())
}

/// Search stored claims with a free-text question and print ranked matches
#[inline]
pub async fn run_query(query_text: &str, top_k: usize) -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    let embedder = EmbeddingClient::new(&config.embedding)?;
    let store = PineconeClient::new(&config.pinecone)?;
    let pipeline = QueryPipeline::new(embedder, store);

    let matches = pipeline
        .query(&config.pinecone.index_name, query_text, top_k)
        .await
        .context("Query failed")?;

    if matches.is_empty() {
        println!("No matches found for \"{}\"", query_text);
        return Ok(());
    }

    println!("Found {} matches for \"{}\"", matches.len(), query_text);

    for (position, matched) in matches.iter().enumerate() {
        println!();
        println!(
            "{}. Score: {}",
            position + 1,
            style(format!("{:.4}", matched.score)).bold()
        );

        match &matched.metadata {
            Some(metadata) => {
                println!("   Scope: {}", metadata.scope);
                println!("   Nutrient: {}", metadata.nutrient);
                println!("   Claim Type: {}", metadata.claim_type);
                println!("   Claim: {}", metadata.claim);
            }
            None => {
                println!("   Id: {}", matched.id);
            }
        }
    }

    Ok(())
}
