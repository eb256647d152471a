use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClaimsError>;

#[derive(Error, Debug)]
pub enum ClaimsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Harvest error: {0}")]
    Harvest(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Vector store error: {0}")]
    VectorStore(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub mod claims;
pub mod commands;
pub mod config;
pub mod embeddings;
pub mod harvester;
pub mod index;
pub mod indexer;
pub mod search;
