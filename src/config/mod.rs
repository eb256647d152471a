// Configuration management module
// Provider credentials and pipeline tunables, resolved from the process environment


use thiserror::Error;
use url::Url;

pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_EMBEDDING_MODEL: &str = "EMBEDDING_MODEL";
pub const ENV_PINECONE_API_KEY: &str = "PINECONE_API_KEY";
pub const ENV_PINECONE_CONTROLLER_URL: &str = "PINECONE_CONTROLLER_URL";
pub const ENV_PINECONE_INDEX_NAME: &str = "PINECONE_INDEX_NAME";
pub const ENV_INGEST_BATCH_SIZE: &str = "INGEST_BATCH_SIZE";
pub const ENV_INGEST_BATCH_DELAY_MS: &str = "INGEST_BATCH_DELAY_MS";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_PINECONE_CONTROLLER_URL: &str = "https://api.pinecone.io";
pub const DEFAULT_BATCH_SIZE: usize = 100;
pub const DEFAULT_BATCH_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub embedding: EmbeddingConfig,
    pub pinecone: PineconeConfig,
    pub ingest: IngestConfig,
}

/// Settings for the embedding-model provider
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

/// Settings for the vector-index provider
#[derive(Debug, Clone, PartialEq)]
pub struct PineconeConfig {
    pub api_key: String,
    pub controller_url: String,
    pub index_name: String,
}

/// Batching and pacing tunables for the ingestion pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    pub batch_size: usize,
    pub batch_delay_ms: u64,
}

impl Default for IngestConfig {
    #[inline]
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay_ms: DEFAULT_BATCH_DELAY_MS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid URL in {0}: {1}")]
    InvalidUrl(&'static str, String),
    #[error("Invalid value for {0}: {1}")]
    InvalidNumber(&'static str, String),
    #[error("Invalid batch size: {0} (must be between 1 and 1000)")]
    InvalidBatchSize(usize),
    #[error("Invalid model name: cannot be empty")]
    InvalidModel,
    #[error("Invalid index name: cannot be empty")]
    InvalidIndexName,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A missing required variable is a startup-time fatal condition; callers
    /// are expected to abort before any provider call is made.
    #[inline]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    #[inline]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require =
            |key: &'static str| lookup(key).ok_or_else(|| ConfigError::MissingVar(key));

        let config = Self {
            embedding: EmbeddingConfig {
                api_key: require(ENV_OPENAI_API_KEY)?,
                base_url: lookup(ENV_OPENAI_BASE_URL)
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                model: lookup(ENV_EMBEDDING_MODEL)
                    .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
            },
            pinecone: PineconeConfig {
                api_key: require(ENV_PINECONE_API_KEY)?,
                controller_url: lookup(ENV_PINECONE_CONTROLLER_URL)
                    .unwrap_or_else(|| DEFAULT_PINECONE_CONTROLLER_URL.to_string()),
                index_name: require(ENV_PINECONE_INDEX_NAME)?,
            },
            ingest: IngestConfig {
                batch_size: parse_var(&lookup, ENV_INGEST_BATCH_SIZE, DEFAULT_BATCH_SIZE)?,
                batch_delay_ms: parse_var(
                    &lookup,
                    ENV_INGEST_BATCH_DELAY_MS,
                    DEFAULT_BATCH_DELAY_MS,
                )?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.embedding.base_url).map_err(|_| {
            ConfigError::InvalidUrl(ENV_OPENAI_BASE_URL, self.embedding.base_url.clone())
        })?;
        Url::parse(&self.pinecone.controller_url).map_err(|_| {
            ConfigError::InvalidUrl(
                ENV_PINECONE_CONTROLLER_URL,
                self.pinecone.controller_url.clone(),
            )
        })?;

        if self.embedding.model.trim().is_empty() {
            return Err(ConfigError::InvalidModel);
        }

        if self.pinecone.index_name.trim().is_empty() {
            return Err(ConfigError::InvalidIndexName);
        }

        if self.ingest.batch_size == 0 || self.ingest.batch_size > 1000 {
            return Err(ConfigError::InvalidBatchSize(self.ingest.batch_size));
        }

        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidNumber(key, raw)),
        None => Ok(default),
    }
}
