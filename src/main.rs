use clap::{Parser, Subcommand};
use nutriclaims::Result;
use nutriclaims::commands::{run_ingest, run_query};
use nutriclaims::search::DEFAULT_TOP_K;

#[derive(Parser)]
#[command(name = "nutriclaims")]
#[command(about = "Harvests nutrition health claims and searches them semantically")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Harvest the claims catalog and ingest it into the vector index
    Ingest,
    /// Search stored claims with a free-text question
    Query {
        /// Free-text question to search with
        text: String,
        /// Number of matches to return
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ingest => {
            run_ingest().await?;
        }
        Commands::Query { text, top_k } => {
            run_query(&text, top_k).await?;
        }
    }

    Ok(())
}
