use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;

use sba_scraper::constants::bucket;
use sba_scraper::feeds;
use sba_scraper::handler;
use sba_scraper::infra::http::HttpTransport;
use sba_scraper::infra::storage::{persist_to_json, S3BucketStore};
use sba_scraper::logging::init_logging;
use sba_scraper::pipeline;

#[derive(Parser)]
#[command(name = "sba-scraper")]
#[command(about = "Harvests SBA trade events and publishes them as a single JSON document")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the harvest pipeline against one feed version
    Run {
        /// Feed version to harvest: search-api, drupal, or xml
        #[arg(long, default_value = sba_scraper::constants::XML_FEED)]
        feed: String,
        /// Write the collection to a local file instead of S3
        #[arg(long)]
        dry_run: bool,
        /// Output directory for --dry-run artifacts
        #[arg(long, default_value = "output")]
        output_dir: String,
    },
    /// Invoke the scheduler entry point once, as the orchestrator would
    Handler,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    init_logging();

    match cli.command {
        Commands::Run {
            feed,
            dry_run,
            output_dir,
        } => {
            let feed = feeds::create_feed(&feed)
                .ok_or_else(|| anyhow::anyhow!("unknown feed version: {feed}"))?;
            let transport = HttpTransport::new();

            if dry_run {
                let entries = pipeline::get_entries(&transport, feed.as_ref()).await?;
                if entries.is_empty() {
                    println!("No entries loaded from {}", feed.endpoint());
                } else {
                    let output_file = persist_to_json(&entries, feed.feed_name(), &output_dir)?;
                    info!("Saved {} entries to {}", entries.len(), output_file);
                    println!("Saved {} entries to {}", entries.len(), output_file);
                }
            } else {
                let store = S3BucketStore::new(bucket()).await;
                let outcome = handler::run(&transport, feed.as_ref(), &store).await?;
                println!("{}", outcome.status);
            }
        }
        Commands::Handler => {
            let status = handler::handler(json!({}), json!({})).await?;
            println!("{status}");
        }
    }

    Ok(())
}
