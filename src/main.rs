mod cli;
mod search;
mod wiki;

pub const USER_AGENT: &str = concat!("wikiscan/", env!("CARGO_PKG_VERSION"));

use std::time::Duration;

use clap::Parser;
use reqwest::Client;
use tracing::{info, warn};

use cli::Cli;
use wiki::WikiClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wikiscan=info".parse()?),
        )
        .init();

    let request = Cli::parse().into_request();

    info!(query = %request.query, languages = request.languages.len(), "starting search");

    let http = Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let client = WikiClient::new(http);

    let results = search::aggregate(&client, &request)
        .await
        .inspect_err(|e| tracing::error!("search failed: {e}"))?;

    if results.is_empty() {
        warn!(query = %request.query, "no results found");
    }

    print!("{}", search::format_results(&results));
    Ok(())
}
