use clap::Parser;

use briefs::cli::Cli;
use briefs::config::Config;
use briefs::errors::BriefsResult;
use briefs::services::{ClaudeSummarizer, Pipeline};
use briefs::sources::RssAtomFetcher;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> BriefsResult<()> {
    let _cli = Cli::parse();

    // A missing API key aborts here, before any network activity
    let config = Config::from_env()?;

    let client = anthropic_client::Client::new(&config.api_key)?;
    let summarizer = ClaudeSummarizer::new(client, &config.model);
    let fetcher = RssAtomFetcher::new();

    let pipeline = Pipeline::new(&config, &fetcher, &summarizer);
    pipeline.run()?;

    Ok(())
}
