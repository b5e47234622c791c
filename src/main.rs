//! Command-line entry point for podcast-dl

use clap::Parser;
use podcast_dl::{Config, PodcastDownloader, validate_feed_url};
use std::path::PathBuf;
use std::process::ExitCode;

/// Download the most recent audio episodes from an RSS or Atom feed
#[derive(Parser)]
#[command(name = "podcast-dl")]
#[command(version)]
#[command(about = "Download the most recent episodes from an RSS feed", long_about = None)]
struct Cli {
    /// URL of the RSS feed to download from
    feed_url: String,

    /// Output directory for downloaded files
    #[arg(short, long, default_value = "downloads")]
    output: PathBuf,

    /// Number of most recent episodes to download
    #[arg(short, long, default_value_t = 10)]
    episodes: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout is reserved for progress and summary
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if validate_feed_url(&cli.feed_url).is_err() {
        println!("Error: Please provide a valid HTTP/HTTPS URL");
        return ExitCode::FAILURE;
    }

    let config = Config {
        output_dir: cli.output,
        max_episodes: cli.episodes,
        ..Config::default()
    };

    let downloader = match PodcastDownloader::new(config) {
        Ok(downloader) => downloader,
        Err(e) => {
            println!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    downloader.download_episodes(&cli.feed_url).await;

    // Individual episode failures are reported in the summary, not the exit code
    ExitCode::SUCCESS
}
