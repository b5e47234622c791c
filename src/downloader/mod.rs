//! Episode download pipeline
//!
//! [`PodcastDownloader`] is the single stateful object of a run: it owns the
//! configuration and the HTTP clients, and drives feed → selection → target
//! derivation → fetch for each episode in sequence. Per-episode failures are
//! logged and skipped; they never abort the batch.

mod fetch;

use crate::config::Config;
use crate::error::Result;
use crate::extract::extract_audio_url;
use crate::feed::FeedClient;
use crate::filename::synthesize;
use crate::types::{DownloadTarget, RunSummary};
use std::fs;
use std::io;
use tracing::debug;

/// Downloads the most recent audio episodes from a podcast feed
pub struct PodcastDownloader {
    /// Run configuration
    config: Config,

    /// Feed fetching and parsing
    feed_client: FeedClient,

    /// HTTP client for enclosure downloads (connect timeout only, so large
    /// downloads are never cut off mid-body)
    http: reqwest::Client,
}

impl PodcastDownloader {
    /// Create a new downloader and ensure the output directory exists
    ///
    /// Creates exactly one directory level; a pre-existing directory is not
    /// an error, a missing parent is.
    ///
    /// # Errors
    /// Returns an error if the output directory cannot be created or an HTTP
    /// client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        match fs::create_dir(&config.output_dir) {
            Err(e) if e.kind() != io::ErrorKind::AlreadyExists => return Err(e.into()),
            _ => {}
        }

        let feed_client = FeedClient::new(config.fetch_timeout, &config.user_agent)?;

        let http = reqwest::Client::builder()
            .connect_timeout(config.fetch_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            config,
            feed_client,
            http,
        })
    }

    /// Download the most recent episodes from the feed at `feed_url`
    ///
    /// Selects the first `min(max_episodes, available)` entries in feed
    /// order. An entry without an audio URL consumes its slot but counts
    /// toward neither success nor failure; an entry whose destination file
    /// already exists counts as a success without any network request.
    pub async fn download_episodes(&self, feed_url: &str) -> RunSummary {
        let entries = self.feed_client.fetch_entries(feed_url).await;

        if entries.is_empty() {
            println!("No entries found. Exiting.");
            return RunSummary::default();
        }

        let count = entries.len().min(self.config.max_episodes);
        let selected = &entries[..count];

        println!("\nDownloading {} most recent episodes...", selected.len());

        let mut summary = RunSummary {
            attempted: selected.len(),
            succeeded: 0,
        };

        for (index, entry) in selected.iter().enumerate() {
            println!("\n--- Episode {}/{} ---", index + 1, selected.len());

            let title = entry
                .title
                .clone()
                .unwrap_or_else(|| format!("Episode_{}", index + 1));

            let Some(audio_url) = extract_audio_url(entry) else {
                debug!(%title, "no audio resource in entry");
                println!("No audio URL found for episode: {title}");
                continue;
            };

            let filename = synthesize(&title, entry.published.as_deref(), audio_url);
            let target = DownloadTarget {
                audio_url: audio_url.to_string(),
                file_path: self.config.output_dir.join(&filename),
            };

            if target.file_path.exists() {
                println!("File already exists, skipping: {filename}");
                summary.succeeded += 1;
                continue;
            }

            if self.fetch_file(&target.audio_url, &target.file_path).await {
                summary.succeeded += 1;
            }
        }

        println!(
            "\nDownload complete! {}/{} episodes downloaded successfully.",
            summary.succeeded, summary.attempted
        );
        let output_dir = std::path::absolute(&self.config.output_dir)
            .unwrap_or_else(|_| self.config.output_dir.clone());
        println!("Files saved to: {}", output_dir.display());

        summary
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
