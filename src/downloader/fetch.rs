//! Streaming retrieval of a single audio resource to disk

use crate::error::Result;
use futures::StreamExt;
use std::io::Write;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use super::PodcastDownloader;

impl PodcastDownloader {
    /// Stream a remote resource to `destination`, reporting byte progress
    ///
    /// Returns `true` on success. Every transport and HTTP-status error is
    /// logged and mapped to `false`, so one dead enclosure cannot abort the
    /// batch. On mid-stream failure the partially written file is left on
    /// disk as-is.
    pub(crate) async fn fetch_file(&self, url: &str, destination: &Path) -> bool {
        println!("Downloading: {url}");

        match self.stream_to_disk(url, destination).await {
            Ok(()) => {
                println!("\nDownloaded: {}", destination.display());
                true
            }
            Err(e) => {
                warn!(url, error = %e, "download failed");
                println!("Error downloading {url}: {e}");
                false
            }
        }
    }

    async fn stream_to_disk(&self, url: &str, destination: &Path) -> Result<()> {
        let response = self.http.get(url).send().await?.error_for_status()?;

        let total_size = response.content_length().unwrap_or(0);
        let mut downloaded: u64 = 0;

        let mut file = File::create(destination).await?;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;

            // Fractional progress needs a known total; servers that omit
            // content-length get no percentage
            if total_size > 0 {
                let percent = downloaded as f64 / total_size as f64 * 100.0;
                print!("\rProgress: {percent:.1}%");
                let _ = std::io::stdout().flush();
            }
        }

        file.flush().await?;
        debug!(url, bytes = downloaded, "wrote file");
        Ok(())
    }
}
