//! Configuration types for podcast-dl

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for [`PodcastDownloader`](crate::PodcastDownloader)
///
/// Works out of the box via [`Default`]: episodes land in `./downloads`, the
/// ten most recent entries are considered, and network operations give up
/// after thirty seconds without a connection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Output directory for downloaded episodes (default: "downloads")
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Maximum number of most recent episodes to download (default: 10)
    #[serde(default = "default_max_episodes")]
    pub max_episodes: usize,

    /// Timeout for connecting to feed and enclosure hosts (default: 30s)
    ///
    /// Applied as a whole-request timeout when fetching the feed and as a
    /// connect timeout when streaming enclosures, so a large but healthy
    /// download is never cut off mid-body.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: Duration,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            max_episodes: default_max_episodes(),
            fetch_timeout: default_fetch_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("downloads")
}

fn default_max_episodes() -> usize {
    10
}

fn default_fetch_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    concat!("podcast-dl/", env!("CARGO_PKG_VERSION")).to_string()
}
