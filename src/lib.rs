//! # podcast-dl
//!
//! Download the N most recent audio episodes from an RSS or Atom feed into a
//! local directory, deriving filenames from episode metadata.
//!
//! ## Design Philosophy
//!
//! podcast-dl is designed to be:
//! - **Sequential** - One feed, one run, one download at a time
//! - **Fault-tolerant per episode** - A dead enclosure or a bad entry is
//!   logged and skipped, never fatal to the batch
//! - **Stateless across runs** - Whether an episode is already downloaded is
//!   decided solely by a file-existence check on its synthesized name
//!
//! ## Quick Start
//!
//! ```no_run
//! use podcast_dl::{Config, PodcastDownloader};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let downloader = PodcastDownloader::new(Config::default())?;
//!     let summary = downloader
//!         .download_episodes("https://example.com/podcast.xml")
//!         .await;
//!     println!("{}/{} downloaded", summary.succeeded, summary.attempted);
//!     Ok(())
//! }
//! ```
//!
//! ## Known limitation
//!
//! Two entries that synthesize the same filename (identical sanitized title,
//! publish date, and extension) are indistinguishable to the existence
//! check: the second is counted as already downloaded even when it refers to
//! different audio. This matches the long-standing behavior of the tool this
//! crate replaces and is preserved for compatibility.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Episode download pipeline
pub mod downloader;
/// Error types
pub mod error;
/// Audio resource selection
pub mod extract;
/// Feed fetching and parsing
pub mod feed;
/// Filename sanitization and synthesis
pub mod filename;
/// Core value types
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use downloader::PodcastDownloader;
pub use error::{Error, Result};
pub use extract::{LOOKUP_ORDER, MediaSource, extract_audio_url};
pub use feed::{FeedClient, FeedEntry, MediaRef, validate_feed_url};
pub use filename::{audio_extension, sanitize, synthesize};
pub use types::{DownloadTarget, RunSummary};
