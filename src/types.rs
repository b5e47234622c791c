//! Core value types for podcast-dl

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A resolved download for one feed entry
///
/// Derived from a [`FeedEntry`](crate::FeedEntry) by the pipeline: the
/// selected audio URL plus the destination path synthesized from the entry's
/// metadata. Constructed per entry and discarded after use; nothing about a
/// target persists across runs. Whether an episode is "already downloaded"
/// is decided solely by whether a file exists at `file_path`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadTarget {
    /// URL of the audio resource to fetch
    pub audio_url: String,

    /// Destination path under the output directory
    pub file_path: PathBuf,
}

/// Outcome counts for a single run
///
/// `attempted` is the number of entries selected from the feed (the
/// denominator of the printed summary line); `succeeded` counts episodes
/// that were downloaded or already present on disk. Entries with no audio
/// URL consume a slot but count toward neither.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of entries selected for processing
    pub attempted: usize,

    /// Number of episodes downloaded or already present
    pub succeeded: usize,
}
