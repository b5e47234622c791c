//! Audio resource selection from a feed entry
//!
//! Feeds attach media to entries in several loosely-standardized places.
//! Selection is a fixed-priority list of typed lookup strategies: the first
//! source containing a resource with a declared `audio/*` MIME type wins.

use crate::feed::{FeedEntry, MediaRef};

/// A place within a feed entry where media resources may be attached
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaSource {
    /// RSS `<enclosure>` / Atom `rel="enclosure"` links
    Enclosures,
    /// Media RSS `<media:content>` elements
    MediaContent,
    /// Plain entry links
    Links,
}

/// Lookup priority: enclosures first, media content second, links last.
/// A later source is only consulted when every earlier one yields nothing.
pub const LOOKUP_ORDER: [MediaSource; 3] = [
    MediaSource::Enclosures,
    MediaSource::MediaContent,
    MediaSource::Links,
];

impl MediaSource {
    /// The entry's candidate resources for this source, in feed order
    fn candidates(self, entry: &FeedEntry) -> &[MediaRef] {
        match self {
            MediaSource::Enclosures => &entry.enclosures,
            MediaSource::MediaContent => &entry.media_content,
            MediaSource::Links => &entry.links,
        }
    }
}

/// A resource qualifies only through its declared MIME type; URL paths are
/// never inspected, so an `.mp3` link without a type is not audio.
fn is_audio(media: &MediaRef) -> bool {
    media
        .mime_type
        .as_deref()
        .is_some_and(|t| t.starts_with("audio/"))
}

/// Find the best-candidate audio URL for a feed entry
///
/// Tries [`LOOKUP_ORDER`] sources in sequence and returns the URL of the
/// first audio-typed resource, or `None` when no source yields one.
#[must_use]
pub fn extract_audio_url(entry: &FeedEntry) -> Option<&str> {
    LOOKUP_ORDER.iter().find_map(|source| {
        source
            .candidates(entry)
            .iter()
            .find(|media| is_audio(media))
            .map(|media| media.url.as_str())
    })
}
