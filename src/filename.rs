//! Filename synthesis from untrusted episode metadata
//!
//! Episode titles and publish dates come straight out of third-party feeds
//! and cannot be trusted to be filesystem-safe. This module turns them into
//! deterministic filenames: a sanitized title, an optional `YYYY-MM-DD`
//! prefix, and an extension inferred from the audio URL.

use chrono::DateTime;
use tracing::debug;
use url::Url;

/// Characters that are invalid in filenames on at least one supported filesystem.
const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Extension assumed when the audio URL's path carries none.
const DEFAULT_EXTENSION: &str = "mp3";

/// The single accepted publish-date format (RFC-822-style, as used by RSS
/// `pubDate`), e.g. `Mon, 02 Jan 2006 15:04:05 -0700`. Anything else falls
/// back to an undated filename.
const PUBLISHED_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Map an arbitrary string to a filesystem-safe string
///
/// Replaces `< > : " / \ | ? *` with `_`, collapses whitespace runs into a
/// single space, trims leading/trailing whitespace, and collapses runs of
/// `-` into one. Total and idempotent.
///
/// # Examples
///
/// ```
/// use podcast_dl::sanitize;
///
/// assert_eq!(sanitize("a/b: c?"), "a_b_ c_");
/// assert_eq!(sanitize("  spaced   out  "), "spaced out");
/// assert_eq!(sanitize("dash --- run"), "dash - run");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
        .collect();

    let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut out = String::with_capacity(collapsed.len());
    let mut prev_dash = false;
    for c in collapsed.chars() {
        if c == '-' {
            if !prev_dash {
                out.push(c);
            }
            prev_dash = true;
        } else {
            out.push(c);
            prev_dash = false;
        }
    }
    out
}

/// Infer a file extension from an audio URL
///
/// Takes the substring after the last `.` in the URL's path component,
/// lower-cased. A path with no `.` yields `mp3`. The query string and
/// fragment never contribute.
///
/// # Examples
///
/// ```
/// use podcast_dl::audio_extension;
///
/// assert_eq!(audio_extension("https://cdn.example.com/ep/42.MP3"), "mp3");
/// assert_eq!(audio_extension("https://cdn.example.com/stream"), "mp3");
/// assert_eq!(audio_extension("https://cdn.example.com/ep.ogg?sig=abc"), "ogg");
/// ```
#[must_use]
pub fn audio_extension(audio_url: &str) -> String {
    // An unparseable URL is treated as a bare path, like the lenient URL
    // splitting this replaces.
    let path = match Url::parse(audio_url) {
        Ok(url) => url.path().to_string(),
        Err(_) => audio_url.to_string(),
    };

    match path.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => DEFAULT_EXTENSION.to_string(),
    }
}

/// Build the destination filename for one episode
///
/// The title is run through [`sanitize`] and the extension comes from
/// [`audio_extension`]. When `published` matches the fixed RFC-822-style
/// format it is reformatted to `YYYY-MM-DD` and prefixed as
/// `{date}_{title}.{ext}`; a malformed or absent date silently falls back to
/// `{title}.{ext}`.
///
/// Two entries with identical sanitized title, date, and extension synthesize
/// the same filename; the pipeline treats the second as already downloaded.
#[must_use]
pub fn synthesize(title: &str, published: Option<&str>, audio_url: &str) -> String {
    let ext = audio_extension(audio_url);
    let clean_title = sanitize(title);

    match published.and_then(date_prefix) {
        Some(date) => format!("{date}_{clean_title}.{ext}"),
        None => format!("{clean_title}.{ext}"),
    }
}

/// Parse a publish date against the fixed format, yielding a `YYYY-MM-DD`
/// prefix. Mismatches are expected (Atom timestamps, junk data) and only
/// logged at debug level.
fn date_prefix(published: &str) -> Option<String> {
    match DateTime::parse_from_str(published, PUBLISHED_FORMAT) {
        Ok(date) => Some(date.format("%Y-%m-%d").to_string()),
        Err(e) => {
            debug!(published, error = %e, "publish date did not match expected format");
            None
        }
    }
}
