//! Feed fetching and parsing
//!
//! Wraps the `rss` and `atom_syndication` parsers behind one adapter that
//! normalizes both formats into [`FeedEntry`] records. Feed content is
//! fetched once per run; parsing is attempted as RSS 2.0 first with an Atom
//! fallback. Total failure (network error, non-2xx status, content that is
//! neither format) is reported as a diagnostic and an empty entry list —
//! never as an error to the caller.

use crate::error::{Error, Result};
use std::time::Duration;
use tracing::{debug, warn};

/// A reference to a media resource attached to a feed entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaRef {
    /// Resource URL
    pub url: String,

    /// Declared MIME type, when the feed carries one
    ///
    /// Resources without a declared type are never selected as audio, even
    /// when the URL path implies an audio extension.
    pub mime_type: Option<String>,
}

/// One normalized item from an RSS or Atom feed
///
/// Read-only input for the duration of a run. Field order within each media
/// list is feed-native document order.
#[derive(Clone, Debug, Default)]
pub struct FeedEntry {
    /// Entry title; a missing title gets a generated placeholder downstream
    pub title: Option<String>,

    /// Publish date, carried verbatim in the feed's native string format
    pub published: Option<String>,

    /// Enclosure resources (RSS `<enclosure>`, Atom `rel="enclosure"` links)
    pub enclosures: Vec<MediaRef>,

    /// Media RSS `<media:content>` resources
    pub media_content: Vec<MediaRef>,

    /// Plain entry links (RSS `<link>`, remaining Atom links)
    pub links: Vec<MediaRef>,
}

/// Check that a feed URL uses a supported scheme
///
/// Only `http://` and `https://` feeds are accepted; anything else is a
/// fatal input error surfaced before any network activity.
pub fn validate_feed_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(Error::Config {
            message: format!("unsupported feed URL scheme: {url}"),
            key: Some("feed_url".to_string()),
        })
    }
}

/// Fetches and parses podcast feeds
pub struct FeedClient {
    /// HTTP client for feed retrieval
    http: reqwest::Client,
}

impl FeedClient {
    /// Create a new feed client
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { http })
    }

    /// Fetch a feed and return its entries in feed-native order
    ///
    /// Never fails: on any fetch or parse problem a diagnostic is emitted
    /// and an empty vector is returned, so the caller can treat "bad feed"
    /// and "empty feed" uniformly.
    pub async fn fetch_entries(&self, url: &str) -> Vec<FeedEntry> {
        println!("Parsing RSS feed: {url}");

        match self.fetch_and_parse(url).await {
            Ok(entries) => {
                if entries.is_empty() {
                    println!("No entries found in the RSS feed.");
                } else {
                    println!("Found {} entries in the feed.", entries.len());
                }
                entries
            }
            Err(e) => {
                warn!(url, error = %e, "feed fetch failed");
                println!("Error parsing RSS feed: {e}");
                Vec::new()
            }
        }
    }

    /// Fetch feed content and parse it, RSS first, Atom as fallback
    async fn fetch_and_parse(&self, url: &str) -> Result<Vec<FeedEntry>> {
        debug!(url, "fetching feed");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Feed(format!(
                "feed returned HTTP {}: {}",
                status.as_u16(),
                url
            )));
        }

        let content = response.text().await?;

        match parse_rss(&content) {
            Ok(entries) => {
                debug!(count = entries.len(), "parsed feed as RSS");
                Ok(entries)
            }
            Err(rss_err) => {
                debug!(error = %rss_err, "failed to parse as RSS, trying Atom");
                match parse_atom(&content) {
                    Ok(entries) => {
                        debug!(count = entries.len(), "parsed feed as Atom");
                        Ok(entries)
                    }
                    Err(atom_err) => Err(Error::Feed(format!(
                        "content is neither RSS nor Atom. RSS error: {rss_err}. Atom error: {atom_err}"
                    ))),
                }
            }
        }
    }
}

/// Parse feed content as RSS 2.0
fn parse_rss(content: &str) -> Result<Vec<FeedEntry>> {
    let channel = content
        .parse::<rss::Channel>()
        .map_err(|e| Error::Feed(format!("RSS parse error: {e}")))?;

    let entries = channel
        .items()
        .iter()
        .map(|item| {
            let enclosures = item
                .enclosure()
                .map(|enc| {
                    vec![MediaRef {
                        url: enc.url().to_string(),
                        mime_type: non_empty(enc.mime_type()),
                    }]
                })
                .unwrap_or_default();

            // Media RSS lives in the generic extension map, keyed by the
            // document's namespace prefix
            let media_content = item
                .extensions()
                .get("media")
                .and_then(|ns| ns.get("content"))
                .map(|elements| {
                    elements
                        .iter()
                        .filter_map(|ext| {
                            Some(MediaRef {
                                url: ext.attrs().get("url")?.clone(),
                                mime_type: ext.attrs().get("type").cloned(),
                            })
                        })
                        .collect()
                })
                .unwrap_or_default();

            // RSS <link> carries no type attribute, so plain links can never
            // satisfy an audio/* match
            let links = item
                .link()
                .map(|link| {
                    vec![MediaRef {
                        url: link.to_string(),
                        mime_type: None,
                    }]
                })
                .unwrap_or_default();

            FeedEntry {
                title: item.title().map(str::to_string),
                published: item.pub_date().map(str::to_string),
                enclosures,
                media_content,
                links,
            }
        })
        .collect();

    Ok(entries)
}

/// Parse feed content as Atom
fn parse_atom(content: &str) -> Result<Vec<FeedEntry>> {
    let feed = atom_syndication::Feed::read_from(content.as_bytes())
        .map_err(|e| Error::Feed(format!("Atom parse error: {e}")))?;

    let entries = feed
        .entries()
        .iter()
        .map(|entry| {
            let mut enclosures = Vec::new();
            let mut links = Vec::new();

            for link in entry.links() {
                let media = MediaRef {
                    url: link.href().to_string(),
                    mime_type: link.mime_type().map(str::to_string),
                };
                if link.rel() == "enclosure" {
                    enclosures.push(media);
                } else {
                    links.push(media);
                }
            }

            // Atom timestamps are RFC 3339; they intentionally fail the
            // RFC-822-style publish-date check downstream, so Atom entries
            // synthesize undated filenames
            let published = entry
                .published()
                .unwrap_or_else(|| entry.updated())
                .to_rfc3339();

            FeedEntry {
                title: Some(entry.title().as_str().to_string()),
                published: Some(published),
                enclosures,
                media_content: Vec::new(),
                links,
            }
        })
        .collect();

    Ok(entries)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
