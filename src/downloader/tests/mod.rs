use crate::config::Config;
use crate::downloader::PodcastDownloader;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(output_dir: &Path, max_episodes: usize) -> Config {
    Config {
        output_dir: output_dir.to_path_buf(),
        max_episodes,
        ..Config::default()
    }
}

/// Build an RSS feed with `count` items, each enclosing
/// `{server_uri}/audio/{i}.mp3` with a distinct January 2024 publish date.
/// January 1st 2024 was a Monday, so weekdays cycle from there.
fn rss_feed(server_uri: &str, count: usize) -> String {
    const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let mut items = String::new();
    for i in 1..=count {
        items.push_str(&format!(
            r#"<item>
                <title>Episode {i}</title>
                <pubDate>{weekday}, {day:02} Jan 2024 12:00:00 +0000</pubDate>
                <enclosure url="{server_uri}/audio/{i}.mp3" length="100" type="audio/mpeg"/>
            </item>"#,
            weekday = WEEKDAYS[(i - 1) % 7],
            day = i,
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel>
    <title>Test Podcast</title>
    <link>https://example.com</link>
    <description>Test</description>
    {items}
</channel></rss>"#
    )
}

async fn mount_feed(server: &MockServer, body: String) -> String {
    Mock::given(method("GET"))
        .and(path("/feed.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
    format!("{}/feed.xml", server.uri())
}

#[tokio::test]
async fn selects_only_the_first_n_entries() {
    let server = MockServer::start().await;
    let feed_url = mount_feed(&server, rss_feed(&server.uri(), 15)).await;

    // Episodes 1-5 are served once each; 6-15 must never be requested
    for i in 1..=15usize {
        let expected = u64::from(i <= 5);
        Mock::given(method("GET"))
            .and(path(format!("/audio/{i}.mp3")))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(format!("audio-{i}")))
            .expect(expected)
            .mount(&server)
            .await;
    }

    let output = TempDir::new().unwrap();
    let downloader = PodcastDownloader::new(test_config(output.path(), 5)).unwrap();
    let summary = downloader.download_episodes(&feed_url).await;

    assert_eq!(summary.attempted, 5);
    assert_eq!(summary.succeeded, 5);
    for i in 1..=5 {
        let file = output.path().join(format!("2024-01-{i:02}_Episode {i}.mp3"));
        assert!(file.exists(), "missing {}", file.display());
    }
}

#[tokio::test]
async fn existing_file_counts_as_success_without_refetch() {
    let server = MockServer::start().await;
    let feed_url = mount_feed(&server, rss_feed(&server.uri(), 1)).await;

    Mock::given(method("GET"))
        .and(path("/audio/1.mp3"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes("fresh bytes"))
        .expect(0)
        .mount(&server)
        .await;

    let output = TempDir::new().unwrap();
    let existing = output.path().join("2024-01-01_Episode 1.mp3");
    std::fs::write(&existing, "already here").unwrap();

    let downloader = PodcastDownloader::new(test_config(output.path(), 10)).unwrap();
    let summary = downloader.download_episodes(&feed_url).await;

    assert_eq!(summary.attempted, 1);
    assert_eq!(summary.succeeded, 1);
    // The existing file is not re-validated or overwritten
    assert_eq!(std::fs::read_to_string(&existing).unwrap(), "already here");
}

#[tokio::test]
async fn failed_episode_does_not_abort_the_batch() {
    let server = MockServer::start().await;
    let feed_url = mount_feed(&server, rss_feed(&server.uri(), 3)).await;

    for i in [1usize, 3] {
        Mock::given(method("GET"))
            .and(path(format!("/audio/{i}.mp3")))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(format!("audio-{i}")))
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/audio/2.mp3"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let output = TempDir::new().unwrap();
    let downloader = PodcastDownloader::new(test_config(output.path(), 10)).unwrap();
    let summary = downloader.download_episodes(&feed_url).await;

    assert_eq!(summary.attempted, 3);
    assert_eq!(summary.succeeded, 2);
    assert!(output.path().join("2024-01-01_Episode 1.mp3").exists());
    assert!(!output.path().join("2024-01-02_Episode 2.mp3").exists());
    assert!(output.path().join("2024-01-03_Episode 3.mp3").exists());
}

#[tokio::test]
async fn entry_without_audio_consumes_slot_but_counts_nothing() {
    let server = MockServer::start().await;
    let feed = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel>
    <title>Test</title>
    <item>
        <title>Text Only</title>
        <link>https://example.com/post</link>
    </item>
    <item>
        <title>With Audio</title>
        <enclosure url="{0}/audio/2.mp3" length="100" type="audio/mpeg"/>
    </item>
</channel></rss>"#,
        server.uri()
    );
    let feed_url = mount_feed(&server, feed).await;

    Mock::given(method("GET"))
        .and(path("/audio/2.mp3"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes("audio"))
        .mount(&server)
        .await;

    let output = TempDir::new().unwrap();
    let downloader = PodcastDownloader::new(test_config(output.path(), 10)).unwrap();
    let summary = downloader.download_episodes(&feed_url).await;

    // Both entries were selected, only the second could succeed
    assert_eq!(summary.attempted, 2);
    assert_eq!(summary.succeeded, 1);
    assert!(output.path().join("With Audio.mp3").exists());
}

#[tokio::test]
async fn missing_title_gets_positional_placeholder() {
    let server = MockServer::start().await;
    let feed = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel>
    <title>Test</title>
    <item>
        <enclosure url="{0}/audio/1.mp3" length="100" type="audio/mpeg"/>
    </item>
</channel></rss>"#,
        server.uri()
    );
    let feed_url = mount_feed(&server, feed).await;

    Mock::given(method("GET"))
        .and(path("/audio/1.mp3"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes("audio"))
        .mount(&server)
        .await;

    let output = TempDir::new().unwrap();
    let downloader = PodcastDownloader::new(test_config(output.path(), 10)).unwrap();
    let summary = downloader.download_episodes(&feed_url).await;

    assert_eq!(summary.succeeded, 1);
    assert!(output.path().join("Episode_1.mp3").exists());
}

#[tokio::test]
async fn unreachable_feed_yields_zero_summary() {
    let output = TempDir::new().unwrap();
    let mut config = test_config(output.path(), 10);
    config.fetch_timeout = std::time::Duration::from_millis(500);

    let downloader = PodcastDownloader::new(config).unwrap();
    let summary = downloader
        .download_episodes("http://192.0.2.1:9/feed.xml")
        .await;

    assert_eq!(summary.attempted, 0);
    assert_eq!(summary.succeeded, 0);
}

#[test]
fn new_accepts_existing_output_directory() {
    let output = TempDir::new().unwrap();
    // Directory already exists; construction must not fail, twice over
    assert!(PodcastDownloader::new(test_config(output.path(), 10)).is_ok());
    assert!(PodcastDownloader::new(test_config(output.path(), 10)).is_ok());
}

#[test]
fn new_creates_single_missing_level() {
    let base = TempDir::new().unwrap();
    let dir = base.path().join("downloads");

    assert!(PodcastDownloader::new(test_config(&dir, 10)).is_ok());
    assert!(dir.is_dir());
}

#[test]
fn new_fails_when_parent_is_missing() {
    let base = TempDir::new().unwrap();
    let dir = base.path().join("missing-parent").join("downloads");

    let result = PodcastDownloader::new(test_config(&dir, 10));
    assert!(matches!(result, Err(crate::error::Error::Io(_))));
}
