//! vidra-peertube
//!
//! Connector for the federated PeerTube network, queried through the Sepia
//! Search index. "Trending" does not exist across the federation, so the
//! trending feed is the newest SFW publishes instead.
#![warn(missing_docs)]

mod wire;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use url::Url;

use vidra_core::connector::{SearchProvider, TrendingProvider, VidraConnector};
use vidra_core::{Transport, VidraError, parse_json};
use vidra_types::display::{format_duration, format_relative_date_now, format_views};
use vidra_types::{Platform, VideoRecord};

const API_BASE: &str = "https://sepiasearch.org/api/v1/search/videos";

/// The newest-publishes feed stays short; search returns a fuller page.
const TRENDING_COUNT: u32 = 10;
const SEARCH_COUNT: u32 = 20;

fn encode(query: &str) -> String {
    url::form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

/// PeerTube connector backed by Sepia Search.
pub struct PeerTubeConnector {
    transport: Arc<dyn Transport>,
    base: Url,
}

impl PeerTubeConnector {
    /// Build a connector around the injected transport strategy.
    ///
    /// # Panics
    /// Never panics for the built-in base URL; it is statically valid.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base: Url::parse(API_BASE).expect("sepia search base URL is valid"),
        }
    }

    /// Test seam: point the connector at a different index root.
    #[must_use]
    pub fn with_base(transport: Arc<dyn Transport>, base: Url) -> Self {
        Self { transport, base }
    }

    async fn fetch(&self, query: &str) -> Result<Vec<VideoRecord>, VidraError> {
        let mut url = self.base.clone();
        url.set_query(Some(query));
        let raw = self.transport.get(&url).await?;
        let envelope: wire::SearchEnvelope = parse_json(&raw)?;
        Ok(envelope.data.iter().map(normalize_video).collect())
    }
}

/// Resolve a host-relative path against the video's origin instance.
fn on_host(host: Option<&str>, path: &str) -> String {
    match host {
        Some(h) if !h.is_empty() => format!("https://{h}{path}"),
        _ => path.to_string(),
    }
}

/// Map one federated entry to a [`VideoRecord`]; total, with explicit defaults.
fn normalize_video(raw: &wire::VideoData) -> VideoRecord {
    let mut rec = VideoRecord::empty(Platform::PeerTube);
    let host = raw
        .account
        .as_ref()
        .and_then(|a| a.host.as_deref());
    if let Some(uuid) = &raw.uuid {
        rec.id.clone_from(uuid);
    }
    if let Some(name) = &raw.name {
        rec.title.clone_from(name);
    }
    if let Some(account) = &raw.account {
        if let Some(display) = &account.display_name {
            rec.uploader.clone_from(display);
        }
        if let Some(path) = account.avatar.as_ref().and_then(|a| a.path.as_deref()) {
            rec.avatar = on_host(host, path);
        }
    }
    if let Some(path) = &raw.thumbnail_path {
        rec.thumbnail = on_host(host, path);
    }
    rec.views = format_views(raw.views.unwrap_or(0));
    rec.duration = format_duration(raw.duration.unwrap_or(0));
    if let Some(published) = raw
        .published_at
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    {
        rec.uploaded = format_relative_date_now(published.to_utc());
    }
    rec.stream_url = raw.url.clone();
    rec
}

impl VidraConnector for PeerTubeConnector {
    fn name(&self) -> &'static str {
        "vidra-peertube"
    }

    fn platform(&self) -> Platform {
        Platform::PeerTube
    }

    fn as_trending_provider(&self) -> Option<&dyn TrendingProvider> {
        Some(self)
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self)
    }
}

#[async_trait]
impl TrendingProvider for PeerTubeConnector {
    async fn trending(&self, _region: &str) -> Result<Vec<VideoRecord>, VidraError> {
        // The federation has no region concept; newest SFW publishes stand in.
        self.fetch(&format!(
            "start=0&count={TRENDING_COUNT}&sort=-publishedAt&nsfw=false"
        ))
        .await
    }
}

#[async_trait]
impl SearchProvider for PeerTubeConnector {
    async fn search(&self, query: &str) -> Result<Vec<VideoRecord>, VidraError> {
        self.fetch(&format!(
            "start=0&count={SEARCH_COUNT}&sort=-match&nsfw=false&search={}",
            encode(query)
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_resolves_host_relative_paths() {
        let raw: wire::VideoData = serde_json::from_str(
            r#"{"uuid":"u-1","name":"Fed video","views":1200,"duration":3661,
                "thumbnailPath":"/thumbs/u-1.jpg",
                "url":"https://tube.example/w/u-1",
                "account":{"displayName":"Alice","host":"tube.example",
                           "avatar":{"path":"/avatars/alice.png"}}}"#,
        )
        .unwrap();
        let rec = normalize_video(&raw);
        assert_eq!(rec.id, "u-1");
        assert_eq!(rec.thumbnail, "https://tube.example/thumbs/u-1.jpg");
        assert_eq!(rec.avatar, "https://tube.example/avatars/alice.png");
        assert_eq!(rec.views, "1.2K");
        assert_eq!(rec.duration, "1:01:01");
        assert_eq!(rec.stream_url.as_deref(), Some("https://tube.example/w/u-1"));
        assert_eq!(rec.platform, Platform::PeerTube);
    }

    #[test]
    fn normalize_empty_entry_is_total() {
        let rec = normalize_video(&wire::VideoData::default());
        assert_eq!(rec.views, "0");
        assert_eq!(rec.duration, "00:00");
        assert_eq!(rec.uploaded, "Recently");
        assert_eq!(rec.avatar, "");
        assert_eq!(rec.stream_url, None);
    }

    #[test]
    fn unparseable_publish_date_stays_recently() {
        let raw: wire::VideoData =
            serde_json::from_str(r#"{"publishedAt":"not-a-date"}"#).unwrap();
        assert_eq!(normalize_video(&raw).uploaded, "Recently");
    }
}
