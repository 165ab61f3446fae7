//! vidra-dailymotion
//!
//! Connector for Dailymotion's public REST API. Listing and search are live
//! network calls; stream resolution is deterministic (the embed URL is a pure
//! function of the video id) and never touches the network.
#![warn(missing_docs)]

mod wire;

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use vidra_core::connector::{
    SearchProvider, StreamUrlProvider, TrendingProvider, VidraConnector,
};
use vidra_core::{Transport, VidraError, parse_json};
use vidra_types::display::{format_duration, format_timestamp_secs, format_views};
use vidra_types::{Platform, VideoRecord};

const API_BASE: &str = "https://api.dailymotion.com/videos";

/// Field selector for every listing request. Keeping it fixed keeps payloads
/// small and the wire shape stable.
const FIELDS: &str = "id,title,thumbnail_480_url,duration,views_total,created_time,owner.screenname,owner.avatar_190_url";

/// Both trending and search cap at 20 entries.
const PAGE_LIMIT: u32 = 20;

fn encode(query: &str) -> String {
    url::form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

/// Dailymotion connector.
pub struct DailymotionConnector {
    transport: Arc<dyn Transport>,
    base: Url,
}

impl DailymotionConnector {
    /// Build a connector around the injected transport strategy.
    ///
    /// # Panics
    /// Never panics for the built-in base URL; it is statically valid.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base: Url::parse(API_BASE).expect("dailymotion base URL is valid"),
        }
    }

    /// Test seam: point the connector at a different API root.
    #[must_use]
    pub fn with_base(transport: Arc<dyn Transport>, base: Url) -> Self {
        Self { transport, base }
    }

    async fn list(&self, extra: &str) -> Result<Vec<VideoRecord>, VidraError> {
        let query = format!(
            "fields={FIELDS}&limit={PAGE_LIMIT}&flags=no_live,no_premium{extra}"
        );
        let mut url = self.base.clone();
        url.set_query(Some(&query));
        let raw = self.transport.get(&url).await?;
        let page: wire::VideoPage = parse_json(&raw)?;
        Ok(page.list.iter().map(normalize_entry).collect())
    }

    /// The deterministic embeddable player URL for a video id.
    #[must_use]
    pub fn embed_url(id: &str) -> String {
        format!("https://www.dailymotion.com/embed/video/{id}")
    }
}

/// Map one raw entry to a [`VideoRecord`]; total, with explicit defaults.
fn normalize_entry(raw: &wire::VideoEntry) -> VideoRecord {
    let mut rec = VideoRecord::empty(Platform::Dailymotion);
    if let Some(id) = &raw.id {
        rec.id.clone_from(id);
        rec.stream_url = Some(DailymotionConnector::embed_url(id));
    }
    if let Some(title) = &raw.title {
        rec.title.clone_from(title);
    }
    if let Some(name) = &raw.owner_name {
        rec.uploader.clone_from(name);
    }
    if let Some(avatar) = &raw.owner_avatar {
        rec.avatar.clone_from(avatar);
    }
    if let Some(thumb) = &raw.thumbnail {
        rec.thumbnail.clone_from(thumb);
    }
    rec.views = format_views(raw.views.unwrap_or(0));
    rec.duration = format_duration(raw.duration.unwrap_or(0));
    rec.uploaded = format_timestamp_secs(raw.created.unwrap_or(0));
    rec
}

impl VidraConnector for DailymotionConnector {
    fn name(&self) -> &'static str {
        "vidra-dailymotion"
    }

    fn platform(&self) -> Platform {
        Platform::Dailymotion
    }

    fn as_trending_provider(&self) -> Option<&dyn TrendingProvider> {
        Some(self)
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self)
    }

    fn as_stream_url_provider(&self) -> Option<&dyn StreamUrlProvider> {
        Some(self)
    }
}

#[async_trait]
impl TrendingProvider for DailymotionConnector {
    async fn trending(&self, region: &str) -> Result<Vec<VideoRecord>, VidraError> {
        self.list(&format!(
            "&sort=trending&country={}",
            encode(&region.to_ascii_lowercase())
        ))
        .await
    }
}

#[async_trait]
impl SearchProvider for DailymotionConnector {
    async fn search(&self, query: &str) -> Result<Vec<VideoRecord>, VidraError> {
        self.list(&format!("&search={}", encode(query))).await
    }
}

#[async_trait]
impl StreamUrlProvider for DailymotionConnector {
    async fn stream_url(&self, id: &str) -> Result<Option<String>, VidraError> {
        // No extra network round-trip; the embed player resolves the rest.
        Ok(Some(Self::embed_url(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_is_deterministic() {
        assert_eq!(
            DailymotionConnector::embed_url("x8abc12"),
            "https://www.dailymotion.com/embed/video/x8abc12"
        );
    }

    #[test]
    fn normalize_handles_dotted_owner_fields() {
        let raw: wire::VideoEntry = serde_json::from_str(
            r#"{"id":"x1","title":"T","owner.screenname":"Owner",
                "owner.avatar_190_url":"https://a/av.png",
                "views_total":500,"duration":61,"created_time":0}"#,
        )
        .unwrap();
        let rec = normalize_entry(&raw);
        assert_eq!(rec.uploader, "Owner");
        assert_eq!(rec.avatar, "https://a/av.png");
        assert_eq!(rec.views, "500");
        assert_eq!(rec.duration, "1:01");
        assert_eq!(rec.uploaded, "Recently");
        assert_eq!(
            rec.stream_url.as_deref(),
            Some("https://www.dailymotion.com/embed/video/x1")
        );
    }

    #[test]
    fn normalize_empty_entry_is_total() {
        let rec = normalize_entry(&wire::VideoEntry::default());
        assert_eq!(rec.platform, Platform::Dailymotion);
        assert_eq!(rec.views, "0");
        assert_eq!(rec.duration, "00:00");
        assert_eq!(rec.uploaded, "Recently");
        assert_eq!(rec.stream_url, None);
    }
}
