//! vidra-mock
//!
//! Connectors for the providers that have no stable API reachable from a
//! client (TikTok, Rumble, Bandcamp), served from a deterministic static
//! catalog. The same catalog backs the facade's web-preview fallback, so it
//! is a production dependency of the facade, not a test helper.
#![warn(missing_docs)]

mod fixtures;

use async_trait::async_trait;

use vidra_core::connector::{
    SearchProvider, StreamUrlProvider, TrendingProvider, VidraConnector,
};
use vidra_core::VidraError;
use vidra_types::{Platform, VideoRecord};

/// Played when a stream id is not found in any set, so mock-backed playback
/// never has to surface an error.
pub const FALLBACK_STREAM_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/TearsOfSteel.mp4";

/// Queries shorter than this never filter; a two-character query would match
/// half the catalog anyway.
const MIN_FILTER_LEN: usize = 3;

/// Read-only access to the static per-platform sets.
pub struct StaticCatalog;

impl StaticCatalog {
    /// The trending set for a platform.
    ///
    /// Mock-backed platforms get their own set (Bandcamp's is empty). Live
    /// platforms have no set of their own, so the web-preview fallback hands
    /// them the combined catalog for breadth instead.
    #[must_use]
    pub fn trending(platform: Platform) -> Vec<VideoRecord> {
        match platform {
            Platform::TikTok | Platform::Rumble | Platform::Bandcamp => {
                fixtures::for_platform(platform)
            }
            Platform::YouTube | Platform::Dailymotion | Platform::PeerTube => {
                let mut all = fixtures::for_platform(Platform::TikTok);
                all.extend(fixtures::for_platform(Platform::Rumble));
                all
            }
        }
    }

    /// Case-insensitive title-substring search over a platform's set.
    ///
    /// Queries under [`MIN_FILTER_LEN`] characters and queries matching
    /// nothing return the unfiltered set: preview mode never shows an empty
    /// search result.
    #[must_use]
    pub fn search(platform: Platform, query: &str) -> Vec<VideoRecord> {
        let set = Self::trending(platform);
        // Characters, not bytes: a two-character CJK query is still short.
        if query.chars().count() < MIN_FILTER_LEN {
            return set;
        }
        let needle = query.to_lowercase();
        let matched: Vec<VideoRecord> = set
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        if matched.is_empty() { set } else { matched }
    }

    /// Resolve a stream URL across every set, with the generic sample as the
    /// guaranteed last resort.
    #[must_use]
    pub fn stream_url(id: &str) -> String {
        [Platform::TikTok, Platform::Rumble, Platform::Bandcamp]
            .into_iter()
            .flat_map(fixtures::for_platform)
            .find(|r| r.id == id)
            .and_then(|r| r.stream_url)
            .unwrap_or_else(|| FALLBACK_STREAM_URL.to_string())
    }
}

/// Catalog-backed connector for one mock-only platform.
pub struct StaticConnector {
    platform: Platform,
}

impl StaticConnector {
    /// Build the connector for one of the mock-only platforms.
    ///
    /// Building one for a live platform is a wiring mistake.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a platform that has a live connector.
    pub fn new(platform: Platform) -> Result<Self, VidraError> {
        match platform {
            Platform::TikTok | Platform::Rumble | Platform::Bandcamp => Ok(Self { platform }),
            other => Err(VidraError::InvalidArg(format!(
                "{other} is served by a live connector, not the static catalog"
            ))),
        }
    }
}

impl VidraConnector for StaticConnector {
    fn name(&self) -> &'static str {
        match self.platform {
            Platform::TikTok => "vidra-mock/tiktok",
            Platform::Rumble => "vidra-mock/rumble",
            _ => "vidra-mock/bandcamp",
        }
    }

    fn platform(&self) -> Platform {
        self.platform
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
impl TrendingProvider for StaticConnector {
    async fn trending(&self, _region: &str) -> Result<Vec<VideoRecord>, VidraError> {
        Ok(StaticCatalog::trending(self.platform))
    }
}

#[async_trait]
impl SearchProvider for StaticConnector {
    async fn search(&self, query: &str) -> Result<Vec<VideoRecord>, VidraError> {
        Ok(StaticCatalog::search(self.platform, query))
    }
}

#[async_trait]
impl StreamUrlProvider for StaticConnector {
    async fn stream_url(&self, id: &str) -> Result<Option<String>, VidraError> {
        Ok(Some(StaticCatalog::stream_url(id)))
    }
}
