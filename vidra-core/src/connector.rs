use async_trait::async_trait;

use crate::VidraError;
use vidra_types::{Platform, VideoRecord};

/// Focused role trait for connectors that can list trending videos.
#[async_trait]
pub trait TrendingProvider: Send + Sync {
    /// Fetch the trending feed, already normalized, for a two-letter region.
    async fn trending(&self, region: &str) -> Result<Vec<VideoRecord>, VidraError>;
}

/// Focused role trait for connectors that can search videos.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Perform a free-text search and return normalized records in provider order.
    async fn search(&self, query: &str) -> Result<Vec<VideoRecord>, VidraError>;
}

/// Focused role trait for connectors that offer query completions.
#[async_trait]
pub trait SuggestionsProvider: Send + Sync {
    /// Fetch completion strings for a partial query.
    async fn suggestions(&self, query: &str) -> Result<Vec<String>, VidraError>;
}

/// Focused role trait for connectors that can resolve a playable stream URL.
#[async_trait]
pub trait StreamUrlProvider: Send + Sync {
    /// Resolve a provider-scoped video id to a playable or embeddable URL.
    ///
    /// `Ok(None)` means the provider answered but offered nothing playable.
    async fn stream_url(&self, id: &str) -> Result<Option<String>, VidraError>;
}

/// A provider connector: one external video source.
///
/// Capability accessors follow the narrow-trait pattern: a connector opts in
/// to each role by overriding the accessor to return itself, and the facade
/// routes only through the roles a connector actually exposes.
pub trait VidraConnector: Send + Sync {
    /// Stable connector name used in error messages and logs.
    fn name(&self) -> &'static str;

    /// The platform tag this connector's records carry.
    fn platform(&self) -> Platform;

    /// Trending capability, if supported.
    fn as_trending_provider(&self) -> Option<&dyn TrendingProvider> {
        None
    }

    /// Search capability, if supported.
    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        None
    }

    /// Suggestions capability, if supported.
    fn as_suggestions_provider(&self) -> Option<&dyn SuggestionsProvider> {
        None
    }

    /// Stream-resolution capability, if supported.
    fn as_stream_url_provider(&self) -> Option<&dyn StreamUrlProvider> {
        None
    }
}
