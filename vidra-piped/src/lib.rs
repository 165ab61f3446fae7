//! vidra-piped
//!
//! Rotation-capable YouTube connector speaking the Piped API. All requests go
//! through an [`EndpointRotator`] over a pool of interchangeable public
//! mirrors, so a dead instance is skipped without the caller noticing.
#![warn(missing_docs)]

mod norm;
mod wire;

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use vidra_core::connector::{
    SearchProvider, StreamUrlProvider, SuggestionsProvider, TrendingProvider, VidraConnector,
};
use vidra_core::{EndpointRotator, Transport, VidraError, parse_json};
use vidra_types::{Platform, VideoRecord};

/// Public Piped mirrors used when the builder is given no pool of its own.
///
/// Order matters: the rotator starts from the first entry until a failover
/// moves the preferred cursor.
pub const DEFAULT_INSTANCES: [&str; 4] = [
    "https://pipedapi.kavin.rocks",
    "https://pipedapi.adminforge.de",
    "https://api.piped.yt",
    "https://pipedapi.leptons.xyz",
];

fn encode(query: &str) -> String {
    url::form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

/// YouTube connector backed by the Piped mirror pool.
pub struct PipedConnector {
    rotator: EndpointRotator,
}

/// Builder for [`PipedConnector`].
pub struct PipedBuilder {
    instances: Vec<Url>,
    transport: Option<Arc<dyn Transport>>,
}

impl PipedBuilder {
    /// Override the mirror pool.
    #[must_use]
    pub fn instances(mut self, instances: Vec<Url>) -> Self {
        self.instances = instances;
        self
    }

    /// Inject the transport strategy (native or web) chosen by the caller.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no transport was injected or the mirror
    /// pool is empty.
    pub fn build(self) -> Result<PipedConnector, VidraError> {
        let transport = self.transport.ok_or_else(|| {
            VidraError::InvalidArg("piped connector needs a transport".to_string())
        })?;
        Ok(PipedConnector {
            rotator: EndpointRotator::new(self.instances, transport)?,
        })
    }
}

impl PipedConnector {
    /// Start building a connector over [`DEFAULT_INSTANCES`].
    #[must_use]
    pub fn builder() -> PipedBuilder {
        let instances = DEFAULT_INSTANCES
            .iter()
            .map(|s| Url::parse(s).expect("default piped instance URLs are valid"))
            .collect();
        PipedBuilder {
            instances,
            transport: None,
        }
    }

    /// The rotator, exposed for inspection (preferred-mirror cursor).
    #[must_use]
    pub const fn rotator(&self) -> &EndpointRotator {
        &self.rotator
    }
}

impl VidraConnector for PipedConnector {
    fn name(&self) -> &'static str {
        "vidra-piped"
    }

    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    fn as_trending_provider(&self) -> Option<&dyn TrendingProvider> {
        Some(self)
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self)
    }

    fn as_suggestions_provider(&self) -> Option<&dyn SuggestionsProvider> {
        Some(self)
    }

    fn as_stream_url_provider(&self) -> Option<&dyn StreamUrlProvider> {
        Some(self)
    }
}

#[async_trait]
impl TrendingProvider for PipedConnector {
    async fn trending(&self, region: &str) -> Result<Vec<VideoRecord>, VidraError> {
        let raw = self
            .rotator
            .fetch_with_rotation(&format!("/trending?region={}", encode(region)))
            .await?;
        let items: Vec<wire::StreamItem> = parse_json(&raw)?;
        Ok(norm::normalize_all(&items))
    }
}

#[async_trait]
impl SearchProvider for PipedConnector {
    async fn search(&self, query: &str) -> Result<Vec<VideoRecord>, VidraError> {
        let raw = self
            .rotator
            .fetch_with_rotation(&format!("/search?q={}&filter=all", encode(query)))
            .await?;
        let page: wire::SearchPage = parse_json(&raw)?;
        // Search pages mix channels and playlists in; only playable streams
        // become records.
        let streams: Vec<wire::StreamItem> = page
            .items
            .into_iter()
            .filter(|i| i.r#type.as_deref() == Some("stream"))
            .collect();
        Ok(norm::normalize_all(&streams))
    }
}

#[async_trait]
impl SuggestionsProvider for PipedConnector {
    async fn suggestions(&self, query: &str) -> Result<Vec<String>, VidraError> {
        let raw = self
            .rotator
            .fetch_with_rotation(&format!("/suggestions?query={}", encode(query)))
            .await?;
        parse_json(&raw)
    }
}

#[async_trait]
impl StreamUrlProvider for PipedConnector {
    async fn stream_url(&self, id: &str) -> Result<Option<String>, VidraError> {
        let raw = self
            .rotator
            .fetch_with_rotation(&format!("/streams/{}", encode(id)))
            .await?;
        let resp: wire::StreamsResponse = parse_json(&raw)?;
        Ok(norm::select_stream_url(&resp))
    }
}
