use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use vidra_core::{ExecutionContext, NativeTransport, Transport, VidraConnector, VidraError, WebTransport};
use vidra_dailymotion::DailymotionConnector;
use vidra_mock::{StaticCatalog, StaticConnector};
use vidra_peertube::PeerTubeConnector;
use vidra_piped::PipedConnector;
use vidra_types::{Platform, VideoRecord};

/// Base artificial delay before handing out a web-preview fallback set.
/// Mirrors real network latency so the surrounding UI does not flicker.
const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(400);

/// Jitter ceiling added on top of the base fallback delay.
const FALLBACK_JITTER_MS: u64 = 150;

pub(crate) struct VidraConfig {
    pub(crate) context: ExecutionContext,
    pub(crate) fallback_delay: Duration,
}

/// Orchestrator that routes requests to per-platform connectors and absorbs
/// every failure into the fallback policy.
pub struct Vidra {
    pub(crate) connectors: Vec<Arc<dyn VidraConnector>>,
    pub(crate) cfg: VidraConfig,
}

/// Builder for constructing a [`Vidra`] orchestrator.
pub struct VidraBuilder {
    connectors: Vec<Arc<dyn VidraConnector>>,
    cfg: VidraConfig,
}

impl Default for VidraBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VidraBuilder {
    /// Create a builder with no connectors, a native execution context, and
    /// the default fallback delay.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: VidraConfig {
                context: ExecutionContext::Native,
                fallback_delay: DEFAULT_FALLBACK_DELAY,
            },
        }
    }

    /// Register a provider connector. The first connector registered for a
    /// platform wins; duplicates for the same platform are never consulted.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn VidraConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Declare which runtime environment the application runs in. This keys
    /// the fallback tier: catalog sets for `Web`, empty results for `Native`.
    #[must_use]
    pub const fn execution_context(mut self, context: ExecutionContext) -> Self {
        self.cfg.context = context;
        self
    }

    /// Override the artificial delay applied before a web-preview fallback.
    /// Tests set this to zero (or run under a paused clock).
    #[must_use]
    pub const fn fallback_delay(mut self, delay: Duration) -> Self {
        self.cfg.fallback_delay = delay;
        self
    }

    /// Build the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered.
    pub fn build(self) -> Result<Vidra, VidraError> {
        if self.connectors.is_empty() {
            return Err(VidraError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        Ok(Vidra {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

impl Vidra {
    /// Start building a [`Vidra`] instance.
    #[must_use]
    pub fn builder() -> VidraBuilder {
        VidraBuilder::new()
    }

    /// Assemble the full production stack for the given execution context:
    /// the transport strategy matching the context, the Piped rotator over
    /// the default mirror pool, the Dailymotion and PeerTube connectors, and
    /// the three catalog-backed connectors.
    ///
    /// # Errors
    /// Returns `InvalidArg` only if the static connector wiring is wrong,
    /// which would be a bug in this function.
    pub fn default_stack(context: ExecutionContext) -> Result<Self, VidraError> {
        let transport: Arc<dyn Transport> = match context {
            ExecutionContext::Native => Arc::new(NativeTransport::new()),
            ExecutionContext::Web => Arc::new(WebTransport::new()),
        };

        let piped = PipedConnector::builder()
            .transport(transport.clone())
            .build()?;

        Self::builder()
            .execution_context(context)
            .with_connector(Arc::new(piped))
            .with_connector(Arc::new(DailymotionConnector::new(transport.clone())))
            .with_connector(Arc::new(PeerTubeConnector::new(transport)))
            .with_connector(Arc::new(StaticConnector::new(Platform::TikTok)?))
            .with_connector(Arc::new(StaticConnector::new(Platform::Rumble)?))
            .with_connector(Arc::new(StaticConnector::new(Platform::Bandcamp)?))
            .build()
    }

    pub(crate) fn connector_for(
        &self,
        platform: Platform,
    ) -> Result<&Arc<dyn VidraConnector>, VidraError> {
        self.connectors
            .iter()
            .find(|c| c.platform() == platform)
            .ok_or_else(|| {
                VidraError::InvalidArg(format!("no connector registered for {platform}"))
            })
    }

    /// The web-preview half of the fallback policy: wait out the artificial
    /// delay, then hand back the requested platform's catalog set.
    pub(crate) async fn catalog_fallback(
        &self,
        platform: Platform,
        query: Option<&str>,
    ) -> Vec<VideoRecord> {
        let jitter = rand::rng().random_range(0..FALLBACK_JITTER_MS);
        tokio::time::sleep(self.cfg.fallback_delay + Duration::from_millis(jitter)).await;
        match query {
            Some(q) => StaticCatalog::search(platform, q),
            None => StaticCatalog::trending(platform),
        }
    }

    /// Convert a dispatch failure into the fallback records for `platform`.
    ///
    /// Explicit pattern match, not catch-as-control-flow: the error is fully
    /// consumed here and never escapes to the caller.
    pub(crate) async fn absorb_failure(
        &self,
        platform: Platform,
        query: Option<&str>,
        _err: &VidraError,
    ) -> Vec<VideoRecord> {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            target: "vidra::router",
            platform = %platform,
            error = %_err,
            "provider dispatch failed, applying fallback tier"
        );
        match self.cfg.context {
            // A genuinely native failure likely means the device is offline;
            // an empty feed is more honest than stale mock data.
            ExecutionContext::Native => Vec::new(),
            ExecutionContext::Web => self.catalog_fallback(platform, query).await,
        }
    }
}
