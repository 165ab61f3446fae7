use crate::Vidra;
use vidra_core::VidraError;
use vidra_types::{Platform, VideoRecord};

impl Vidra {
    /// Fetch the trending feed for a provider token and two-letter region.
    ///
    /// Never fails: a dispatch failure is absorbed into the fallback tier
    /// for the execution context. An empty result from a healthy provider is
    /// returned as-is.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "vidra::router", skip(self))
    )]
    pub async fn trending(&self, provider: &str, region: &str) -> Vec<VideoRecord> {
        let platform = Platform::resolve(provider);
        match self.fetch_trending(platform, region).await {
            Ok(records) => records,
            Err(e) => self.absorb_failure(platform, None, &e).await,
        }
    }

    async fn fetch_trending(
        &self,
        platform: Platform,
        region: &str,
    ) -> Result<Vec<VideoRecord>, VidraError> {
        let connector = self.connector_for(platform)?;
        let provider = connector
            .as_trending_provider()
            .ok_or_else(|| VidraError::unsupported("trending"))?;
        provider.trending(region).await
    }
}
