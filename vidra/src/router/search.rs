use crate::Vidra;
use vidra_core::VidraError;
use vidra_types::{Platform, VideoRecord};

impl Vidra {
    /// Search one provider for a free-text query.
    ///
    /// Never fails: a dispatch failure is absorbed into the fallback tier,
    /// and in a web context the catalog fallback applies the same
    /// title-substring filter the mock-backed providers use.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "vidra::router", skip(self))
    )]
    pub async fn search(&self, query: &str, provider: &str) -> Vec<VideoRecord> {
        let platform = Platform::resolve(provider);
        match self.fetch_search(platform, query).await {
            Ok(records) => records,
            Err(e) => self.absorb_failure(platform, Some(query), &e).await,
        }
    }

    async fn fetch_search(
        &self,
        platform: Platform,
        query: &str,
    ) -> Result<Vec<VideoRecord>, VidraError> {
        let connector = self.connector_for(platform)?;
        let provider = connector
            .as_search_provider()
            .ok_or_else(|| VidraError::unsupported("search"))?;
        provider.search(query).await
    }
}
