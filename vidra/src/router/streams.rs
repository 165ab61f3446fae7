use crate::Vidra;
use vidra_types::Platform;

impl Vidra {
    /// Resolve a provider-scoped video id to a playable or embeddable URL.
    ///
    /// Never fails: `None` covers an unsupported platform, a provider that
    /// offered nothing playable, and any transport or rotation failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "vidra::router", skip(self))
    )]
    pub async fn stream_url(&self, id: &str, provider: &str) -> Option<String> {
        let platform = Platform::resolve(provider);
        let connector = self.connector_for(platform).ok()?;
        let resolver = connector.as_stream_url_provider()?;
        match resolver.stream_url(id).await {
            Ok(url) => url,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "vidra::router",
                    platform = %platform,
                    error = %_e,
                    "stream resolution failed"
                );
                None
            }
        }
    }
}
