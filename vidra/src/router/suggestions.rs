use crate::Vidra;
use vidra_types::Platform;

impl Vidra {
    /// Fetch query completions.
    ///
    /// Only the rotation-capable provider supports suggestions; anything
    /// else, and any failure, yields an empty sequence. An empty query
    /// short-circuits before any network work.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "vidra::router", skip(self))
    )]
    pub async fn suggestions(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }
        let Ok(connector) = self.connector_for(Platform::YouTube) else {
            return Vec::new();
        };
        let Some(provider) = connector.as_suggestions_provider() else {
            return Vec::new();
        };
        provider.suggestions(query).await.unwrap_or_default()
    }
}
