use async_trait::async_trait;
use url::Url;

use crate::VidraError;

/// Which runtime environment the surrounding application is executing in.
///
/// Chosen once when the facade is assembled. The facade also keys its
/// fallback tier on this: a web preview falls back to the static catalog,
/// while a native failure (device likely offline) yields an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionContext {
    /// Host-level HTTP access, free of browser cross-origin restrictions.
    #[default]
    Native,
    /// Browser-hosted runtime; cross-origin calls may need a relay proxy.
    Web,
}

impl ExecutionContext {
    /// True for the browser-hosted context.
    #[must_use]
    pub const fn is_web(self) -> bool {
        matches!(self, Self::Web)
    }
}

/// A single HTTP GET against an absolute URL.
///
/// Implementations perform exactly one logical fetch and surface any failure
/// as [`VidraError::Transport`]; retry policy lives one layer up, in the
/// rotator and the facade.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and return the raw response body.
    async fn get(&self, url: &Url) -> Result<String, VidraError>;
}

/// Fixed user-agent presented by the native strategy. Some providers return
/// leaner payloads to mobile browsers.
const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Mobile Safari/537.36";

/// Default CORS relay used by [`WebTransport`] as a last resort.
pub const DEFAULT_CORS_PROXY: &str = "https://corsproxy.io/?url=";

async fn checked_get(client: &reqwest::Client, url: &Url) -> Result<String, VidraError> {
    let resp = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| VidraError::transport(url.as_str(), e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(VidraError::transport(
            url.as_str(),
            format!("status {status}"),
        ));
    }
    resp.text()
        .await
        .map_err(|e| VidraError::transport(url.as_str(), e.to_string()))
}

/// Native strategy: the host platform's HTTP client, no origin restrictions.
#[derive(Clone)]
pub struct NativeTransport {
    client: reqwest::Client,
}

impl NativeTransport {
    /// Build a transport with the fixed mobile user-agent.
    ///
    /// # Panics
    /// Panics if building the underlying `reqwest` client fails, which is
    /// unexpected in normal environments.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(MOBILE_USER_AGENT)
                .build()
                .expect("Failed to build reqwest client for NativeTransport"),
        }
    }
}

impl Default for NativeTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for NativeTransport {
    async fn get(&self, url: &Url) -> Result<String, VidraError> {
        checked_get(&self.client, url).await
    }
}

/// Web strategy: direct fetch first, then one retry through a CORS relay.
///
/// Browser-context calls are subject to cross-origin restrictions the native
/// context does not have, so a direct failure is retried exactly once by
/// prefixing the target URL with the relay base. A second failure fails the
/// call.
#[derive(Clone)]
pub struct WebTransport {
    client: reqwest::Client,
    proxy_base: String,
}

impl WebTransport {
    /// Build a transport using [`DEFAULT_CORS_PROXY`] as the relay.
    ///
    /// # Panics
    /// Panics if building the underlying `reqwest` client fails, which is
    /// unexpected in normal environments.
    #[must_use]
    pub fn new() -> Self {
        Self::with_proxy(DEFAULT_CORS_PROXY)
    }

    /// Build a transport relaying through `proxy_base` on direct failure.
    ///
    /// The target URL is percent-encoded and appended verbatim, so the base
    /// should end with its query key (e.g. `...?url=`).
    ///
    /// # Panics
    /// Panics if building the underlying `reqwest` client fails, which is
    /// unexpected in normal environments.
    #[must_use]
    pub fn with_proxy(proxy_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .build()
                .expect("Failed to build reqwest client for WebTransport"),
            proxy_base: proxy_base.into(),
        }
    }

    fn proxied(&self, url: &Url) -> Result<Url, VidraError> {
        let encoded: String = url::form_urlencoded::byte_serialize(url.as_str().as_bytes()).collect();
        let relayed = format!("{}{encoded}", self.proxy_base);
        Url::parse(&relayed).map_err(|e| VidraError::transport(relayed.clone(), e.to_string()))
    }
}

impl Default for WebTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for WebTransport {
    async fn get(&self, url: &Url) -> Result<String, VidraError> {
        match checked_get(&self.client, url).await {
            Ok(body) => Ok(body),
            Err(_direct) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(target: "vidra::transport", url = %url, "direct fetch failed, retrying via relay");
                let relayed = self.proxied(url)?;
                checked_get(&self.client, &relayed).await
            }
        }
    }
}
