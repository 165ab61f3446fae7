//! Raw Sepia Search response shapes.

use serde::Deserialize;

/// Envelope of `/api/v1/search/videos`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchEnvelope {
    pub data: Vec<VideoData>,
}

/// One federated video entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoData {
    pub uuid: Option<String>,
    pub name: Option<String>,
    pub duration: Option<u64>,
    pub views: Option<u64>,
    /// RFC 3339 publish timestamp.
    pub published_at: Option<String>,
    /// Full watch URL on the origin instance.
    pub url: Option<String>,
    /// Path relative to the origin instance, e.g. `/lazy-static/thumbnails/x.jpg`.
    pub thumbnail_path: Option<String>,
    pub account: Option<Account>,
}

/// The publishing account on its origin instance.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Account {
    pub display_name: Option<String>,
    pub host: Option<String>,
    pub avatar: Option<Avatar>,
}

/// Account avatar, host-relative like the thumbnail.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Avatar {
    pub path: Option<String>,
}
