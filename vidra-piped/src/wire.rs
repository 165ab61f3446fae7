//! Raw Piped API response shapes.
//!
//! Treated as untrusted external data: every field is optional or defaulted
//! so an unexpected payload degrades to defaults instead of failing
//! deserialization outright.

use serde::Deserialize;

/// One entry of a trending feed or search result page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StreamItem {
    /// Relative watch URL, e.g. `/watch?v=abc123`.
    pub url: Option<String>,
    /// Item kind: `"stream"`, `"channel"`, or `"playlist"`.
    pub r#type: Option<String>,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub uploader_name: Option<String>,
    pub uploader_avatar: Option<String>,
    /// Pre-rendered relative date, e.g. `"3 days ago"`.
    pub uploaded_date: Option<String>,
    /// Upload time in epoch milliseconds; fallback when the text is absent.
    pub uploaded: Option<i64>,
    pub duration: Option<u64>,
    pub views: Option<u64>,
    pub is_short: Option<bool>,
}

/// Envelope of `/search` responses; trending returns a bare array instead.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchPage {
    pub items: Vec<StreamItem>,
}

/// Response of `/streams/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StreamsResponse {
    /// Packaged adaptive manifest, preferred when present.
    pub hls: Option<String>,
    pub video_streams: Vec<VideoVariant>,
}

/// One progressive or video-only variant offered by `/streams/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoVariant {
    pub url: Option<String>,
    /// Label such as `"1080p"` or `"720p"`.
    pub quality: Option<String>,
    /// True when the variant carries no audio track.
    pub video_only: bool,
}
