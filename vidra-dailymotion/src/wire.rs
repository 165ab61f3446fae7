//! Raw Dailymotion API shapes.
//!
//! Dailymotion flattens nested selectors into dotted keys (`owner.screenname`),
//! so the field names here are literal.

use serde::Deserialize;

/// Envelope of `/videos` responses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoPage {
    pub list: Vec<VideoEntry>,
}

/// One entry of the field-limited `/videos` listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "thumbnail_480_url")]
    pub thumbnail: Option<String>,
    pub duration: Option<u64>,
    #[serde(rename = "views_total")]
    pub views: Option<u64>,
    /// Unix timestamp in seconds.
    #[serde(rename = "created_time")]
    pub created: Option<i64>,
    #[serde(rename = "owner.screenname")]
    pub owner_name: Option<String>,
    #[serde(rename = "owner.avatar_190_url")]
    pub owner_avatar: Option<String>,
}
