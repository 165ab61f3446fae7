//! The normalized video record every provider maps into.

use serde::{Deserialize, Serialize};

use crate::Platform;

/// One normalized video entry, ready for display.
///
/// Every non-optional field is always populated; normalizers substitute the
/// explicit defaults (`"0"`, `"00:00"`, `"Recently"`, empty avatar) when a
/// raw provider field is absent, so callers never need null-checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Provider-scoped identifier. Not unique across platforms.
    pub id: String,
    /// Video title.
    pub title: String,
    /// Uploader display name.
    pub uploader: String,
    /// Pre-formatted view count, e.g. `"1.5M"`.
    pub views: String,
    /// Pre-formatted upload date, e.g. `"3 days ago"`, or `"Recently"` when unknown.
    pub uploaded: String,
    /// Pre-formatted duration, `H:MM:SS` or `M:SS`.
    pub duration: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// Which provider produced this record.
    pub platform: Platform,
    /// Uploader avatar URL; empty when the provider has none.
    pub avatar: String,
    /// Direct or embeddable stream URL, when already known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
    /// Whether the provider flagged this as short-form content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_short: Option<bool>,
}

impl VideoRecord {
    /// A record with every defaulted field at its documented default.
    ///
    /// Normalizers start from this and overwrite whatever the raw payload
    /// actually carried.
    #[must_use]
    pub fn empty(platform: Platform) -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            uploader: String::new(),
            views: "0".to_string(),
            uploaded: "Recently".to_string(),
            duration: "00:00".to_string(),
            thumbnail: String::new(),
            platform,
            avatar: String::new(),
            stream_url: None,
            is_short: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_optional_fields_are_omitted_from_the_wire() {
        let json = serde_json::to_value(VideoRecord::empty(Platform::YouTube)).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("stream_url"));
        assert!(!obj.contains_key("is_short"));
        assert_eq!(obj["views"], "0");
        assert_eq!(obj["uploaded"], "Recently");
    }

    #[test]
    fn payload_without_optional_fields_deserializes() {
        let rec: VideoRecord = serde_json::from_str(
            r#"{"id":"x","title":"T","uploader":"U","views":"0",
                "uploaded":"Recently","duration":"00:00","thumbnail":"",
                "platform":"Rumble","avatar":""}"#,
        )
        .unwrap();
        assert_eq!(rec.platform, Platform::Rumble);
        assert_eq!(rec.stream_url, None);
        assert_eq!(rec.is_short, None);
    }
}
