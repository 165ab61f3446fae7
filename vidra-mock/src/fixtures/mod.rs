//! Static per-platform video sets.
//!
//! These are product data, not test fixtures: the platforms served from here
//! have no API reachable from a client, and the facade also hands these sets
//! out as the web-preview fallback when a live provider fails.

pub mod bandcamp;
pub mod rumble;
pub mod tiktok;

use vidra_types::{Platform, VideoRecord};

/// Convenience constructor shared by the per-platform sets.
pub(crate) fn video(
    platform: Platform,
    id: &str,
    title: &str,
    uploader: &str,
    views: &str,
    uploaded: &str,
    duration: &str,
    stream_url: &str,
) -> VideoRecord {
    VideoRecord {
        id: id.to_string(),
        title: title.to_string(),
        uploader: uploader.to_string(),
        views: views.to_string(),
        uploaded: uploaded.to_string(),
        duration: duration.to_string(),
        thumbnail: format!("https://picsum.photos/seed/{id}/640/360"),
        platform,
        avatar: format!("https://i.pravatar.cc/150?u={uploader}"),
        stream_url: Some(stream_url.to_string()),
        is_short: None,
    }
}

/// The set for one platform, empty when it has none.
#[must_use]
pub fn for_platform(platform: Platform) -> Vec<VideoRecord> {
    match platform {
        Platform::TikTok => tiktok::all(),
        Platform::Rumble => rumble::all(),
        Platform::Bandcamp => bandcamp::all(),
        _ => Vec::new(),
    }
}
