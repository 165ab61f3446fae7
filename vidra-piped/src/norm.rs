//! Pure mapping from Piped wire shapes to the shared record shape.

use vidra_types::display::{format_duration, format_timestamp_secs, format_views};
use vidra_types::{Platform, VideoRecord};

use crate::wire::{StreamItem, StreamsResponse};

/// Extract the video id from a Piped relative watch URL.
fn video_id(url: &str) -> String {
    url.split("v=").nth(1).map_or_else(
        || url.trim_start_matches('/').to_string(),
        |id| id.split('&').next().unwrap_or(id).to_string(),
    )
}

/// Map one raw item to a [`VideoRecord`]. Total: absent fields become the
/// documented defaults, and the platform tag is always [`Platform::YouTube`]
/// regardless of what the payload claims.
pub(crate) fn normalize_item(raw: &StreamItem) -> VideoRecord {
    let mut rec = VideoRecord::empty(Platform::YouTube);
    if let Some(url) = &raw.url {
        rec.id = video_id(url);
    }
    if let Some(title) = &raw.title {
        rec.title.clone_from(title);
    }
    if let Some(name) = &raw.uploader_name {
        rec.uploader.clone_from(name);
    }
    if let Some(avatar) = &raw.uploader_avatar {
        rec.avatar.clone_from(avatar);
    }
    if let Some(thumb) = &raw.thumbnail {
        rec.thumbnail.clone_from(thumb);
    }
    rec.views = format_views(raw.views.unwrap_or(0));
    rec.duration = format_duration(raw.duration.unwrap_or(0));
    rec.uploaded = raw.uploaded_date.clone().unwrap_or_else(|| {
        // `uploaded` is epoch milliseconds when present.
        format_timestamp_secs(raw.uploaded.unwrap_or(0) / 1000)
    });
    rec.is_short = raw.is_short;
    rec
}

/// Order-preserving batch normalization.
pub(crate) fn normalize_all(items: &[StreamItem]) -> Vec<VideoRecord> {
    items.iter().map(normalize_item).collect()
}

/// Pick the playable URL out of a `/streams/{id}` response.
///
/// Prefers the packaged HLS manifest; otherwise the best progressive
/// (audio+video) variant by the fixed preference order 1080p, 720p, any.
/// Returns `None` when nothing qualifies.
pub(crate) fn select_stream_url(resp: &StreamsResponse) -> Option<String> {
    if let Some(hls) = &resp.hls {
        if !hls.is_empty() {
            return Some(hls.clone());
        }
    }
    let progressive: Vec<_> = resp
        .video_streams
        .iter()
        .filter(|v| !v.video_only && v.url.is_some())
        .collect();
    for wanted in ["1080p", "720p"] {
        if let Some(v) = progressive
            .iter()
            .find(|v| v.quality.as_deref() == Some(wanted))
        {
            return v.url.clone();
        }
    }
    progressive.first().and_then(|v| v.url.clone())
}
