use vidra_types::VideoRecord;

/// Bandcamp is listed but was never integrated; its set is intentionally
/// empty rather than invented.
pub fn all() -> Vec<VideoRecord> {
    Vec::new()
}
