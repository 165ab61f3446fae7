use vidra_types::{Platform, VideoRecord};

use super::video;

const SAMPLES: &str = "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample";

pub fn all() -> Vec<VideoRecord> {
    let mut set = vec![
        video(
            Platform::TikTok,
            "tt-7301",
            "POV: your cat discovers the standing desk",
            "whiskerworks",
            "2.4M",
            "2 days ago",
            "0:27",
            &format!("{SAMPLES}/ForBiggerFun.mp4"),
        ),
        video(
            Platform::TikTok,
            "tt-7302",
            "60-second sourdough, no really",
            "flourhour",
            "890.3K",
            "5 days ago",
            "1:00",
            &format!("{SAMPLES}/ForBiggerJoyrides.mp4"),
        ),
        video(
            Platform::TikTok,
            "tt-7303",
            "Street photography settings nobody tells you",
            "apertureandy",
            "445.1K",
            "1 week ago",
            "0:58",
            &format!("{SAMPLES}/ForBiggerEscapes.mp4"),
        ),
        video(
            Platform::TikTok,
            "tt-7304",
            "Tiny apartment, massive plant collection",
            "leafonwheels",
            "1.1M",
            "2 weeks ago",
            "0:45",
            &format!("{SAMPLES}/ForBiggerBlazes.mp4"),
        ),
        video(
            Platform::TikTok,
            "tt-7305",
            "Why your pasta water needs more salt",
            "saucestan",
            "3.2M",
            "3 weeks ago",
            "0:52",
            &format!("{SAMPLES}/ForBiggerMeltdowns.mp4"),
        ),
    ];
    for rec in &mut set {
        rec.is_short = Some(true);
    }
    set
}
