use vidra_types::{Platform, VideoRecord};

use super::video;

const SAMPLES: &str = "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample";

pub fn all() -> Vec<VideoRecord> {
    vec![
        video(
            Platform::Rumble,
            "rb-1101",
            "Restoring a 1972 pickup, part 4: the engine turns",
            "GarageRevival",
            "312.5K",
            "1 day ago",
            "24:18",
            &format!("{SAMPLES}/BigBuckBunny.mp4"),
        ),
        video(
            Platform::Rumble,
            "rb-1102",
            "Backyard astronomy on a budget",
            "NightSkyNate",
            "88.2K",
            "4 days ago",
            "15:42",
            &format!("{SAMPLES}/ElephantsDream.mp4"),
        ),
        video(
            Platform::Rumble,
            "rb-1103",
            "Homestead week 12: first harvest",
            "PrairieRoots",
            "156.7K",
            "1 week ago",
            "31:05",
            &format!("{SAMPLES}/Sintel.mp4"),
        ),
        video(
            Platform::Rumble,
            "rb-1104",
            "Full fight breakdown: footwork fundamentals",
            "RingsideReplay",
            "203.9K",
            "2 weeks ago",
            "18:33",
            &format!("{SAMPLES}/SubaruOutbackOnStreetAndDirt.mp4"),
        ),
    ]
}
