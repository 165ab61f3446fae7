//! Platform tags and routing-token resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One external video source.
///
/// The tag stamped on every [`crate::VideoRecord`] identifies which provider
/// produced it; record identifiers are only unique within a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// YouTube, reached through a pool of interchangeable Piped mirrors.
    YouTube,
    /// Dailymotion's public REST API.
    Dailymotion,
    /// Federated PeerTube instances, queried through Sepia Search.
    PeerTube,
    /// TikTok. No API reachable from a client; served from a static catalog.
    TikTok,
    /// Rumble. No API reachable from a client; served from a static catalog.
    Rumble,
    /// Bandcamp. Listed but never integrated; its catalog set is empty.
    Bandcamp,
}

impl Platform {
    /// All known platforms, in display order.
    pub const ALL: [Self; 6] = [
        Self::YouTube,
        Self::Dailymotion,
        Self::PeerTube,
        Self::TikTok,
        Self::Rumble,
        Self::Bandcamp,
    ];

    /// Canonical display name, matching the routing tokens callers pass in.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::YouTube => "YouTube",
            Self::Dailymotion => "Dailymotion",
            Self::PeerTube => "PeerTube",
            Self::TikTok => "TikTok",
            Self::Rumble => "Rumble",
            Self::Bandcamp => "Bandcamp",
        }
    }

    /// Resolve a caller-supplied routing token to a platform.
    ///
    /// `"All"` is the documented breadth sentinel and maps to the
    /// rotation-capable default, [`Platform::YouTube`]. Unrecognized tokens
    /// resolve the same way so that a stale or misspelled token from the
    /// caller degrades to the widest catalog instead of an error.
    #[must_use]
    pub fn resolve(token: &str) -> Self {
        token.parse().unwrap_or(Self::YouTube)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known platform tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform: {token}")]
pub struct PlatformParseError {
    /// The token that failed to parse.
    pub token: String,
}

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PlatformParseError {
                token: s.to_string(),
            })
    }
}
