//! Vidra aggregates video metadata from multiple unreliable providers behind
//! one normalized, never-failing surface.
//!
//! Overview
//! - Routes each request to the connector registered for the requested
//!   platform (`"All"` and unknown tokens route to the rotation-capable
//!   YouTube default).
//! - The YouTube connector rotates across a pool of Piped mirrors with
//!   bounded failover; Dailymotion and PeerTube are single-endpoint;
//!   TikTok/Rumble/Bandcamp are served from a static catalog.
//! - The public operations never return an error. A failed dispatch is
//!   pattern-matched into the fallback tier: in a web-preview context the
//!   static catalog set for the requested platform (after a short jittered
//!   delay that mirrors real network latency), in a native context an empty
//!   result on the reasoning that a native failure usually means the device
//!   is offline and honest emptiness beats stale mock data.
//!
//! Examples
//! ```rust,ignore
//! use vidra::Vidra;
//! use vidra_core::ExecutionContext;
//!
//! let vidra = Vidra::default_stack(ExecutionContext::Native)?;
//! let feed = vidra.trending("All", "US").await;          // never fails
//! let hits = vidra.search("ocean documentary", "PeerTube").await;
//! let completions = vidra.suggestions("ocean doc").await;
//! let playable = vidra.stream_url(&feed[0].id, "YouTube").await;
//! ```
#![warn(missing_docs)]

mod core;
mod router;

pub use crate::core::{Vidra, VidraBuilder};

pub use vidra_core::{ExecutionContext, VidraError};
pub use vidra_types::{Platform, VideoRecord};
