//! Vidra-specific data transfer objects shared across the workspace.
#![warn(missing_docs)]

pub mod display;
mod platform;
mod record;

pub use platform::{Platform, PlatformParseError};
pub use record::VideoRecord;
