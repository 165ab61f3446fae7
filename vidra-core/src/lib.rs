//! vidra-core
//!
//! Core abstractions shared across the vidra ecosystem.
//!
//! - `error`: the unified [`VidraError`] taxonomy.
//! - `transport`: the [`Transport`] trait and the two delivery strategies
//!   (native HTTP vs. browser-style fetch with a CORS-relay fallback).
//! - `rotator`: bounded round-robin failover over a pool of mirror endpoints.
//! - `connector`: the `VidraConnector` umbrella trait and capability traits.
//!
//! Which transport strategy is active is decided once, at construction time,
//! by whoever assembles the facade; rotator and connectors are oblivious to
//! the choice and only ever see the `Transport` trait.
#![warn(missing_docs)]

/// Connector capability traits and the primary `VidraConnector` interface.
pub mod connector;
mod error;
/// Bounded round-robin failover over interchangeable mirror endpoints.
pub mod rotator;
/// HTTP delivery strategies behind the `Transport` seam.
pub mod transport;

pub use connector::VidraConnector;
pub use error::VidraError;
pub use rotator::{EndpointRotator, MAX_ROTATION_ATTEMPTS};
pub use transport::{ExecutionContext, NativeTransport, Transport, WebTransport};

pub use vidra_types::{Platform, VideoRecord};

/// Parse a raw provider payload, mapping any shape mismatch to
/// [`VidraError::MalformedResponse`].
///
/// # Errors
/// Returns `MalformedResponse` when the payload is not valid JSON for `T`.
pub fn parse_json<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, VidraError> {
    serde_json::from_str(raw).map_err(|e| VidraError::MalformedResponse(e.to_string()))
}
