use thiserror::Error;

/// Unified error type for the vidra workspace.
///
/// Transport and rotation errors surface upward through the connectors; all
/// variants are absorbed at the aggregation facade, whose public surface is
/// infallible by contract.
#[derive(Debug, Error)]
pub enum VidraError {
    /// The HTTP layer failed: network error or non-2xx status.
    #[error("transport failure for {url}: {msg}")]
    Transport {
        /// The absolute URL that was requested.
        url: String,
        /// Human-readable failure description (status code or I/O error).
        msg: String,
    },

    /// Every attempted mirror in the rotation pool failed for one call.
    #[error("all {attempts} attempted instances failed")]
    AllInstancesExhausted {
        /// How many distinct pool entries were tried.
        attempts: usize,
    },

    /// The payload arrived but is missing the expected structure.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "suggestions").
        capability: &'static str,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },
}

impl VidraError {
    /// Helper: build a `Transport` error for a URL and message.
    pub fn transport(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(cap: &'static str) -> Self {
        Self::Unsupported { capability: cap }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }
}
