use thiserror::Error;

/// Failures crossing the bridge boundary.
///
/// Pull failures abort reconciliation and surface once to the user; push
/// failures are logged by the dispatcher and never reach callers. Decode
/// anomalies are not errors at all — the row codec is total.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Network-level failure: DNS, connect, TLS, or a dropped stream.
    #[error("bridge transport error: {0}")]
    Transport(String),

    /// The bridge answered with a non-success HTTP status.
    #[error("bridge returned HTTP {status}")]
    Http { status: u16 },

    /// The pull response body was not the expected snapshot JSON.
    #[error("malformed snapshot payload: {0}")]
    MalformedSnapshot(String),
}

impl From<ureq::Error> for BridgeError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, _) => Self::Http { status },
            ureq::Error::Transport(transport) => Self::Transport(transport.to_string()),
        }
    }
}
