//! `ureq`-backed bridge client.

use std::time::Duration;

use tracing::debug;

use super::{Bridge, PushRequest, Snapshot};
use crate::error::BridgeError;

/// Blocking HTTP client for the bridge endpoint. One instance per
/// configured URL; cheap to clone the agent's connection pool across
/// calls.
pub struct HttpBridge {
    url: String,
    agent: ureq::Agent,
}

impl HttpBridge {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        // The bridge sits behind a redirecting script host; follow them.
        let agent = ureq::AgentBuilder::new()
            .redirects(8)
            .timeout(Duration::from_secs(30))
            .build();
        Self {
            url: url.into(),
            agent,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Bridge for HttpBridge {
    fn pull(&self) -> Result<Snapshot, BridgeError> {
        debug!(url = %self.url, "pulling snapshot");
        let response = self.agent.get(&self.url).call()?;
        response
            .into_json::<Snapshot>()
            .map_err(|err| BridgeError::MalformedSnapshot(err.to_string()))
    }

    fn push(&self, request: &PushRequest) -> Result<(), BridgeError> {
        debug!(
            sheet = request.target_sheet,
            action = ?request.action,
            "pushing row"
        );
        // Send-and-forget: the response body is never parsed.
        self.agent.post(&self.url).send_json(request)?;
        Ok(())
    }
}
