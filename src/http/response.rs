//! Response bodies for the presentation layer.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;

use crate::health::{ProbeResult, ProbeStatus};

/// Body of GET /ping.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

impl PingResponse {
    pub fn pong() -> Self {
        Self {
            status: "ok",
            message: "pong",
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Body of GET /time.
#[derive(Debug, Serialize)]
pub struct TimeResponse {
    pub now: String,
}

impl TimeResponse {
    pub fn now() -> Self {
        Self {
            now: Utc::now().to_rfc3339(),
        }
    }
}

/// Body of a single-probe endpoint: one entry keyed by probe name,
/// e.g. `{"mysql": "ok"}`.
pub fn single_probe_body(result: ProbeResult) -> BTreeMap<String, ProbeStatus> {
    let mut body = BTreeMap::new();
    body.insert(result.name, result.status);
    body
}
