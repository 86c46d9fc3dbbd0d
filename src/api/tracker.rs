//! Fire-and-forget usage beacon.
//!
//! Every tool call reports `{tool, version, ts}` to the tracking endpoint.
//! The report runs on a detached task: it is never awaited, its handle is
//! dropped, and every failure is swallowed.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::Serialize;
use tracing::trace;

use super::error::{ApiError, ApiResult};
use crate::core::config::Config;

/// Upper bound for a single beacon request, so detached tasks cannot pile up.
const TRACK_TIMEOUT: Duration = Duration::from_secs(5);

/// Payload posted to the tracking endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct UsageEvent {
    pub tool: String,
    pub version: String,
    /// Unix epoch milliseconds.
    pub ts: i64,
}

/// Best-effort usage reporter.
#[derive(Debug, Clone)]
pub struct UsageTracker {
    http: Client,
    endpoint: Option<String>,
    version: String,
}

impl UsageTracker {
    /// Create a tracker posting to `endpoint`. `None` disables tracking.
    pub fn new(endpoint: Option<String>, version: impl Into<String>) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(TRACK_TIMEOUT)
            .build()
            .map_err(|e| ApiError::config(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            version: version.into(),
        })
    }

    /// Create a tracker from the server configuration.
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::new(config.track_url(), config.server.version.clone())
    }

    /// Whether events are actually sent.
    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Build the event for a tool call.
    pub fn event(&self, tool: &str) -> UsageEvent {
        UsageEvent {
            tool: tool.to_string(),
            version: self.version.clone(),
            ts: Utc::now().timestamp_millis(),
        }
    }

    /// Report a tool call without waiting for the outcome.
    ///
    /// Returns whether a report was dispatched. The outcome of the report
    /// itself is never observed.
    pub fn track(&self, tool: &str) -> bool {
        let Some(endpoint) = self.endpoint.clone() else {
            return false;
        };
        // Outside a runtime there is nowhere to detach to.
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return false;
        };

        let http = self.http.clone();
        let event = self.event(tool);

        runtime.spawn(async move {
            match http.post(&endpoint).json(&event).send().await {
                Ok(response) if !response.status().is_success() => {
                    trace!(status = response.status().as_u16(), "Usage beacon rejected");
                }
                Ok(_) => {}
                Err(e) => trace!("Usage beacon failed: {}", e),
            }
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_event_fields() {
        let tracker = UsageTracker::new(None, "1.0.4").unwrap();
        let event = tracker.event("get_mempool");
        assert_eq!(event.tool, "get_mempool");
        assert_eq!(event.version, "1.0.4");
        assert!(event.ts > 0);

        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("tool").is_some());
        assert!(json.get("version").is_some());
        assert!(json.get("ts").is_some());
    }

    #[test]
    fn test_track_outside_runtime_is_noop() {
        let tracker =
            UsageTracker::new(Some("http://127.0.0.1:1/v1/mcp/track".to_string()), "1.0.4").unwrap();
        assert!(tracker.is_enabled());
        assert!(!tracker.track("get_hashprice"));
    }

    #[tokio::test]
    async fn test_track_posts_event() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/mcp/track"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let tracker =
            UsageTracker::new(Some(format!("{}/v1/mcp/track", server.uri())), "1.0.4").unwrap();
        assert!(tracker.track("get_difficulty"));

        let mut received = Vec::new();
        for _ in 0..100 {
            received = server.received_requests().await.unwrap();
            if !received.is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        assert_eq!(received.len(), 1);
        let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
        assert_eq!(body["tool"], "get_difficulty");
        assert_eq!(body["version"], "1.0.4");
        assert!(body["ts"].as_i64().unwrap() > 0);
        assert!(!received[0].headers.contains_key("x-api-key"));
    }

    #[tokio::test]
    async fn test_track_unreachable_returns_immediately() {
        let tracker =
            UsageTracker::new(Some("http://127.0.0.1:1/v1/mcp/track".to_string()), "1.0.4").unwrap();

        let started = std::time::Instant::now();
        assert!(tracker.track("get_asic_prices"));
        assert!(started.elapsed() < Duration::from_millis(500));

        // The detached report fails on its own task; this one keeps running.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(tracker.track("get_asic_prices"));
    }

    #[tokio::test]
    async fn test_disabled_tracker() {
        let tracker = UsageTracker::new(None, "1.0.4").unwrap();
        assert!(!tracker.is_enabled());
        assert!(!tracker.track("get_mempool"));
    }
}
