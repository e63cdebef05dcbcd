//! Core session struct and CDP command dispatch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::debug;

use crate::client::Connection;
use crate::error::CdpError;

/// Interval between `document.readyState` polls.
const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A flattened session attached to a single page/target.
pub struct PageSession {
    /// Target ID.
    pub(super) target_id: String,
    /// Session ID for this target.
    pub(super) session_id: String,
    /// Connection shared with the client.
    pub(super) conn: Arc<Connection>,
}

impl PageSession {
    pub(crate) fn new(target_id: String, session_id: String, conn: Arc<Connection>) -> Self {
        Self {
            target_id,
            session_id,
            conn,
        }
    }

    /// Get target ID.
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// Get session ID.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Send a CDP command to this page session.
    pub async fn call(&self, method: &str, params: Option<Value>) -> Result<Value, CdpError> {
        self.conn.send(method, params, Some(&self.session_id)).await
    }

    /// Enable the domains geometry queries rely on.
    pub(crate) async fn enable_domains(&self) -> Result<(), CdpError> {
        self.call("Page.enable", None).await?;
        self.call("DOM.enable", None).await?;
        self.call("Runtime.enable", None).await?;

        debug!("Enabled CDP domains for session {}", self.session_id);
        Ok(())
    }

    /// Wait until the document is at least interactive.
    pub async fn wait_for_load(&self, timeout: Duration) -> Result<(), CdpError> {
        let start = Instant::now();

        loop {
            let state = self.evaluate("document.readyState").await?;
            if matches!(state.as_str(), Some("complete" | "interactive")) {
                return Ok(());
            }

            if start.elapsed() > timeout {
                return Err(CdpError::Timeout("Page load timeout".to_string()));
            }

            tokio::time::sleep(LOAD_POLL_INTERVAL).await;
        }
    }
}
