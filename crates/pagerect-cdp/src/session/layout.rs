//! Page layout and browser window queries for CDP page session.

use crate::error::CdpError;
use crate::protocol::{LayoutMetrics, WindowForTarget};

use super::core::PageSession;

impl PageSession {
    /// Get a fresh layout metrics snapshot.
    pub async fn get_layout_metrics(&self) -> Result<LayoutMetrics, CdpError> {
        let result = self.call("Page.getLayoutMetrics", None).await?;
        let metrics: LayoutMetrics = serde_json::from_value(result)?;
        Ok(metrics)
    }

    /// Get the OS window hosting this session's target.
    ///
    /// Sent on the session, so Chrome resolves the target itself.
    pub async fn get_window_for_target(&self) -> Result<WindowForTarget, CdpError> {
        let result = self.call("Browser.getWindowForTarget", None).await?;
        let window: WindowForTarget = serde_json::from_value(result)?;
        Ok(window)
    }
}
