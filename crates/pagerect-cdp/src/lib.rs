//! Chrome DevTools Protocol (CDP) client used by pagerect.
//!
//! This crate is the transport underneath the geometry layer. It connects to
//! Chrome/Chromium via WebSocket, attaches flattened sessions to page and
//! out-of-process iframe targets, and exposes the handful of read-only
//! queries geometry needs: box models, layout metrics, window bounds and
//! script evaluation.
//!
//! ## Usage
//!
//! 1. Start Chrome with remote debugging:
//!    ```bash
//!    chrome --remote-debugging-port=9222
//!    ```
//!
//! 2. Connect and query:
//!    ```rust,ignore
//!    let client = CdpClient::connect("http://localhost:9222").await?;
//!    let page = client.new_page(Some("https://example.com")).await?;
//!    let metrics = page.get_layout_metrics().await?;
//!    ```

mod client;
mod error;
mod protocol;
mod session;

pub use client::CdpClient;
pub use error::CdpError;
pub use protocol::*;
pub use session::PageSession;
