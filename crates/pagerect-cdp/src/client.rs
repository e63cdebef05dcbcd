//! CDP WebSocket client.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, trace, warn};

use crate::error::CdpError;
use crate::protocol::{BrowserVersion, CdpRequest, CdpResponse, PageInfo, TargetInfo};
use crate::session::PageSession;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<WsStream, Message>;
type WsSource = SplitStream<WsStream>;
type PendingMap = Arc<Mutex<HashMap<u64, oneshot::Sender<Result<Value, CdpError>>>>>;

/// Default time to wait for a single command response.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared WebSocket connection used by the client and all of its sessions.
///
/// Responses are matched to requests by id; events are dropped since the
/// geometry queries never subscribe to any.
pub(crate) struct Connection {
    ws_tx: tokio::sync::Mutex<WsSink>,
    request_id: AtomicU64,
    pending: PendingMap,
    request_timeout: Duration,
}

impl Connection {
    /// Send a command, optionally scoped to a flattened session, and wait for its result.
    pub(crate) async fn send(
        &self,
        method: &str,
        params: Option<Value>,
        session_id: Option<&str>,
    ) -> Result<Value, CdpError> {
        let id = self.request_id.fetch_add(1, Ordering::SeqCst);

        let request = CdpRequest {
            id,
            method: method.to_string(),
            params,
            session_id: session_id.map(|s| s.to_string()),
        };

        let json = serde_json::to_string(&request)?;
        trace!("CDP send: {}", json);

        let (tx, rx) = oneshot::channel();
        self.pending.lock().insert(id, tx);

        {
            let mut ws = self.ws_tx.lock().await;
            if let Err(e) = ws.send(Message::Text(json.into())).await {
                self.pending.lock().remove(&id);
                return Err(e.into());
            }
        }

        match tokio::time::timeout(self.request_timeout, rx).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(CdpError::SessionClosed),
            Err(_) => {
                self.pending.lock().remove(&id);
                Err(CdpError::Timeout(format!("Request {} timed out", method)))
            }
        }
    }
}

/// CDP client for browser automation.
///
/// Connects to Chrome via WebSocket and hands out per-target sessions.
pub struct CdpClient {
    /// HTTP endpoint for page discovery.
    http_endpoint: String,
    /// Browser WebSocket URL.
    browser_ws_url: String,
    /// Connection shared with every session.
    conn: Arc<Connection>,
    /// Background task handle.
    recv_task: tokio::task::JoinHandle<()>,
}

impl CdpClient {
    /// Connect to Chrome at the given endpoint with the default request timeout.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let client = CdpClient::connect("http://localhost:9222").await?;
    /// ```
    pub async fn connect(endpoint: &str) -> Result<Self, CdpError> {
        Self::connect_with_timeout(endpoint, DEFAULT_REQUEST_TIMEOUT).await
    }

    /// Connect to Chrome at the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Chrome debugging endpoint (e.g., "http://localhost:9222")
    /// * `request_timeout` - how long a single command may wait for its response
    pub async fn connect_with_timeout(
        endpoint: &str,
        request_timeout: Duration,
    ) -> Result<Self, CdpError> {
        let http_endpoint = url::Url::parse(endpoint)?
            .as_str()
            .trim_end_matches('/')
            .to_string();

        let version_url = format!("{}/json/version", http_endpoint);
        debug!("Fetching browser version from {}", version_url);

        let version: BrowserVersion = reqwest::get(&version_url)
            .await
            .map_err(|e| CdpError::ChromeNotAvailable(format!("{}: {}", endpoint, e)))?
            .json()
            .await
            .map_err(|e| CdpError::ChromeNotAvailable(format!("{}: {}", endpoint, e)))?;

        debug!(
            "Connected to browser: {} (protocol {})",
            version.browser, version.protocol_version
        );

        let browser_ws_url = version.web_socket_debugger_url;

        let (ws_stream, _) = tokio_tungstenite::connect_async(&browser_ws_url)
            .await
            .map_err(|e| CdpError::ConnectionFailed(format!("WebSocket: {}", e)))?;

        let (ws_sink, ws_source) = ws_stream.split();
        let pending: PendingMap = Arc::new(Mutex::new(HashMap::new()));

        let recv_task = {
            let pending = pending.clone();
            tokio::spawn(async move {
                Self::receive_loop(ws_source, pending).await;
            })
        };

        debug!("CDP client connected to {}", browser_ws_url);

        Ok(Self {
            http_endpoint,
            browser_ws_url,
            conn: Arc::new(Connection {
                ws_tx: tokio::sync::Mutex::new(ws_sink),
                request_id: AtomicU64::new(1),
                pending,
                request_timeout,
            }),
            recv_task,
        })
    }

    /// WebSocket receive loop.
    async fn receive_loop(mut ws_source: WsSource, pending: PendingMap) {
        while let Some(msg) = ws_source.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    trace!("CDP recv: {}", text);
                    match serde_json::from_str::<CdpResponse>(&text) {
                        Ok(resp) => Self::dispatch(resp, &pending),
                        Err(e) => warn!("Failed to parse CDP message: {}", e),
                    }
                }
                Ok(Message::Close(_)) => {
                    debug!("WebSocket closed");
                    break;
                }
                Err(e) => {
                    error!("WebSocket error: {}", e);
                    break;
                }
                _ => {}
            }
        }

        // Fail everything still waiting instead of letting it run into the timeout.
        pending.lock().clear();
    }

    /// Route a response to its pending request. Events are ignored.
    fn dispatch(resp: CdpResponse, pending: &PendingMap) {
        let Some(id) = resp.id else {
            if let Some(method) = resp.method {
                trace!("Ignoring CDP event {}", method);
            }
            return;
        };

        let Some(tx) = pending.lock().remove(&id) else {
            return;
        };

        let result = match resp.error {
            Some(error) => Err(CdpError::Protocol {
                code: error.code,
                message: error.message,
            }),
            None => Ok(resp.result.unwrap_or(Value::Null)),
        };
        let _ = tx.send(result);
    }

    /// Send a browser-level CDP command and wait for response.
    pub async fn call(&self, method: &str, params: Option<Value>) -> Result<Value, CdpError> {
        self.conn.send(method, params, None).await
    }

    /// Get browser WebSocket URL.
    pub fn browser_ws_url(&self) -> &str {
        &self.browser_ws_url
    }

    // ========================================================================
    // Target Management
    // ========================================================================

    /// List all pages.
    pub async fn list_pages(&self) -> Result<Vec<PageInfo>, CdpError> {
        let url = format!("{}/json/list", self.http_endpoint);
        let pages: Vec<PageInfo> = reqwest::get(&url).await?.json().await?;
        Ok(pages)
    }

    /// Create a new page/tab and attach to it.
    pub async fn new_page(&self, url: Option<&str>) -> Result<PageSession, CdpError> {
        // Chrome requires PUT method for /json/new
        let create_url = match url {
            Some(u) => format!("{}/json/new?{}", self.http_endpoint, u),
            None => format!("{}/json/new", self.http_endpoint),
        };

        let client = reqwest::Client::new();
        let page_info: PageInfo = client.put(&create_url).send().await?.json().await?;
        debug!("Created new page: {} - {}", page_info.id, page_info.url);

        self.attach_page(&page_info.id).await
    }

    /// Attach to an existing page or iframe target.
    pub async fn attach_page(&self, target_id: &str) -> Result<PageSession, CdpError> {
        let result = self
            .call(
                "Target.attachToTarget",
                Some(json!({
                    "targetId": target_id,
                    "flatten": true
                })),
            )
            .await?;

        let session_id = result["sessionId"]
            .as_str()
            .ok_or_else(|| CdpError::InvalidResponse("Missing sessionId".to_string()))?
            .to_string();

        let session = PageSession::new(target_id.to_string(), session_id, self.conn.clone());
        session.enable_domains().await?;

        Ok(session)
    }

    /// Attach to the first page target, the usual "current tab".
    pub async fn attach_first_page(&self) -> Result<PageSession, CdpError> {
        let targets = self.get_targets().await?;
        let page = targets
            .iter()
            .find(|t| t.target_type == "page")
            .ok_or_else(|| CdpError::TargetNotFound("no page target".to_string()))?;
        self.attach_page(&page.target_id).await
    }

    /// Get all targets.
    pub async fn get_targets(&self) -> Result<Vec<TargetInfo>, CdpError> {
        let result = self.call("Target.getTargets", None).await?;
        let targets: Vec<TargetInfo> = serde_json::from_value(result["targetInfos"].clone())?;
        Ok(targets)
    }

    /// Find the out-of-process iframe target backing a frame id.
    ///
    /// Chrome gives an OOPIF target the same id as the frame it renders.
    pub async fn find_frame_target(&self, frame_id: &str) -> Result<TargetInfo, CdpError> {
        self.get_targets()
            .await?
            .into_iter()
            .find(|t| t.target_type == "iframe" && t.target_id == frame_id)
            .ok_or_else(|| {
                CdpError::TargetNotFound(format!("{} (frame is not out-of-process)", frame_id))
            })
    }
}

impl Drop for CdpClient {
    fn drop(&mut self) {
        self.recv_task.abort();
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
