//! CDP error types.

use thiserror::Error;

/// Error code Chrome uses for generic server-side command failures,
/// e.g. "Could not compute box model." for nodes without layout.
pub const SERVER_ERROR_CODE: i64 = -32000;

/// CDP client errors.
#[derive(Debug, Error)]
pub enum CdpError {
    /// Failed to connect to Chrome.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Chrome not found or not running with remote debugging.
    #[error("Chrome not available at {0}. Start Chrome with: chrome --remote-debugging-port=9222")]
    ChromeNotAvailable(String),

    /// WebSocket error.
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// CDP protocol error.
    #[error("CDP error: {message} (code: {code})")]
    Protocol { code: i64, message: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP error (for endpoint discovery).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Target not found.
    #[error("Target not found: {0}")]
    TargetNotFound(String),

    /// Element not found.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// JavaScript execution error.
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// Timeout.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Session closed.
    #[error("Session closed")]
    SessionClosed,

    /// Invalid response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Server error messages meaning a node has no layout to report: it is not
/// rendered, or it has been removed from the document.
const NO_LAYOUT_MESSAGES: [&str; 2] = ["Could not compute box model", "No node with given id"];

impl CdpError {
    /// Whether this is Chrome's generic server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, CdpError::Protocol { code, .. } if *code == SERVER_ERROR_CODE)
    }

    /// Whether Chrome refused a layout query because the node has no box.
    ///
    /// Other server errors (a domain not enabled, a detached session) are
    /// real failures and do not match.
    pub fn is_no_layout(&self) -> bool {
        match self {
            CdpError::Protocol { message, .. } if self.is_server_error() => NO_LAYOUT_MESSAGES
                .iter()
                .any(|known| message.starts_with(known)),
            _ => false,
        }
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for CdpError {
    fn from(e: tokio_tungstenite::tungstenite::Error) -> Self {
        CdpError::WebSocket(e.to_string())
    }
}

impl From<reqwest::Error> for CdpError {
    fn from(e: reqwest::Error) -> Self {
        CdpError::Http(e.to_string())
    }
}

impl From<url::ParseError> for CdpError {
    fn from(e: url::ParseError) -> Self {
        CdpError::ConnectionFailed(format!("Invalid URL: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_detection() {
        let err = CdpError::Protocol {
            code: -32000,
            message: "Could not compute box model.".to_string(),
        };
        assert!(err.is_server_error());

        let err = CdpError::Protocol {
            code: -32601,
            message: "'Foo.bar' wasn't found".to_string(),
        };
        assert!(!err.is_server_error());
        assert!(!CdpError::SessionClosed.is_server_error());
    }

    #[test]
    fn test_no_layout_detection() {
        let not_rendered = CdpError::Protocol {
            code: -32000,
            message: "Could not compute box model.".to_string(),
        };
        assert!(not_rendered.is_no_layout());

        let detached = CdpError::Protocol {
            code: -32000,
            message: "No node with given id found".to_string(),
        };
        assert!(detached.is_no_layout());

        let not_enabled = CdpError::Protocol {
            code: -32000,
            message: "DOM agent hasn't been enabled".to_string(),
        };
        assert!(not_enabled.is_server_error());
        assert!(!not_enabled.is_no_layout());

        let wrong_code = CdpError::Protocol {
            code: -32602,
            message: "Could not compute box model.".to_string(),
        };
        assert!(!wrong_code.is_no_layout());
    }

    #[test]
    fn test_url_parse_error_maps_to_connection_failed() {
        let err: CdpError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, CdpError::ConnectionFailed(_)));
        assert!(err.to_string().contains("Invalid URL"));
    }
}
