//! CDP protocol types and message definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// CDP request message.
#[derive(Debug, Serialize)]
pub struct CdpRequest {
    pub id: u64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// CDP response message.
#[derive(Debug, Deserialize)]
pub struct CdpResponse {
    pub id: Option<u64>,
    pub result: Option<Value>,
    pub error: Option<CdpErrorResponse>,
    pub method: Option<String>,
    pub params: Option<Value>,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// CDP error in response.
#[derive(Debug, Deserialize)]
pub struct CdpErrorResponse {
    pub code: i64,
    pub message: String,
    pub data: Option<String>,
}

/// Target info from CDP.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetInfo {
    pub target_id: String,
    #[serde(rename = "type")]
    pub target_type: String,
    pub title: String,
    pub url: String,
    pub attached: Option<bool>,
    pub browser_context_id: Option<String>,
}

/// Page info from /json endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub id: String,
    #[serde(rename = "type")]
    pub page_type: String,
    pub title: String,
    pub url: String,
    pub web_socket_debugger_url: Option<String>,
}

/// Browser version info.
///
/// Note: Chrome returns PascalCase field names for this endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserVersion {
    #[serde(rename = "Browser")]
    pub browser: String,
    #[serde(rename = "Protocol-Version")]
    pub protocol_version: String,
    #[serde(rename = "webSocketDebuggerUrl")]
    pub web_socket_debugger_url: String,
}

// ============================================================================
// DOM Types
// ============================================================================

/// Identifies a node for DOM commands that accept any of the three ids.
///
/// Chrome uses the first id present, so callers only need one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_node_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
}

/// DOM node from CDP.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomNode {
    pub node_id: i64,
    pub backend_node_id: i64,
    pub node_type: i64,
    pub node_name: String,
    pub local_name: Option<String>,
    pub frame_id: Option<String>,
    pub content_document: Option<Box<DomNode>>,
}

/// Box model from CDP.
///
/// Each quad lists four corners clockwise from top-left as
/// `[x0, y0, x1, y1, x2, y2, x3, y3]` in viewport coordinates.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxModel {
    pub content: Vec<f64>,
    pub padding: Vec<f64>,
    pub border: Vec<f64>,
    pub margin: Vec<f64>,
    pub width: i64,
    pub height: i64,
}

// ============================================================================
// Runtime Types
// ============================================================================

/// Remote object from Runtime domain.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteObject {
    #[serde(rename = "type")]
    pub object_type: String,
    pub subtype: Option<String>,
    pub class_name: Option<String>,
    pub value: Option<Value>,
    pub description: Option<String>,
    pub object_id: Option<String>,
}

// ============================================================================
// Page Layout Types
// ============================================================================

/// Result of `Page.getLayoutMetrics`, in CSS pixels.
///
/// Chrome reports the unprefixed fields in device pixels and the `css*`
/// fields in CSS pixels, the unit box models and `window.inner*` use. The
/// `css*` values win; the unprefixed ones are read only from browsers that
/// predate them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawLayoutMetrics")]
pub struct LayoutMetrics {
    pub layout_viewport: LayoutViewport,
    pub visual_viewport: VisualViewport,
    pub content_size: ContentSize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLayoutMetrics {
    layout_viewport: Option<LayoutViewport>,
    visual_viewport: Option<VisualViewport>,
    content_size: Option<ContentSize>,
    css_layout_viewport: Option<LayoutViewport>,
    css_visual_viewport: Option<VisualViewport>,
    css_content_size: Option<ContentSize>,
}

impl TryFrom<RawLayoutMetrics> for LayoutMetrics {
    type Error = String;

    fn try_from(raw: RawLayoutMetrics) -> Result<Self, Self::Error> {
        Ok(Self {
            layout_viewport: raw
                .css_layout_viewport
                .or(raw.layout_viewport)
                .ok_or("missing field `cssLayoutViewport`")?,
            visual_viewport: raw
                .css_visual_viewport
                .or(raw.visual_viewport)
                .ok_or("missing field `cssVisualViewport`")?,
            content_size: raw
                .css_content_size
                .or(raw.content_size)
                .ok_or("missing field `cssContentSize`")?,
        })
    }
}

/// Layout viewport: the scroll position of the document.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutViewport {
    pub page_x: f64,
    pub page_y: f64,
    #[serde(default)]
    pub client_width: f64,
    #[serde(default)]
    pub client_height: f64,
}

/// Visual viewport: what is actually on screen, excluding scrollbars.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualViewport {
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    pub page_x: f64,
    pub page_y: f64,
    pub client_width: f64,
    pub client_height: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

/// Full scrollable extent of the document.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ContentSize {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

// ============================================================================
// Browser Window Types
// ============================================================================

/// OS window state as reported by `Browser.getWindowForTarget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
    Fullscreen,
}

impl WindowState {
    /// Returns the protocol name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowState::Normal => "normal",
            WindowState::Minimized => "minimized",
            WindowState::Maximized => "maximized",
            WindowState::Fullscreen => "fullscreen",
        }
    }
}

/// Window bounds in screen coordinates, including OS decoration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowBounds {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub window_state: WindowState,
}

/// Result of `Browser.getWindowForTarget`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowForTarget {
    pub window_id: i64,
    pub bounds: WindowBounds,
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
