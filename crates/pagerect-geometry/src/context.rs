//! The remote queries geometry is computed from.

use async_trait::async_trait;
use pagerect_cdp::{BoxModel, CdpError, LayoutMetrics, PageSession, WindowBounds};
use serde_json::Value;

use crate::error::GeometryError;
use crate::types::{ElementRef, Point, Size};

/// `window.innerWidth/innerHeight`: the viewport including scrollbars.
pub(crate) const INNER_SIZE_SCRIPT: &str = "[window.innerWidth, window.innerHeight]";

pub(crate) const DEVICE_PIXEL_RATIO_SCRIPT: &str = "window.devicePixelRatio";

pub(crate) const ELEMENT_SCROLL_FUNCTION: &str =
    "function() { return [this.scrollLeft, this.scrollTop]; }";

pub(crate) const DOCUMENT_SIZE_SCRIPT: &str =
    "document.body ? [document.body.scrollWidth, document.body.scrollHeight] : null";

pub(crate) const DOCUMENT_SCROLL_SCRIPT: &str =
    "[document.documentElement.scrollLeft, document.documentElement.scrollTop]";

/// One document context in the remote browser: a tab, or an out-of-process frame.
///
/// Every call is a fresh round-trip; implementations must not cache.
#[async_trait]
pub trait RemoteContext: Send + Sync {
    /// Box model of an element, `None` when it has no layout.
    async fn box_model(&self, element: &ElementRef) -> Result<Option<BoxModel>, CdpError>;

    async fn layout_metrics(&self) -> Result<LayoutMetrics, CdpError>;

    /// Bounds of the OS window hosting this context.
    async fn window_bounds(&self) -> Result<WindowBounds, CdpError>;

    /// Evaluate an expression in the document, by value.
    async fn evaluate(&self, expression: &str) -> Result<Value, CdpError>;

    /// Call a function declaration with `this` bound to the element, by value.
    async fn call_function_on(
        &self,
        element: &ElementRef,
        function: &str,
    ) -> Result<Value, CdpError>;
}

#[async_trait]
impl RemoteContext for PageSession {
    async fn box_model(&self, element: &ElementRef) -> Result<Option<BoxModel>, CdpError> {
        self.get_box_model(&element.target()).await
    }

    async fn layout_metrics(&self) -> Result<LayoutMetrics, CdpError> {
        self.get_layout_metrics().await
    }

    async fn window_bounds(&self) -> Result<WindowBounds, CdpError> {
        Ok(self.get_window_for_target().await?.bounds)
    }

    async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        PageSession::evaluate(self, expression).await
    }

    async fn call_function_on(
        &self,
        element: &ElementRef,
        function: &str,
    ) -> Result<Value, CdpError> {
        self.call_function_on_node(&element.target(), function).await
    }
}

/// Read a script result as a single finite number.
pub(crate) fn number(value: &Value, what: &str) -> Result<f64, GeometryError> {
    value.as_f64().filter(|n| n.is_finite()).ok_or_else(|| {
        GeometryError::UnsupportedContext(format!("{} is not a number: {}", what, value))
    })
}

/// Read a script result shaped `[a, b]` as two numbers.
pub(crate) fn number_pair(value: &Value, what: &str) -> Result<(f64, f64), GeometryError> {
    match value.as_array().map(Vec::as_slice) {
        Some([a, b]) => Ok((number(a, what)?, number(b, what)?)),
        Some(_) => Err(GeometryError::InvalidResponse(format!(
            "{} must be a pair, got {}",
            what, value
        ))),
        None if value.is_null() => Err(GeometryError::UnsupportedContext(format!(
            "{} is unavailable here",
            what
        ))),
        None => Err(GeometryError::InvalidResponse(format!(
            "{} must be a pair, got {}",
            what, value
        ))),
    }
}

pub(crate) fn point_from(value: &Value, what: &str) -> Result<Point, GeometryError> {
    let (x, y) = number_pair(value, what)?;
    Ok(Point::new(x, y))
}

pub(crate) fn size_from(value: &Value, what: &str) -> Result<Size, GeometryError> {
    let (width, height) = number_pair(value, what)?;
    Ok(Size::new(width, height))
}
