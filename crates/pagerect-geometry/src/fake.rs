//! In-memory [`RemoteContext`] for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use pagerect_cdp::{
    BoxModel, CdpError, ContentSize, LayoutMetrics, LayoutViewport, VisualViewport, WindowBounds,
    WindowState,
};
use serde_json::Value;

use crate::context::RemoteContext;
use crate::types::ElementRef;

/// Answers every query from fixed data and records the calls it received.
pub(crate) struct FakeContext {
    pub box_model: Option<BoxModel>,
    pub metrics: LayoutMetrics,
    pub bounds: WindowBounds,
    pub scripts: HashMap<String, Value>,
    pub disconnected: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeContext {
    pub fn new() -> Self {
        Self {
            box_model: None,
            metrics: metrics(0.0, 0.0),
            bounds: bounds(WindowState::Normal, 0.0, 0.0, 1000.0, 800.0),
            scripts: HashMap::new(),
            disconnected: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_border(mut self, border: [f64; 8]) -> Self {
        let padding = inset(border, 1.0);
        let content = inset(padding, 4.0);
        self.box_model = Some(BoxModel {
            content: content.to_vec(),
            padding: padding.to_vec(),
            border: border.to_vec(),
            margin: inset(border, -2.0).to_vec(),
            width: (border[2] - border[0]) as i64,
            height: (border[5] - border[1]) as i64,
        });
        self
    }

    pub fn with_scroll(mut self, page_x: f64, page_y: f64) -> Self {
        self.metrics = metrics(page_x, page_y);
        self
    }

    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_bounds(mut self, bounds: WindowBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_script(mut self, script: &str, result: Value) -> Self {
        self.scripts.insert(script.to_string(), result);
        self
    }

    pub fn disconnected(mut self) -> Self {
        self.disconnected = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) -> Result<(), CdpError> {
        self.calls.lock().unwrap().push(call.to_string());
        if self.disconnected {
            return Err(CdpError::SessionClosed);
        }
        Ok(())
    }

    fn script(&self, script: &str) -> Result<Value, CdpError> {
        self.scripts
            .get(script)
            .cloned()
            .ok_or_else(|| CdpError::JavaScript(format!("unexpected script: {}", script)))
    }
}

#[async_trait]
impl RemoteContext for FakeContext {
    async fn box_model(&self, _element: &ElementRef) -> Result<Option<BoxModel>, CdpError> {
        self.record("DOM.getBoxModel")?;
        Ok(self.box_model.clone())
    }

    async fn layout_metrics(&self) -> Result<LayoutMetrics, CdpError> {
        self.record("Page.getLayoutMetrics")?;
        Ok(self.metrics.clone())
    }

    async fn window_bounds(&self) -> Result<WindowBounds, CdpError> {
        self.record("Browser.getWindowForTarget")?;
        Ok(self.bounds)
    }

    async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        self.record("Runtime.evaluate")?;
        self.script(expression)
    }

    async fn call_function_on(
        &self,
        _element: &ElementRef,
        function: &str,
    ) -> Result<Value, CdpError> {
        self.record("Runtime.callFunctionOn")?;
        self.script(function)
    }
}

pub(crate) fn bounds(
    window_state: WindowState,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> WindowBounds {
    WindowBounds {
        left,
        top,
        width,
        height,
        window_state,
    }
}

/// Metrics for a 1265x689 viewport scrolled to `(page_x, page_y)`, unzoomed.
pub(crate) fn metrics(page_x: f64, page_y: f64) -> LayoutMetrics {
    LayoutMetrics {
        layout_viewport: LayoutViewport {
            page_x,
            page_y,
            client_width: 1265.0,
            client_height: 689.0,
        },
        visual_viewport: VisualViewport {
            offset_x: 0.0,
            offset_y: 0.0,
            page_x,
            page_y,
            client_width: 1265.0,
            client_height: 689.0,
            scale: 1.0,
        },
        content_size: ContentSize {
            x: 0.0,
            y: 0.0,
            width: 1265.0,
            height: 4000.0,
        },
    }
}

/// Shrink a quad by `by` pixels on every side.
fn inset(q: [f64; 8], by: f64) -> [f64; 8] {
    [
        q[0] + by,
        q[1] + by,
        q[2] - by,
        q[3] + by,
        q[4] - by,
        q[5] - by,
        q[6] + by,
        q[7] - by,
    ]
}

/// Metrics while pinch-zoomed: the visual viewport is panned within the
/// layout viewport, so the two scroll offsets differ.
pub(crate) fn pinch_zoomed(layout: (f64, f64), visual: (f64, f64)) -> LayoutMetrics {
    let mut metrics = metrics(layout.0, layout.1);
    metrics.visual_viewport.page_x = visual.0;
    metrics.visual_viewport.page_y = visual.1;
    metrics.visual_viewport.offset_x = visual.0 - layout.0;
    metrics.visual_viewport.offset_y = visual.1 - layout.1;
    metrics.visual_viewport.client_width = 632.5;
    metrics.visual_viewport.client_height = 344.5;
    metrics.visual_viewport.scale = 2.0;
    metrics
}
