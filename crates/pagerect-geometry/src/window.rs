//! Window and viewport geometry of a tab.
//!
//! Screen coordinates here are CSS pixels relative to the usable screen
//! area, with the OS window decoration subtracted using [`WindowChrome`]
//! heuristics. The viewport is assumed to sit in the bottom-right corner of
//! the window's client area, below any toolbars.

use async_trait::async_trait;
use pagerect_cdp::{LayoutMetrics, WindowBounds, WindowState};
use pagerect_config::WindowChrome;
use tracing::debug;

use crate::context::{self, RemoteContext};
use crate::error::GeometryError;
use crate::rect::Rect;
use crate::types::{Point, Size};

/// Geometry of a tab's window and viewport.
pub struct WindowGeometry<'a> {
    tab: &'a dyn RemoteContext,
    chrome: WindowChrome,
}

impl<'a> WindowGeometry<'a> {
    /// Geometry of `tab` using the default chrome heuristics.
    pub fn new(tab: &'a dyn RemoteContext) -> Self {
        Self::with_chrome(tab, WindowChrome::default())
    }

    pub fn with_chrome(tab: &'a dyn RemoteContext, chrome: WindowChrome) -> Self {
        Self { tab, chrome }
    }

    /// Window state as reported by the browser.
    pub async fn window_state(&self) -> Result<WindowState, GeometryError> {
        Ok(self.bounds().await?.window_state)
    }

    /// Top-left of the visible window on screen.
    ///
    /// Maximized and fullscreen windows are placed at the origin of the
    /// usable screen area regardless of their reported bounds.
    pub async fn window_location(&self) -> Result<Point, GeometryError> {
        Ok(window_location(&self.bounds().await?, &self.chrome))
    }

    /// Visible window size, excluding OS decoration.
    pub async fn window_size(&self) -> Result<Size, GeometryError> {
        Ok(window_size(&self.bounds().await?, &self.chrome))
    }

    /// Viewport size including scrollbars.
    pub async fn viewport_size_with_scrollbar(&self) -> Result<Size, GeometryError> {
        debug!("Evaluating inner window size");
        let value = self.tab.evaluate(context::INNER_SIZE_SCRIPT).await?;
        context::size_from(&value, "window inner size")
    }

    /// Viewport size excluding scrollbars.
    pub async fn viewport_size(&self) -> Result<Size, GeometryError> {
        let viewport = self.metrics().await?.visual_viewport;
        Ok(Size::new(viewport.client_width, viewport.client_height))
    }

    /// Top-left of the viewport on screen.
    pub async fn viewport_location(&self) -> Result<Point, GeometryError> {
        let bounds = self.bounds().await?;
        let inner = self.viewport_size_with_scrollbar().await?;
        Ok(viewport_location(&bounds, &self.chrome, inner))
    }

    /// Screen position of the unscrolled document origin.
    pub async fn page_location(&self) -> Result<Point, GeometryError> {
        let viewport = self.viewport_location().await?;
        let layout = self.metrics().await?.layout_viewport;
        Ok(viewport - Point::new(layout.page_x, layout.page_y))
    }

    /// Full scrollable size of the document.
    pub async fn size(&self) -> Result<Size, GeometryError> {
        let content = self.metrics().await?.content_size;
        Ok(Size::new(content.width, content.height))
    }

    /// Document scroll offset.
    pub async fn scroll_position(&self) -> Result<Point, GeometryError> {
        let viewport = self.metrics().await?.visual_viewport;
        Ok(Point::new(viewport.page_x, viewport.page_y))
    }

    async fn bounds(&self) -> Result<WindowBounds, GeometryError> {
        debug!("Querying window bounds");
        Ok(self.tab.window_bounds().await?)
    }

    async fn metrics(&self) -> Result<LayoutMetrics, GeometryError> {
        debug!("Querying layout metrics");
        Ok(self.tab.layout_metrics().await?)
    }
}

#[async_trait]
impl Rect for WindowGeometry<'_> {
    async fn viewport_location(&self) -> Result<Point, GeometryError> {
        WindowGeometry::viewport_location(self).await
    }

    async fn size(&self) -> Result<Size, GeometryError> {
        WindowGeometry::size(self).await
    }

    async fn scroll_position(&self) -> Result<Point, GeometryError> {
        WindowGeometry::scroll_position(self).await
    }
}

fn window_location(bounds: &WindowBounds, chrome: &WindowChrome) -> Point {
    match bounds.window_state {
        WindowState::Maximized | WindowState::Fullscreen => Point::ZERO,
        WindowState::Normal | WindowState::Minimized => {
            Point::new(bounds.left + chrome.left_offset, bounds.top)
        }
    }
}

fn window_size(bounds: &WindowBounds, chrome: &WindowChrome) -> Size {
    match bounds.window_state {
        WindowState::Fullscreen => Size::new(bounds.width, bounds.height),
        WindowState::Maximized => Size::new(
            bounds.width - chrome.side_borders,
            bounds.height - chrome.side_borders,
        ),
        WindowState::Normal | WindowState::Minimized => Size::new(
            bounds.width - chrome.side_borders,
            bounds.height - chrome.title_bar,
        ),
    }
}

/// The viewport plus its scrollbars fills the window up to its bottom-right corner.
fn viewport_location(bounds: &WindowBounds, chrome: &WindowChrome, inner: Size) -> Point {
    window_location(bounds, chrome) + window_size(bounds, chrome) - inner
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
