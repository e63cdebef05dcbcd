//! Capability shared by window, element and frame geometry.

use async_trait::async_trait;

use crate::error::GeometryError;
use crate::types::{Point, Size};

/// Common geometry of anything that can own elements or be positioned.
///
/// The three implementations are [`WindowGeometry`](crate::WindowGeometry),
/// [`ElementGeometry`](crate::ElementGeometry) and
/// [`FrameGeometry`](crate::FrameGeometry). An element's screen coordinates
/// are computed against the `Rect` of its owning context, so a caller passes
/// a window for elements in a tab and a frame for elements in an iframe.
#[async_trait]
pub trait Rect: Send + Sync {
    /// Top-left of this rect's viewport.
    ///
    /// For a window this is on screen; for an element or frame it is inside
    /// the parent viewport.
    async fn viewport_location(&self) -> Result<Point, GeometryError>;

    /// Extent of this rect's content.
    async fn size(&self) -> Result<Size, GeometryError>;

    async fn scroll_position(&self) -> Result<Point, GeometryError>;

    /// Screen position, in CSS pixels, where viewport coordinates of elements
    /// owned by this rect start.
    async fn content_origin(&self) -> Result<Point, GeometryError> {
        self.viewport_location().await
    }
}
