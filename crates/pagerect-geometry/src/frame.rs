//! Geometry of an out-of-process iframe.
//!
//! A frame has two identities. Where it sits comes from its host `<iframe>`
//! element in the parent document; what it contains (content size, scroll)
//! comes from the embedded document's own context.

use async_trait::async_trait;
use tracing::debug;

use crate::context::{self, RemoteContext};
use crate::element::ElementGeometry;
use crate::error::GeometryError;
use crate::rect::Rect;
use crate::types::{Corners, Point, Size};

/// Geometry of an embedded document and its host element.
pub struct FrameGeometry<'a> {
    host: ElementGeometry<'a>,
    document: &'a dyn RemoteContext,
}

impl<'a> FrameGeometry<'a> {
    /// `host` is the `<iframe>` element's geometry in the parent document,
    /// `document` the frame's own context.
    pub fn new(host: ElementGeometry<'a>, document: &'a dyn RemoteContext) -> Self {
        Self { host, document }
    }

    /// Host element's top-left in the parent's page coordinates.
    pub async fn location(&self) -> Result<Point, GeometryError> {
        self.host.location().await
    }

    /// Host element's top-left in the parent's viewport.
    pub async fn viewport_location(&self) -> Result<Point, GeometryError> {
        self.host.viewport_location().await
    }

    /// Host element's top-left in physical screen pixels.
    pub async fn screen_location(&self) -> Result<Point, GeometryError> {
        self.host.screen_location().await
    }

    pub async fn corners(&self) -> Result<Corners, GeometryError> {
        self.host.corners().await
    }

    pub async fn viewport_corners(&self) -> Result<Corners, GeometryError> {
        self.host.viewport_corners().await
    }

    /// Scrollable size of the embedded document's body.
    pub async fn size(&self) -> Result<Size, GeometryError> {
        debug!("Evaluating frame document size");
        let value = self.document.evaluate(context::DOCUMENT_SIZE_SCRIPT).await?;
        context::size_from(&value, "frame document size")
    }

    /// The frame's visible viewport, which is the rendered size of its host.
    pub async fn viewport_size(&self) -> Result<Size, GeometryError> {
        self.host.size().await
    }

    /// Scroll offset of the embedded document.
    pub async fn scroll_position(&self) -> Result<Point, GeometryError> {
        debug!("Evaluating frame document scroll position");
        let value = self
            .document
            .evaluate(context::DOCUMENT_SCROLL_SCRIPT)
            .await?;
        context::point_from(&value, "frame scroll position")
    }
}

#[async_trait]
impl Rect for FrameGeometry<'_> {
    async fn viewport_location(&self) -> Result<Point, GeometryError> {
        FrameGeometry::viewport_location(self).await
    }

    async fn size(&self) -> Result<Size, GeometryError> {
        FrameGeometry::size(self).await
    }

    async fn scroll_position(&self) -> Result<Point, GeometryError> {
        FrameGeometry::scroll_position(self).await
    }

    /// The embedded viewport starts at the host's content box, offset by
    /// wherever the parent's own content starts on screen.
    async fn content_origin(&self) -> Result<Point, GeometryError> {
        let parent = self.host.owner().content_origin().await?;
        let content = self.host.viewport_content_location().await?;
        Ok(parent + content)
    }
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
