//! Element geometry in viewport, page and screen coordinates.
//!
//! All positions derive from the element's border-box quad. Viewport
//! coordinates are what `DOM.getBoxModel` returns; page coordinates add the
//! owning document's scroll offset; screen coordinates add the owner's
//! on-screen origin and scale by the device pixel ratio.

use async_trait::async_trait;
use pagerect_cdp::BoxModel;
use pagerect_config::CLICK_Y_BIAS;
use tracing::debug;

use crate::context::{self, RemoteContext};
use crate::error::GeometryError;
use crate::rect::Rect;
use crate::types::{Corners, ElementRef, Point, Quad, Size};

/// Geometry of one element, relative to the context that owns it.
pub struct ElementGeometry<'a> {
    context: &'a dyn RemoteContext,
    element: &'a ElementRef,
    owner: &'a dyn Rect,
    click_y_bias: f64,
}

impl<'a> ElementGeometry<'a> {
    /// `context` is the document the element lives in and `owner` that
    /// document's geometry: a window for a tab, a frame for an iframe.
    pub fn new(
        context: &'a dyn RemoteContext,
        element: &'a ElementRef,
        owner: &'a dyn Rect,
    ) -> Self {
        Self {
            context,
            element,
            owner,
            click_y_bias: CLICK_Y_BIAS,
        }
    }

    /// Override the distance below the padding-box top used for click points.
    pub fn with_click_y_bias(mut self, bias: f64) -> Self {
        self.click_y_bias = bias;
        self
    }

    pub fn element(&self) -> &ElementRef {
        self.element
    }

    pub(crate) fn owner(&self) -> &'a dyn Rect {
        self.owner
    }

    /// Border-box corners in page coordinates.
    pub async fn corners(&self) -> Result<Corners, GeometryError> {
        let quad = self.border_quad().await?;
        let scroll = self.page_scroll().await?;
        Ok(quad.corners().map(|corner| corner + scroll))
    }

    /// Border-box corners in viewport coordinates.
    pub async fn viewport_corners(&self) -> Result<Corners, GeometryError> {
        Ok(self.border_quad().await?.corners())
    }

    /// Border-box size.
    pub async fn size(&self) -> Result<Size, GeometryError> {
        Ok(self.border_quad().await?.size())
    }

    /// Top-left corner in page coordinates.
    pub async fn location(&self) -> Result<Point, GeometryError> {
        self.to_page(self.viewport_location().await?).await
    }

    /// Center in page coordinates.
    pub async fn midpoint(&self) -> Result<Point, GeometryError> {
        self.to_page(self.viewport_midpoint().await?).await
    }

    /// Click point in page coordinates.
    pub async fn click_point(&self) -> Result<Point, GeometryError> {
        self.to_page(self.viewport_click_point().await?).await
    }

    /// Top-left corner in viewport coordinates.
    pub async fn viewport_location(&self) -> Result<Point, GeometryError> {
        Ok(self.border_quad().await?.top_left())
    }

    /// Center in viewport coordinates, floored to whole pixels.
    pub async fn viewport_midpoint(&self) -> Result<Point, GeometryError> {
        Ok(self.border_quad().await?.midpoint())
    }

    /// Horizontally centered, just below the padding-box top edge.
    ///
    /// Lands inside the element even when its vertical center is covered by
    /// children or native form-control chrome.
    pub async fn viewport_click_point(&self) -> Result<Point, GeometryError> {
        let model = self.box_model().await?;
        let x = Quad::try_from(model.border.as_slice())?.midpoint().x;
        let padding = Quad::try_from(model.padding.as_slice())?;
        Ok(Point::new(x, padding.top_left().y + self.click_y_bias))
    }

    /// Top-left of the content box in viewport coordinates.
    ///
    /// For an iframe host this is where the embedded document's viewport starts.
    pub async fn viewport_content_location(&self) -> Result<Point, GeometryError> {
        let model = self.box_model().await?;
        Ok(Quad::try_from(model.content.as_slice())?.top_left())
    }

    /// Top-left corner in physical screen pixels.
    pub async fn screen_location(&self) -> Result<Point, GeometryError> {
        self.to_screen(self.viewport_location().await?).await
    }

    /// Center in physical screen pixels.
    pub async fn screen_midpoint(&self) -> Result<Point, GeometryError> {
        self.to_screen(self.viewport_midpoint().await?).await
    }

    /// Click point in physical screen pixels.
    pub async fn screen_click_point(&self) -> Result<Point, GeometryError> {
        self.to_screen(self.viewport_click_point().await?).await
    }

    /// Scroll offset of the element itself; zero unless it is a scroll container.
    pub async fn scroll_position(&self) -> Result<Point, GeometryError> {
        let value = self
            .context
            .call_function_on(self.element, context::ELEMENT_SCROLL_FUNCTION)
            .await?;
        context::point_from(&value, "element scroll position")
    }

    /// Current `window.devicePixelRatio` of the owning document.
    pub async fn device_pixel_ratio(&self) -> Result<f64, GeometryError> {
        let value = self
            .context
            .evaluate(context::DEVICE_PIXEL_RATIO_SCRIPT)
            .await?;
        let ratio = context::number(&value, "device pixel ratio")?;
        if ratio <= 0.0 {
            return Err(GeometryError::InvalidResponse(format!(
                "device pixel ratio must be positive, got {}",
                ratio
            )));
        }
        Ok(ratio)
    }

    async fn box_model(&self) -> Result<BoxModel, GeometryError> {
        debug!(
            "Querying box model of backend node {}",
            self.element.backend_node_id
        );
        self.context
            .box_model(self.element)
            .await?
            .ok_or(GeometryError::NoRect)
    }

    async fn border_quad(&self) -> Result<Quad, GeometryError> {
        let model = self.box_model().await?;
        Quad::try_from(model.border.as_slice())
    }

    /// Scroll offset of the owning document, from its layout viewport.
    async fn page_scroll(&self) -> Result<Point, GeometryError> {
        let layout = self.context.layout_metrics().await?.layout_viewport;
        Ok(Point::new(layout.page_x, layout.page_y))
    }

    async fn to_page(&self, viewport_point: Point) -> Result<Point, GeometryError> {
        Ok(viewport_point + self.page_scroll().await?)
    }

    async fn to_screen(&self, viewport_point: Point) -> Result<Point, GeometryError> {
        let origin = self.owner.content_origin().await?;
        let ratio = self.device_pixel_ratio().await?;
        Ok((origin + viewport_point) * ratio)
    }
}

#[async_trait]
impl Rect for ElementGeometry<'_> {
    async fn viewport_location(&self) -> Result<Point, GeometryError> {
        ElementGeometry::viewport_location(self).await
    }

    async fn size(&self) -> Result<Size, GeometryError> {
        ElementGeometry::size(self).await
    }

    async fn scroll_position(&self) -> Result<Point, GeometryError> {
        ElementGeometry::scroll_position(self).await
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
