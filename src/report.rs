//! JSON reports printed by the CLI subcommands.

use serde::Serialize;

use pagerect_cdp::PageInfo;
use pagerect_geometry::{
    Corners, ElementGeometry, FrameGeometry, GeometryError, Point, Size, WindowGeometry,
};

#[derive(Debug, Serialize)]
pub(crate) struct TabReport {
    pub target_id: String,
    pub title: String,
    pub url: String,
}

impl TabReport {
    /// Page targets only; workers and extensions have no geometry.
    pub(crate) fn from_pages(pages: Vec<PageInfo>) -> Vec<Self> {
        pages
            .into_iter()
            .filter(|page| page.page_type == "page")
            .map(|page| Self {
                target_id: page.id,
                title: page.title,
                url: page.url,
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct WindowReport {
    pub window_state: &'static str,
    pub window_location: Point,
    pub window_size: Size,
    pub viewport_location: Point,
    pub viewport_size: Size,
    pub viewport_size_with_scrollbar: Size,
    pub page_location: Point,
    pub page_size: Size,
    pub scroll_position: Point,
}

impl WindowReport {
    pub(crate) async fn collect(window: &WindowGeometry<'_>) -> Result<Self, GeometryError> {
        Ok(Self {
            window_state: window.window_state().await?.as_str(),
            window_location: window.window_location().await?,
            window_size: window.window_size().await?,
            viewport_location: window.viewport_location().await?,
            viewport_size: window.viewport_size().await?,
            viewport_size_with_scrollbar: window.viewport_size_with_scrollbar().await?,
            page_location: window.page_location().await?,
            page_size: window.size().await?,
            scroll_position: window.scroll_position().await?,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ElementReport {
    pub backend_node_id: i64,
    pub size: Size,
    pub corners: Corners,
    pub viewport_corners: Corners,
    pub location: Point,
    pub midpoint: Point,
    pub click_point: Point,
    pub viewport_location: Point,
    pub viewport_midpoint: Point,
    pub viewport_click_point: Point,
    pub screen_location: Point,
    pub screen_midpoint: Point,
    pub screen_click_point: Point,
    pub scroll_position: Point,
    pub device_pixel_ratio: f64,
}

impl ElementReport {
    pub(crate) async fn collect(element: &ElementGeometry<'_>) -> Result<Self, GeometryError> {
        Ok(Self {
            backend_node_id: element.element().backend_node_id,
            size: element.size().await?,
            corners: element.corners().await?,
            viewport_corners: element.viewport_corners().await?,
            location: element.location().await?,
            midpoint: element.midpoint().await?,
            click_point: element.click_point().await?,
            viewport_location: element.viewport_location().await?,
            viewport_midpoint: element.viewport_midpoint().await?,
            viewport_click_point: element.viewport_click_point().await?,
            screen_location: element.screen_location().await?,
            screen_midpoint: element.screen_midpoint().await?,
            screen_click_point: element.screen_click_point().await?,
            scroll_position: element.scroll_position().await?,
            device_pixel_ratio: element.device_pixel_ratio().await?,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct FrameReport {
    pub frame_id: String,
    pub target_id: String,
    pub location: Point,
    pub viewport_location: Point,
    pub screen_location: Point,
    pub corners: Corners,
    pub viewport_corners: Corners,
    pub size: Size,
    pub viewport_size: Size,
    pub scroll_position: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner: Option<ElementReport>,
}

impl FrameReport {
    pub(crate) async fn collect(
        frame_id: String,
        target_id: String,
        frame: &FrameGeometry<'_>,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            frame_id,
            target_id,
            location: frame.location().await?,
            viewport_location: frame.viewport_location().await?,
            screen_location: frame.screen_location().await?,
            corners: frame.corners().await?,
            viewport_corners: frame.viewport_corners().await?,
            size: frame.size().await?,
            viewport_size: frame.viewport_size().await?,
            scroll_position: frame.scroll_position().await?,
            inner: None,
        })
    }
}
