//! Coordinate geometry for elements, viewports, windows and frames of a
//! browser driven over the Chrome DevTools Protocol.
//!
//! The browser only reports context-relative raw geometry: box-model quads,
//! layout metrics and window bounds. This crate composes them into
//! consistent positions across four coordinate systems:
//!
//! - **viewport**: relative to the visible top-left of a document
//! - **page**: relative to the unscrolled document origin
//! - **screen (CSS)**: relative to the usable screen area, OS chrome removed
//! - **screen (physical)**: screen CSS pixels times `devicePixelRatio`
//!
//! ## Components
//!
//! - [`WindowGeometry`] - window state, window and viewport placement, page size
//! - [`ElementGeometry`] - element corners and points in all coordinate systems
//! - [`FrameGeometry`] - out-of-process iframes, positioned by their host element
//!
//! Nothing is cached: every accessor re-queries the browser through a
//! [`RemoteContext`], so results always reflect the state at call time.
//!
//! ```rust,ignore
//! let tab = client.attach_first_page().await?;
//! let window = WindowGeometry::new(&tab);
//! let node = tab.find_node("#submit").await?;
//! let button = ElementRef::new(node.backend_node_id);
//! let geometry = ElementGeometry::new(&tab, &button, &window);
//! let click = geometry.screen_click_point().await?;
//! ```

mod context;
mod element;
mod error;
mod frame;
mod rect;
mod types;
mod window;

#[cfg(test)]
mod fake;

pub use context::RemoteContext;
pub use element::ElementGeometry;
pub use error::GeometryError;
pub use frame::FrameGeometry;
pub use rect::Rect;
pub use types::{Corners, ElementRef, Point, Quad, Size};
pub use window::WindowGeometry;
