//! Point, size, quad and element reference types.

use std::ops::{Add, Mul, Sub};

use pagerect_cdp::NodeTarget;
use serde::Serialize;

use crate::error::GeometryError;

/// A position in CSS pixels, or physical pixels once scaled by the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Offsets a point by an extent, e.g. a window origin by its size.
impl Add<Size> for Point {
    type Output = Point;

    fn add(self, rhs: Size) -> Point {
        Point::new(self.x + rhs.width, self.y + rhs.height)
    }
}

impl Sub<Size> for Point {
    type Output = Point;

    fn sub(self, rhs: Size) -> Point {
        Point::new(self.x - rhs.width, self.y - rhs.height)
    }
}

/// Component-wise scaling, used for CSS to physical pixel conversion.
impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

/// A width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Four corners in order top-left, top-right, bottom-right, bottom-left.
pub type Corners = [Point; 4];

/// A box-model quad: `[x0, y0, x1, y1, x2, y2, x3, y3]`, clockwise from top-left.
///
/// Indices below follow the flat layout, so `q[2]` is the top-right x and
/// `q[5]` the bottom-right y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad([f64; 8]);

impl Quad {
    pub fn new(values: [f64; 8]) -> Self {
        Self(values)
    }

    /// The `i`th corner, `0..4`.
    pub fn corner(&self, i: usize) -> Point {
        Point::new(self.0[2 * i], self.0[2 * i + 1])
    }

    pub fn corners(&self) -> Corners {
        [self.corner(0), self.corner(1), self.corner(2), self.corner(3)]
    }

    pub fn top_left(&self) -> Point {
        self.corner(0)
    }

    /// Width from the top edge, height from the right edge.
    pub fn size(&self) -> Size {
        Size::new(self.0[2] - self.0[0], self.0[5] - self.0[1])
    }

    /// Center of the box, each half-extent floored to a whole pixel.
    pub fn midpoint(&self) -> Point {
        let q = &self.0;
        Point::new(
            q[0] + ((q[2] - q[0]) / 2.0).floor(),
            q[3] + ((q[5] - q[3]) / 2.0).floor(),
        )
    }
}

impl TryFrom<&[f64]> for Quad {
    type Error = GeometryError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let values: [f64; 8] = values.try_into().map_err(|_| {
            GeometryError::InvalidResponse(format!(
                "quad must have 8 numbers, got {}",
                values.len()
            ))
        })?;
        Ok(Self(values))
    }
}

/// Protocol identifiers of a DOM element.
///
/// Held by the caller; geometry borrows it and never caches it. The context
/// the ids belong to is passed separately, next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRef {
    pub backend_node_id: i64,
    pub node_id: Option<i64>,
    pub object_id: Option<String>,
}

impl ElementRef {
    pub fn new(backend_node_id: i64) -> Self {
        Self {
            backend_node_id,
            node_id: None,
            object_id: None,
        }
    }

    pub fn with_node_id(mut self, node_id: i64) -> Self {
        self.node_id = Some(node_id);
        self
    }

    pub fn with_object_id(mut self, object_id: impl Into<String>) -> Self {
        self.object_id = Some(object_id.into());
        self
    }

    /// Ids to send with DOM commands.
    ///
    /// Node ids are only valid for the DOM agent that issued them, so the
    /// stable backend id is sent instead. The object id, when known, saves a
    /// `DOM.resolveNode` round-trip for script calls.
    pub fn target(&self) -> NodeTarget {
        NodeTarget {
            node_id: None,
            backend_node_id: Some(self.backend_node_id),
            object_id: self.object_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Quad {
        Quad::new([10.0, 20.0, 110.0, 20.0, 110.0, 70.0, 10.0, 70.0])
    }

    #[test]
    fn test_quad_corners_order() {
        let corners = quad().corners();
        assert_eq!(corners[0], Point::new(10.0, 20.0));
        assert_eq!(corners[1], Point::new(110.0, 20.0));
        assert_eq!(corners[2], Point::new(110.0, 70.0));
        assert_eq!(corners[3], Point::new(10.0, 70.0));
    }

    #[test]
    fn test_quad_size() {
        assert_eq!(quad().size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_quad_midpoint_floors_half_extent() {
        let q = Quad::new([0.0, 0.0, 5.0, 0.0, 5.0, 3.0, 0.0, 3.0]);
        assert_eq!(q.midpoint(), Point::new(2.0, 1.0));

        let q = Quad::new([0.5, 0.5, 10.0, 0.5, 10.0, 7.5, 0.5, 7.5]);
        assert_eq!(q.midpoint(), Point::new(4.5, 3.5));
    }

    #[test]
    fn test_quad_from_short_slice() {
        let values = [1.0, 2.0, 3.0];
        let err = Quad::try_from(&values[..]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidResponse(_)));
    }

    #[test]
    fn test_point_arithmetic() {
        let p = Point::new(10.0, 20.0) + Size::new(5.0, 5.0) - Point::new(1.0, 2.0);
        assert_eq!(p, Point::new(14.0, 23.0));
        assert_eq!(p * 2.0, Point::new(28.0, 46.0));
        assert_eq!(p - Size::new(14.0, 23.0), Point::ZERO);
    }

    #[test]
    fn test_element_ref_target_prefers_backend_id() {
        let element = ElementRef::new(42).with_node_id(7).with_object_id("obj-1");
        let target = element.target();
        assert_eq!(target.backend_node_id, Some(42));
        assert_eq!(target.node_id, None);
        assert_eq!(target.object_id.as_deref(), Some("obj-1"));
    }
}
