//! Geometry helpers shared by the layout engines.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal axis (x, width).
    X,
    /// Vertical axis (y, height).
    Y,
}

impl Axis {
    /// Leading edge of an element on this axis (left or top).
    #[must_use]
    pub fn start(self, element: &Element) -> f64 {
        match self {
            Self::X => element.x,
            Self::Y => element.y,
        }
    }

    /// Extent of an element on this axis (width or height).
    #[must_use]
    pub fn extent(self, element: &Element) -> f64 {
        match self {
            Self::X => element.width,
            Self::Y => element.height,
        }
    }

    /// Trailing edge of an element on this axis (right or bottom).
    #[must_use]
    pub fn end(self, element: &Element) -> f64 {
        self.start(element) + self.extent(element)
    }

    /// Center line of an element on this axis.
    #[must_use]
    pub fn center(self, element: &Element) -> f64 {
        self.start(element) + self.extent(element) / 2.0
    }
}

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// The rectangle spanned by two corner points, in any order.
    #[must_use]
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (a.x - b.x).abs(),
            (a.y - b.y).abs(),
        )
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal center.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical center.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Inclusive point containment.
    #[must_use]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// Axis-aligned overlap test. Touching edges count as intersecting; the
    /// rectangles are disjoint only when strictly separated on an axis.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.right() < other.left
            || self.left > other.right()
            || self.bottom() < other.top
            || self.top > other.bottom())
    }

    /// Smallest rectangle containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(left, top, right - left, bottom - top)
    }
}

/// Combined bounding box of a set of rectangles, or `None` when empty.
pub fn bounding_box<I>(rects: I) -> Option<Rect>
where
    I: IntoIterator<Item = Rect>,
{
    rects.into_iter().reduce(|acc, rect| acc.union(&rect))
}

/// Whether two coordinates are within `threshold` of each other (inclusive).
#[must_use]
pub fn within_threshold(a: f64, b: f64, threshold: f64) -> bool {
    (a - b).abs() <= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_points_normalizes_corners() {
        let rect = Rect::from_points(Point::new(60.0, 80.0), Point::new(10.0, 20.0));
        assert_eq!(rect, Rect::new(10.0, 20.0, 50.0, 60.0));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));

        let c = Rect::new(10.5, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_zero_area_rect_still_hits() {
        let point = Rect::new(5.0, 5.0, 0.0, 0.0);
        let area = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(point.intersects(&area));
    }

    #[test]
    fn test_bounding_box() {
        let rects = [
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Rect::new(200.0, 10.0, 100.0, 50.0),
        ];
        let bbox = bounding_box(rects).expect("bbox");
        assert_eq!(bbox, Rect::new(0.0, 0.0, 300.0, 60.0));
        assert!(bounding_box(std::iter::empty()).is_none());
    }

    #[test]
    fn test_within_threshold_is_inclusive() {
        assert!(within_threshold(10.0, 15.0, 5.0));
        assert!(!within_threshold(10.0, 15.5, 5.0));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-500.0f64..500.0, -500.0f64..500.0, 0.0f64..300.0, 0.0f64..300.0)
            .prop_map(|(left, top, width, height)| Rect::new(left, top, width, height))
    }

    proptest! {
        #[test]
        fn prop_intersection_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn prop_union_contains_both(a in arb_rect(), b in arb_rect()) {
            let u = a.union(&b);
            prop_assert!(u.left <= a.left && u.left <= b.left);
            prop_assert!(u.right() >= a.right() - 1e-9 && u.right() >= b.right() - 1e-9);
        }
    }
}
