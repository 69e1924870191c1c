//! Marquee selection.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::{Element, ElementId};

/// Marquees smaller than this on either axis are treated as "no selection yet".
pub const MIN_MARQUEE_SIZE: f64 = 5.0;

/// A rubber-band selection in progress, anchored where the drag started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marquee {
    /// Pointer position when the drag started.
    pub start: Point,
    /// Current pointer position.
    pub current: Point,
}

impl Marquee {
    /// Start a marquee at `start`.
    #[must_use]
    pub const fn new(start: Point) -> Self {
        Self {
            start,
            current: start,
        }
    }

    /// Build a marquee from both corners.
    #[must_use]
    pub const fn from_points(start: Point, current: Point) -> Self {
        Self { start, current }
    }

    /// Move the free corner.
    pub fn update(&mut self, current: Point) {
        self.current = current;
    }

    /// The normalised rectangle between the two corners.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.start, self.current)
    }

    /// Whether the marquee is large enough to select anything.
    #[must_use]
    pub fn is_active(&self) -> bool {
        let rect = self.rect();
        rect.width >= MIN_MARQUEE_SIZE && rect.height >= MIN_MARQUEE_SIZE
    }

    /// Ids of the elements under the marquee, or nothing while it is too small.
    #[must_use]
    pub fn select(&self, elements: &[Element]) -> Vec<ElementId> {
        if self.is_active() {
            elements_in_selection(elements, &self.rect())
        } else {
            Vec::new()
        }
    }
}

/// Ids of the elements overlapping `rect`, in input order.
///
/// Edge contact counts as overlap. There is no minimum size here; callers
/// gate tiny marquees with [`Marquee::is_active`].
#[must_use]
pub fn elements_in_selection(elements: &[Element], rect: &Rect) -> Vec<ElementId> {
    let hits: Vec<ElementId> = elements
        .iter()
        .filter(|e| e.bounds().intersects(rect))
        .map(|e| e.id.clone())
        .collect();

    tracing::debug!(
        "Marquee {:?} hit {} of {} elements",
        rect,
        hits.len(),
        elements.len()
    );
    hits
}
