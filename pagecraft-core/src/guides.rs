//! Smart guides and snapping while an element is dragged.
//!
//! ## Reference lines
//!
//! ```text
//!   start      center      end
//!     │           │          │
//!     ┌──────────────────────┐
//!     │       other          │
//!     └──────────────────────┘
//!         ┌───────────┐
//!         │  active   │   ← compared edge-to-edge and center-to-center
//!         └───────────┘
//! ```
//!
//! Guides are always placed on the *other* element's line. Other elements are
//! visited sorted by id, so ties resolve the same way no matter how the scene
//! store orders its elements.

use serde::{Deserialize, Serialize};

use crate::geometry::{within_threshold, Axis, Point};
use crate::{Element, ElementId};

/// Default snap distance in pixels.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 5.0;

/// Direction of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// A vertical line at an x coordinate.
    Vertical,
    /// A horizontal line at a y coordinate.
    Horizontal,
}

impl Orientation {
    /// The axis whose coordinate the line marks.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Vertical => Axis::X,
            Self::Horizontal => Axis::Y,
        }
    }
}

/// What kind of match produced a guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideKind {
    /// Edge-to-edge alignment.
    Edge,
    /// Center-to-center alignment.
    Center,
}

impl GuideKind {
    /// Display color for this kind of guide.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Edge => "#ff3b7f",
            Self::Center => "#00b4d8",
        }
    }
}

/// A transient alignment line shown during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    /// Coordinate of the line on its axis.
    pub position: f64,
    /// Line direction.
    pub orientation: Orientation,
    /// Edge or center match.
    pub kind: GuideKind,
}

impl Guide {
    /// Display color.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.kind.color()
    }
}

/// Snapping preferences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Whether guides and snapping are on.
    pub enabled: bool,
    /// Maximum distance at which a guide appears or a snap happens.
    pub threshold: f64,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }
}

impl GuideConfig {
    /// Guides for the current drag frame, honouring `enabled`.
    #[must_use]
    pub fn guides(
        &self,
        elements: &[Element],
        active_id: Option<&ElementId>,
        is_dragging: bool,
    ) -> Vec<Guide> {
        if !self.enabled {
            return Vec::new();
        }
        compute_guides(elements, active_id, is_dragging, self.threshold)
    }

    /// Snapped top-left corner for the dragged element, honouring `enabled`.
    #[must_use]
    pub fn snap_point(
        &self,
        position: Point,
        elements: &[Element],
        active_id: Option<&ElementId>,
        size: (f64, f64),
    ) -> Point {
        if !self.enabled {
            return position;
        }
        snap_point(position, elements, active_id, size, self.threshold)
    }
}

/// Compute the guide lines for the element being dragged.
///
/// Returns nothing unless a drag is in progress and `active_id` names an
/// element in `elements`.
#[must_use]
pub fn compute_guides(
    elements: &[Element],
    active_id: Option<&ElementId>,
    is_dragging: bool,
    threshold: f64,
) -> Vec<Guide> {
    if !is_dragging {
        return Vec::new();
    }
    let Some(active) = active_id.and_then(|id| elements.iter().find(|e| e.id == *id)) else {
        return Vec::new();
    };

    let mut guides = Vec::new();
    for other in others_sorted(elements, &active.id) {
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            let axis = orientation.axis();
            for ours in [axis.start(active), axis.end(active)] {
                for theirs in [axis.start(other), axis.end(other)] {
                    if within_threshold(ours, theirs, threshold) {
                        push_unique(&mut guides, theirs, orientation, GuideKind::Edge);
                    }
                }
            }
            let theirs = axis.center(other);
            if within_threshold(axis.center(active), theirs, threshold) {
                push_unique(&mut guides, theirs, orientation, GuideKind::Center);
            }
        }
    }

    tracing::trace!("{} guides for {}", guides.len(), active.id);
    guides
}

/// Snap the leading coordinate of the dragged element on one axis.
///
/// The active element's leading edge, trailing edge and center are tested
/// against every other element's leading edge, trailing edge and center. The
/// closest pair within `threshold` wins, with ties going to the first pair
/// found. The result is the coordinate the leading edge must take for that
/// pair to line up; with no pair in range `position` is returned unchanged.
#[must_use]
pub fn snap_position(
    position: f64,
    elements: &[Element],
    active_id: Option<&ElementId>,
    active_size: f64,
    axis: Axis,
    threshold: f64,
) -> f64 {
    let Some(active_id) = active_id else {
        return position;
    };

    let offsets = [0.0, active_size, active_size / 2.0];
    let mut best: Option<(f64, f64)> = None;

    for other in others_sorted(elements, active_id) {
        for reference in [axis.start(other), axis.end(other), axis.center(other)] {
            for offset in offsets {
                let distance = (position + offset - reference).abs();
                if distance > threshold {
                    continue;
                }
                let closer = match best {
                    Some((closest, _)) => distance < closest,
                    None => true,
                };
                if closer {
                    best = Some((distance, reference - offset));
                }
            }
        }
    }

    match best {
        Some((distance, snapped)) => {
            tracing::trace!("Snapped {axis:?} {position} -> {snapped} (distance {distance})");
            snapped
        }
        None => position,
    }
}

/// Snap both axes of the dragged element's top-left corner.
#[must_use]
pub fn snap_point(
    position: Point,
    elements: &[Element],
    active_id: Option<&ElementId>,
    size: (f64, f64),
    threshold: f64,
) -> Point {
    let (width, height) = size;
    Point::new(
        snap_position(position.x, elements, active_id, width, Axis::X, threshold),
        snap_position(position.y, elements, active_id, height, Axis::Y, threshold),
    )
}

fn others_sorted<'a>(elements: &'a [Element], active_id: &ElementId) -> Vec<&'a Element> {
    let mut others: Vec<&Element> = elements.iter().filter(|e| e.id != *active_id).collect();
    others.sort_by(|a, b| a.id.cmp(&b.id));
    others
}

#[allow(clippy::float_cmp)]
fn push_unique(guides: &mut Vec<Guide>, position: f64, orientation: Orientation, kind: GuideKind) {
    let exists = guides
        .iter()
        .any(|g| g.orientation == orientation && g.position == position);
    if !exists {
        guides.push(Guide {
            position,
            orientation,
            kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementType;
    use proptest::prelude::*;

    fn block(id: &str, x: f64, y: f64, w: f64, h: f64) -> Element {
        Element::new(ElementType::Container)
            .with_id(id)
            .with_position(x, y)
            .with_size(w, h)
    }

    fn active() -> ElementId {
        ElementId::from("active")
    }

    #[test]
    fn test_no_guides_when_not_dragging() {
        let elements = vec![
            block("active", 0.0, 0.0, 100.0, 100.0),
            block("other", 0.0, 0.0, 100.0, 100.0),
        ];
        assert!(compute_guides(&elements, Some(&active()), false, 5.0).is_empty());
    }

    #[test]
    fn test_no_guides_without_active_element() {
        let elements = vec![block("other", 0.0, 0.0, 100.0, 100.0)];
        assert!(compute_guides(&elements, None, true, 5.0).is_empty());
        assert!(compute_guides(&elements, Some(&active()), true, 5.0).is_empty());
    }

    #[test]
    fn test_guide_sits_on_other_element_line() {
        let elements = vec![
            block("active", 103.0, 500.0, 50.0, 20.0),
            block("other", 100.0, 0.0, 40.0, 40.0),
        ];
        let guides = compute_guides(&elements, Some(&active()), true, 5.0);
        assert_eq!(
            guides,
            vec![Guide {
                position: 100.0,
                orientation: Orientation::Vertical,
                kind: GuideKind::Edge,
            }]
        );
    }

    #[test]
    fn test_center_guide() {
        let elements = vec![
            block("active", 500.0, 42.0, 10.0, 20.0),
            block("other", 0.0, 0.0, 10.0, 100.0),
        ];
        let guides = compute_guides(&elements, Some(&active()), true, 5.0);
        assert_eq!(guides.len(), 1);
        assert_eq!(guides[0].orientation, Orientation::Horizontal);
        assert_eq!(guides[0].kind, GuideKind::Center);
        assert!((guides[0].position - 50.0).abs() < f64::EPSILON);
        assert_eq!(guides[0].color(), GuideKind::Center.color());
    }

    #[test]
    fn test_guides_deduplicated() {
        let elements = vec![
            block("active", 0.0, 300.0, 100.0, 10.0),
            block("b", 0.0, 0.0, 100.0, 10.0),
            block("c", 0.0, 100.0, 100.0, 10.0),
        ];
        let guides = compute_guides(&elements, Some(&active()), true, 5.0);
        let vertical: Vec<&Guide> = guides
            .iter()
            .filter(|g| g.orientation == Orientation::Vertical)
            .collect();
        // left edge, right edge and center, once each despite two sources
        assert_eq!(vertical.len(), 3);
    }

    #[test]
    fn test_disabled_config_shows_nothing() {
        let elements = vec![
            block("active", 0.0, 0.0, 100.0, 100.0),
            block("other", 0.0, 0.0, 100.0, 100.0),
        ];
        let config = GuideConfig {
            enabled: false,
            ..GuideConfig::default()
        };
        assert!(config.guides(&elements, Some(&active()), true).is_empty());
        let p = Point::new(3.0, 3.0);
        assert_eq!(config.snap_point(p, &elements, Some(&active()), (100.0, 100.0)), p);
    }

    #[test]
    fn test_snap_leading_edge() {
        let elements = vec![block("other", 100.0, 0.0, 50.0, 50.0)];
        let snapped = snap_position(97.0, &elements, Some(&active()), 30.0, Axis::X, 5.0);
        assert!((snapped - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_trailing_edge_adjusts_by_size() {
        let elements = vec![block("other", 100.0, 0.0, 50.0, 50.0)];
        // active right edge 68 + 30 = 98 lines up with other left edge at 100
        let snapped = snap_position(68.0, &elements, Some(&active()), 30.0, Axis::X, 5.0);
        assert!((snapped - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_center_adjusts_by_half_size() {
        let elements = vec![block("other", 0.0, 0.0, 100.0, 100.0)];
        // active center 32 + 20 = 52 near other center 50
        let snapped = snap_position(32.0, &elements, Some(&active()), 40.0, Axis::Y, 5.0);
        assert!((snapped - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_picks_closest_pair() {
        let elements = vec![
            block("a", 100.0, 0.0, 10.0, 10.0),
            block("b", 203.0, 0.0, 10.0, 10.0),
        ];
        // leading edge 204: 1px from b's left edge (203)
        let snapped = snap_position(204.0, &elements, Some(&active()), 96.0, Axis::X, 5.0);
        assert!((snapped - 203.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_tie_goes_to_first_by_id() {
        let elements = vec![
            block("z", 102.0, 0.0, 10.0, 10.0),
            block("m", 98.0, 0.0, 10.0, 10.0),
        ];
        // 100 is 2px from both 98 (id "m") and 102 (id "z"); "m" sorts first
        let snapped = snap_position(100.0, &elements, Some(&active()), 0.0, Axis::X, 5.0);
        assert!((snapped - 98.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_out_of_range_is_identity() {
        let elements = vec![block("other", 100.0, 0.0, 50.0, 50.0)];
        let snapped = snap_position(20.0, &elements, Some(&active()), 30.0, Axis::X, 5.0);
        assert!((snapped - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_ignores_active_element() {
        let elements = vec![block("active", 97.0, 0.0, 30.0, 30.0)];
        let snapped = snap_position(95.0, &elements, Some(&active()), 30.0, Axis::X, 5.0);
        assert!((snapped - 95.0).abs() < f64::EPSILON);
        assert!((snap_position(95.0, &elements, None, 30.0, Axis::X, 5.0) - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_point_both_axes() {
        let elements = vec![block("other", 100.0, 200.0, 50.0, 50.0)];
        let snapped = snap_point(
            Point::new(98.0, 201.0),
            &elements,
            Some(&active()),
            (20.0, 20.0),
            DEFAULT_SNAP_THRESHOLD,
        );
        assert_eq!(snapped, Point::new(100.0, 200.0));
    }

    fn arb_scene() -> impl Strategy<Value = Vec<Element>> {
        prop::collection::vec((0i32..400, 0i32..400, 1i32..200, 1i32..200), 1..8).prop_map(
            |specs| {
                specs
                    .into_iter()
                    .enumerate()
                    .map(|(i, (x, y, w, h))| {
                        block(
                            &format!("e{i}"),
                            f64::from(x),
                            f64::from(y),
                            f64::from(w),
                            f64::from(h),
                        )
                    })
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn prop_no_guides_when_idle(elements in arb_scene(), x in 0i32..400) {
            let mut all = elements;
            all.push(block("active", f64::from(x), 0.0, 50.0, 50.0));
            prop_assert!(compute_guides(&all, Some(&active()), false, 5.0).is_empty());
        }

        #[test]
        fn prop_snap_is_idempotent(elements in arb_scene(), x in 0i32..400, size in 1i32..200) {
            let size = f64::from(size);
            let once = snap_position(f64::from(x), &elements, Some(&active()), size, Axis::X, 5.0);
            let twice = snap_position(once, &elements, Some(&active()), size, Axis::X, 5.0);
            prop_assert!((once - twice).abs() < 1e-9);
        }
    }
}
