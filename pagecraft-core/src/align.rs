//! Alignment and distribution of selected elements.
//!
//! Every operation works on the *selected* subset only and returns a patch
//! per selected element. Nothing is mutated here; the caller owns the scene
//! and applies the patches.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CanvasError;
use crate::geometry::{bounding_box, Axis, Rect};
use crate::{Element, ElementId};

/// Position updates keyed by element id.
pub type Patches = BTreeMap<ElementId, ElementPatch>;

/// A partial positional update for one element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementPatch {
    /// New x position, if changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl ElementPatch {
    /// A patch setting the leading coordinate on `axis`.
    #[must_use]
    pub fn on_axis(axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => Self {
                x: Some(value),
                y: None,
            },
            Axis::Y => Self {
                x: None,
                y: Some(value),
            },
        }
    }

    /// Whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }

    /// Produce the patched copy of `element`.
    #[must_use]
    pub fn apply_to(&self, element: &Element) -> Element {
        let mut patched = element.clone();
        if let Some(x) = self.x {
            patched.x = x;
        }
        if let Some(y) = self.y {
            patched.y = y;
        }
        patched
    }
}

/// Alignment and distribution modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignMode {
    /// Align left edges to the leftmost.
    Left,
    /// Align right edges to the rightmost.
    Right,
    /// Align top edges to the topmost.
    Top,
    /// Align bottom edges to the bottommost.
    Bottom,
    /// Center horizontally within the selection bounds.
    CenterH,
    /// Center vertically within the selection bounds.
    CenterV,
    /// Equal horizontal gaps between outermost elements.
    DistributeH,
    /// Equal vertical gaps between outermost elements.
    DistributeV,
}

impl AlignMode {
    /// All modes, in toolbar order.
    pub const ALL: [Self; 8] = [
        Self::Left,
        Self::CenterH,
        Self::Right,
        Self::Top,
        Self::CenterV,
        Self::Bottom,
        Self::DistributeH,
        Self::DistributeV,
    ];

    /// The kebab-case mode name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::CenterH => "center-h",
            Self::CenterV => "center-v",
            Self::DistributeH => "distribute-h",
            Self::DistributeV => "distribute-v",
        }
    }

    /// The axis this mode moves elements along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right | Self::CenterH | Self::DistributeH => Axis::X,
            Self::Top | Self::Bottom | Self::CenterV | Self::DistributeV => Axis::Y,
        }
    }
}

impl fmt::Display for AlignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlignMode {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CanvasError::UnknownAlignMode(s.to_string()))
    }
}

/// Compute aligned or distributed positions for the selected elements.
///
/// Returns an empty map when fewer than two elements are selected.
#[must_use]
pub fn align(elements: &[Element], selected_ids: &HashSet<ElementId>, mode: AlignMode) -> Patches {
    let selected: Vec<&Element> = elements
        .iter()
        .filter(|e| selected_ids.contains(&e.id))
        .collect();

    if selected.len() < 2 {
        tracing::debug!(
            "Ignoring {mode} with {} selected element(s)",
            selected.len()
        );
        return Patches::new();
    }

    tracing::debug!("Applying {mode} to {} elements", selected.len());

    let axis = mode.axis();
    match mode {
        AlignMode::Left | AlignMode::Top => {
            let target = min_start(&selected, axis);
            patch_each(&selected, axis, |_| target)
        }
        AlignMode::Right | AlignMode::Bottom => {
            let target = max_end(&selected, axis);
            patch_each(&selected, axis, |e| target - axis.extent(e))
        }
        AlignMode::CenterH | AlignMode::CenterV => {
            let mid = (min_start(&selected, axis) + max_end(&selected, axis)) / 2.0;
            patch_each(&selected, axis, |e| mid - axis.extent(e) / 2.0)
        }
        AlignMode::DistributeH | AlignMode::DistributeV => distribute(selected, axis),
    }
}

/// Combined bounding box of the selected elements.
#[must_use]
pub fn selection_bounds(elements: &[Element], selected_ids: &HashSet<ElementId>) -> Option<Rect> {
    bounding_box(
        elements
            .iter()
            .filter(|e| selected_ids.contains(&e.id))
            .map(Element::bounds),
    )
}

fn min_start(selected: &[&Element], axis: Axis) -> f64 {
    selected
        .iter()
        .map(|e| axis.start(e))
        .fold(f64::INFINITY, f64::min)
}

fn max_end(selected: &[&Element], axis: Axis) -> f64 {
    selected
        .iter()
        .map(|e| axis.end(e))
        .fold(f64::NEG_INFINITY, f64::max)
}

fn patch_each<F>(selected: &[&Element], axis: Axis, position: F) -> Patches
where
    F: Fn(&Element) -> f64,
{
    selected
        .iter()
        .map(|e| (e.id.clone(), ElementPatch::on_axis(axis, position(e))))
        .collect()
}

/// Equal gaps between consecutive elements, keeping the first leading edge
/// and the last trailing edge fixed. The gap may be negative.
fn distribute(mut selected: Vec<&Element>, axis: Axis) -> Patches {
    selected.sort_by(|a, b| axis.start(a).total_cmp(&axis.start(b)));

    let (Some(first), Some(last)) = (selected.first(), selected.last()) else {
        return Patches::new();
    };
    let span_start = axis.start(first);
    let span_end = axis.end(last);
    let total_extent: f64 = selected.iter().map(|e| axis.extent(e)).sum();
    #[allow(clippy::cast_precision_loss)]
    let gap = (span_end - span_start - total_extent) / (selected.len() - 1) as f64;

    let mut patches = Patches::new();
    let mut cursor = span_start;
    let last_index = selected.len() - 1;
    for (index, element) in selected.iter().enumerate() {
        let position = if index == last_index {
            span_end - axis.extent(element)
        } else {
            cursor
        };
        patches.insert(element.id.clone(), ElementPatch::on_axis(axis, position));
        cursor = position + axis.extent(element) + gap;
    }
    patches
}
