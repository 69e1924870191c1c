//! # Pagecraft Core
//!
//! Layout logic for the Pagecraft visual page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               pagecraft-core                │
//! ├─────────────────────────────────────────────┤
//! │  Scene Model     │  Layout Engines          │
//! │  - Elements      │  - Align / distribute    │
//! │  - Styles        │  - Marquee hit testing   │
//! │  - Scene store   │  - Smart guides & snap   │
//! ├─────────────────────────────────────────────┤
//! │  Geometry: rects, bounding boxes, axes      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The engines are pure functions over `&[Element]`. They return patches or
//! ids and never mutate the scene; [`Scene`] is the store that applies them.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod align;
pub mod element;
pub mod error;
pub mod geometry;
pub mod guides;
pub mod scene;
pub mod selection;

pub use align::{align, selection_bounds, AlignMode, ElementPatch, Patches};
pub use element::{Content, Element, ElementId, ElementType, StyleValue};
pub use error::{CanvasError, CanvasResult};
pub use geometry::{Axis, Point, Rect};
pub use guides::{
    compute_guides, snap_point, snap_position, Guide, GuideConfig, GuideKind, Orientation,
    DEFAULT_SNAP_THRESHOLD,
};
pub use scene::{CanvasSize, Scene};
pub use selection::{elements_in_selection, Marquee, MIN_MARQUEE_SIZE};

/// Pagecraft core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
