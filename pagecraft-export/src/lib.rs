//! # Pagecraft Export
//!
//! Serializes a scene into source code for a target platform.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐   z-sort   ┌───────────────┐  dialect  ┌──────────────┐
//! │ elements │ ─────────▶ │ ExportContext │ ────────▶ │ FormatWriter │ ──▶ String
//! └──────────┘            │ settings/opts │           │ html/react/… │
//!                         └───────────────┘           └──────────────┘
//! ```
//!
//! Every element becomes one absolutely positioned tag carrying
//! `data-element-id`. Export never fails and performs no I/O.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assets;
pub mod context;
pub mod error;
pub mod export;
pub mod formats;
pub mod head;
pub mod markup;
pub mod options;
pub mod style;
pub mod writer;

pub use context::{component_name, ExportContext};
pub use error::{ExportError, ExportResult};
pub use export::{export, export_scene, SceneExporter};
pub use formats::{writer_for, FormatWriter};
pub use head::HeadTag;
pub use markup::Dialect;
pub use options::{AnalyticsSettings, ExportFormat, ExportOptions, ProjectSettings, SeoSettings};
