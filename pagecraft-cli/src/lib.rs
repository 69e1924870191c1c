//! # Pagecraft CLI
//!
//! Drives the layout engines and the exporter from the command line.
//!
//! ## Usage
//!
//! ```bash
//! pagecraft align  --scene page.json --ids hero,cta --mode center-h --apply
//! pagecraft select --scene page.json --left 0 --top 0 --width 400 --height 300
//! pagecraft guides --scene page.json --active cta
//! pagecraft snap   --scene page.json --active cta --x 98 --y 201
//! pagecraft export --scene page.json --format react --seo --out Page.jsx
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `SceneDocument` - The JSON file every command reads
//! - `run` - Executes one command and returns what should be printed

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use pagecraft_core::{
    elements_in_selection, AlignMode, CanvasSize, Element, ElementId, GuideConfig, Point, Rect,
    Scene, DEFAULT_SNAP_THRESHOLD,
};
use pagecraft_export::{export, ExportFormat, ExportOptions, ProjectSettings};
use serde::{Deserialize, Serialize};

/// Command-line arguments for pagecraft.
#[derive(Debug, Clone, Parser)]
#[command(name = "pagecraft")]
#[command(about = "Layout and export tools for Pagecraft scene documents")]
#[command(version)]
pub struct CliArgs {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Align or distribute selected elements
    Align(AlignArgs),
    /// List elements intersecting a rectangle
    Select(SelectArgs),
    /// Show smart guides for an element being dragged
    Guides(GuidesArgs),
    /// Snap a drag position to nearby elements
    Snap(SnapArgs),
    /// Export the scene as source code
    Export(ExportArgs),
}

/// Path to the scene document.
#[derive(Debug, Clone, Args)]
pub struct SceneArg {
    /// Scene document (JSON)
    #[arg(long)]
    pub scene: PathBuf,
}

/// Arguments for `align`.
#[derive(Debug, Clone, Args)]
pub struct AlignArgs {
    /// Scene document
    #[command(flatten)]
    pub scene: SceneArg,

    /// Comma separated ids of the selected elements
    #[arg(long, value_delimiter = ',', required = true)]
    pub ids: Vec<String>,

    /// Alignment mode (left, right, top, bottom, center-h, center-v,
    /// distribute-h, distribute-v)
    #[arg(long)]
    pub mode: AlignMode,

    /// Print the updated scene document instead of the patches
    #[arg(long)]
    pub apply: bool,
}

/// Arguments for `select`.
#[derive(Debug, Clone, Args)]
pub struct SelectArgs {
    /// Scene document
    #[command(flatten)]
    pub scene: SceneArg,

    /// Left edge of the selection rectangle
    #[arg(long, allow_negative_numbers = true)]
    pub left: f64,

    /// Top edge of the selection rectangle
    #[arg(long, allow_negative_numbers = true)]
    pub top: f64,

    /// Width of the selection rectangle
    #[arg(long)]
    pub width: f64,

    /// Height of the selection rectangle
    #[arg(long)]
    pub height: f64,
}

/// Arguments for `guides`.
#[derive(Debug, Clone, Args)]
pub struct GuidesArgs {
    /// Scene document
    #[command(flatten)]
    pub scene: SceneArg,

    /// Id of the element being dragged
    #[arg(long)]
    pub active: String,

    /// Snap distance in pixels
    #[arg(long, env = "PAGECRAFT_SNAP_THRESHOLD", default_value_t = DEFAULT_SNAP_THRESHOLD)]
    pub threshold: f64,
}

/// Arguments for `snap`.
#[derive(Debug, Clone, Args)]
pub struct SnapArgs {
    /// Scene document
    #[command(flatten)]
    pub scene: SceneArg,

    /// Id of the element being dragged
    #[arg(long)]
    pub active: String,

    /// Proposed x of the element's top-left corner
    #[arg(long, allow_negative_numbers = true)]
    pub x: f64,

    /// Proposed y of the element's top-left corner
    #[arg(long, allow_negative_numbers = true)]
    pub y: f64,

    /// Snap distance in pixels
    #[arg(long, env = "PAGECRAFT_SNAP_THRESHOLD", default_value_t = DEFAULT_SNAP_THRESHOLD)]
    pub threshold: f64,
}

/// Arguments for `export`.
#[derive(Debug, Clone, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExportArgs {
    /// Scene document
    #[command(flatten)]
    pub scene: SceneArg,

    /// Target format (html, react, vue, angular, wordpress, squarespace)
    #[arg(long, env = "PAGECRAFT_FORMAT", default_value = "html")]
    pub format: ExportFormat,

    /// Leave out the stylesheet
    #[arg(long)]
    pub no_css: bool,

    /// Leave out the behavior script
    #[arg(long)]
    pub no_js: bool,

    /// Strip indentation and newlines
    #[arg(long)]
    pub minify: bool,

    /// Emit SEO meta tags
    #[arg(long)]
    pub seo: bool,

    /// Emit the analytics snippet
    #[arg(long)]
    pub analytics: bool,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl ExportArgs {
    /// Export options selected by these flags.
    #[must_use]
    pub fn options(&self, canvas: CanvasSize) -> ExportOptions {
        ExportOptions {
            format: self.format,
            include_css: !self.no_css,
            include_js: !self.no_js,
            minify: self.minify,
            seo: self.seo,
            analytics: self.analytics,
            canvas,
        }
    }
}

/// The file every command reads: canvas size, elements and project settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    /// Canvas dimensions.
    #[serde(default)]
    pub canvas: CanvasSize,
    /// Scene elements.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Project settings used by `export`.
    #[serde(default)]
    pub settings: ProjectSettings,
}

impl SceneDocument {
    /// Read a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a scene document.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene {}", path.display()))?;
        let document: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse scene {}", path.display()))?;
        tracing::debug!(
            "Loaded {} elements from {}",
            document.elements.len(),
            path.display()
        );
        Ok(document)
    }

    /// The document as a scene store.
    #[must_use]
    pub fn to_scene(&self) -> Scene {
        Scene::with_elements(self.canvas, self.elements.clone())
    }

    fn require(&self, id: &str) -> anyhow::Result<&Element> {
        match self.elements.iter().find(|e| e.id.as_str() == id) {
            Some(element) => Ok(element),
            None => bail!("Element not found: {id}"),
        }
    }
}

/// Run one command and return what should be printed.
///
/// Output is pretty JSON for the layout commands and the exported document
/// for `export`. When `export --out` is given the document is written to that
/// file and the returned string is empty.
///
/// # Errors
///
/// Returns an error if the scene cannot be loaded, a referenced element does
/// not exist, or the output cannot be written.
pub fn run(args: &CliArgs) -> anyhow::Result<String> {
    match &args.command {
        Command::Align(cmd) => align(cmd),
        Command::Select(cmd) => select(cmd),
        Command::Guides(cmd) => guides(cmd),
        Command::Snap(cmd) => snap(cmd),
        Command::Export(cmd) => export_document(cmd),
    }
}

fn align(cmd: &AlignArgs) -> anyhow::Result<String> {
    let document = SceneDocument::load(&cmd.scene.scene)?;
    let mut scene = document.to_scene();
    for id in &cmd.ids {
        if scene.get_element(&ElementId::from(id.as_str())).is_none() {
            tracing::warn!("Ignoring unknown element id {id}");
        }
    }
    scene.set_selection(cmd.ids.iter().map(|id| ElementId::from(id.as_str())));

    let patches = scene.align_selected(cmd.mode);
    tracing::info!("{} produced {} patches", cmd.mode, patches.len());

    if cmd.apply {
        let updated = SceneDocument {
            elements: scene.elements().to_vec(),
            ..document
        };
        Ok(serde_json::to_string_pretty(&updated)?)
    } else {
        Ok(serde_json::to_string_pretty(&patches)?)
    }
}

fn select(cmd: &SelectArgs) -> anyhow::Result<String> {
    let document = SceneDocument::load(&cmd.scene.scene)?;
    let rect = Rect::new(cmd.left, cmd.top, cmd.width, cmd.height);
    let hits = elements_in_selection(&document.elements, &rect);
    tracing::info!("Selection hit {} elements", hits.len());
    Ok(serde_json::to_string_pretty(&hits)?)
}

fn guides(cmd: &GuidesArgs) -> anyhow::Result<String> {
    let document = SceneDocument::load(&cmd.scene.scene)?;
    let active = document.require(&cmd.active)?;
    let config = GuideConfig {
        enabled: true,
        threshold: cmd.threshold,
    };
    let guides = config.guides(&document.elements, Some(&active.id), true);
    tracing::info!("{} guides for {}", guides.len(), active.id);
    Ok(serde_json::to_string_pretty(&guides)?)
}

fn snap(cmd: &SnapArgs) -> anyhow::Result<String> {
    let document = SceneDocument::load(&cmd.scene.scene)?;
    let active = document.require(&cmd.active)?;
    let config = GuideConfig {
        enabled: true,
        threshold: cmd.threshold,
    };
    let snapped = config.snap_point(
        Point::new(cmd.x, cmd.y),
        &document.elements,
        Some(&active.id),
        (active.width, active.height),
    );
    Ok(serde_json::to_string_pretty(&snapped)?)
}

fn export_document(cmd: &ExportArgs) -> anyhow::Result<String> {
    let document = SceneDocument::load(&cmd.scene.scene)?;
    let options = cmd.options(document.canvas);
    let output = export(&document.elements, &document.settings, &options);
    tracing::info!("Exported {} elements as {}", document.elements.len(), options.format);

    match &cmd.out {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
            Ok(String::new())
        }
        None => Ok(output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_align() {
        let args = CliArgs::try_parse_from([
            "pagecraft", "align", "--scene", "s.json", "--ids", "a,b", "--mode", "CENTER-H",
        ])
        .expect("valid args");
        let Command::Align(cmd) = args.command else {
            panic!("expected align");
        };
        assert_eq!(cmd.ids, vec!["a", "b"]);
        assert_eq!(cmd.mode, AlignMode::CenterH);
        assert!(!cmd.apply);
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let result = CliArgs::try_parse_from([
            "pagecraft", "align", "--scene", "s.json", "--ids", "a", "--mode", "diagonal",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let args = CliArgs::try_parse_from([
            "pagecraft", "snap", "--scene", "s.json", "--active", "a", "--x", "-12.5", "--y", "3",
        ])
        .expect("valid args");
        let Command::Snap(cmd) = args.command else {
            panic!("expected snap");
        };
        assert!((cmd.x + 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_export_flags_map_to_options() {
        let args = CliArgs::try_parse_from([
            "pagecraft", "export", "--scene", "s.json", "--format", "vue", "--no-js", "--seo",
        ])
        .expect("valid args");
        let Command::Export(cmd) = args.command else {
            panic!("expected export");
        };
        let options = cmd.options(CanvasSize::default());
        assert_eq!(options.format, ExportFormat::Vue);
        assert!(options.include_css);
        assert!(!options.include_js);
        assert!(options.seo);
        assert!(!options.analytics);
    }

    #[test]
    fn test_document_defaults() {
        let document: SceneDocument = serde_json::from_str("{}").expect("empty document");
        assert!(document.elements.is_empty());
        assert_eq!(document.settings.title, "Untitled Page");
    }
}
