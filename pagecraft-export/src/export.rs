//! Scene export entry points.
//!
//! Sorts a [`Scene`]'s elements into paint order and hands them to the
//! [`FormatWriter`] for the requested [`ExportFormat`].

use pagecraft_core::{Element, Scene};

use crate::context::ExportContext;
use crate::formats::{writer_for, FormatWriter};
use crate::options::{ExportFormat, ExportOptions, ProjectSettings};

/// Serialize `elements` as a document in `options.format`.
///
/// Pure and infallible: missing optional fields are omitted from the output.
#[must_use]
pub fn export(elements: &[Element], settings: &ProjectSettings, options: &ExportOptions) -> String {
    tracing::debug!(
        "Exporting {} elements as {}",
        elements.len(),
        options.format
    );
    let ctx = ExportContext::new(elements, settings, options);
    writer_for(options.format).write(&ctx)
}

/// Serialize a scene; the scene's canvas size overrides `options.canvas`.
#[must_use]
pub fn export_scene(scene: &Scene, settings: &ProjectSettings, options: &ExportOptions) -> String {
    let options = ExportOptions {
        canvas: scene.canvas,
        ..options.clone()
    };
    export(scene.elements(), settings, &options)
}

/// Exports a [`Scene`] with fixed project settings and options.
#[derive(Debug, Clone, Default)]
pub struct SceneExporter {
    settings: ProjectSettings,
    options: ExportOptions,
}

impl SceneExporter {
    /// Create a new exporter.
    #[must_use]
    pub fn new(settings: ProjectSettings, options: ExportOptions) -> Self {
        Self { settings, options }
    }

    /// Create an exporter with default settings and options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Project settings in use.
    #[must_use]
    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    /// Options in use.
    #[must_use]
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export a scene to the specified format.
    #[must_use]
    pub fn export(&self, scene: &Scene, format: ExportFormat) -> String {
        let options = ExportOptions {
            format,
            ..self.options.clone()
        };
        export_scene(scene, &self.settings, &options)
    }

    /// Export a scene to every format, paired with each format's file name.
    #[must_use]
    pub fn export_all(&self, scene: &Scene) -> Vec<(&'static str, String)> {
        ExportFormat::ALL
            .iter()
            .map(|&format| (format.file_name(), self.export(scene, format)))
            .collect()
    }
}
