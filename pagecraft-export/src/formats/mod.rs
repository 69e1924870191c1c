//! Target format writers.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     FormatWriter Trait                       │
//! ├──────┬───────┬─────┬─────────┬───────────┬───────────────────┤
//! │ HTML │ React │ Vue │ Angular │ WordPress │ Squarespace       │
//! │ doc  │ JSX   │ SFC │ @Comp.  │ PHP tmpl  │ header + block    │
//! └──────┴───────┴─────┴─────────┴───────────┴───────────────────┘
//! ```

pub mod angular;
pub mod html;
pub mod react;
pub mod squarespace;
pub mod vue;
pub mod wordpress;

pub use angular::AngularFormat;
pub use html::HtmlFormat;
pub use react::ReactFormat;
pub use squarespace::SquarespaceFormat;
pub use vue::VueFormat;
pub use wordpress::WordpressFormat;

use crate::assets::analytics_script;
use crate::context::ExportContext;
use crate::head::head_script;
use crate::options::ExportFormat;
use crate::writer::CodeWriter;

/// Trait for target format writers.
pub trait FormatWriter {
    /// The format this writer produces.
    fn format(&self) -> ExportFormat;

    /// Serialize the export context. Never fails.
    fn write(&self, ctx: &ExportContext<'_>) -> String;
}

/// The writer for `format`.
#[must_use]
pub fn writer_for(format: ExportFormat) -> Box<dyn FormatWriter> {
    match format {
        ExportFormat::Html => Box::new(HtmlFormat),
        ExportFormat::React => Box::new(ReactFormat),
        ExportFormat::Vue => Box::new(VueFormat),
        ExportFormat::Angular => Box::new(AngularFormat),
        ExportFormat::Wordpress => Box::new(WordpressFormat),
        ExportFormat::Squarespace => Box::new(SquarespaceFormat),
    }
}

/// `<style>` element.
fn write_style_tag(w: &mut CodeWriter, css: &str) {
    w.open("<style>");
    w.block(css);
    w.close("</style>");
}

/// `<script>` element.
fn write_script_tag(w: &mut CodeWriter, js: &str) {
    w.open("<script>");
    w.block(js);
    w.close("</script>");
}

/// Script run once the component is mounted: SEO, behavior, analytics.
///
/// Empty when none of them is enabled.
fn lifecycle_script(ctx: &ExportContext<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    if ctx.options().seo {
        lines.extend(head_script(Some(ctx.page_title()), &ctx.head_tags()));
    }
    if let Some(script) = ctx.script() {
        lines.extend(script.lines().map(str::to_string));
    }
    if let Some(id) = ctx.analytics_id() {
        lines.extend(analytics_script(id).lines().map(str::to_string));
    }
    lines
}
