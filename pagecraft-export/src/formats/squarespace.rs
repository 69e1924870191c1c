//! Squarespace code injection.

use crate::assets::analytics_html;
use crate::context::ExportContext;
use crate::options::ExportFormat;

use super::{write_script_tag, write_style_tag, FormatWriter};

/// Writes two pastes: a site header injection (SEO and style) followed by a
/// page code block (markup, script and analytics).
///
/// Squarespace owns the document `<title>`, so none is emitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquarespaceFormat;

impl FormatWriter for SquarespaceFormat {
    fn format(&self) -> ExportFormat {
        ExportFormat::Squarespace
    }

    fn write(&self, ctx: &ExportContext<'_>) -> String {
        let mut w = ctx.writer();

        w.line("<!-- Header code injection: Settings > Advanced > Code Injection > Header -->");
        for tag in ctx.head_tags() {
            w.line(&tag.to_html());
        }
        if let Some(css) = ctx.stylesheet() {
            write_style_tag(&mut w, &css);
        }
        w.blank();

        w.line("<!-- Page code block: add a Code block to the page and paste below -->");
        ctx.write_body(&mut w);
        if let Some(script) = ctx.script() {
            write_script_tag(&mut w, script);
        }
        if let Some(id) = ctx.analytics_id() {
            w.block(&analytics_html(id));
        }
        w.finish()
    }
}
