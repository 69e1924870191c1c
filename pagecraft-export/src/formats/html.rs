//! Standalone HTML document.

use crate::assets::analytics_html;
use crate::context::ExportContext;
use crate::markup::Dialect;
use crate::options::ExportFormat;

use super::{write_script_tag, write_style_tag, FormatWriter};

/// Writes a complete `<!DOCTYPE html>` document.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat;

impl FormatWriter for HtmlFormat {
    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    fn write(&self, ctx: &ExportContext<'_>) -> String {
        let d = Dialect::Html;
        let mut w = ctx.writer();

        w.line("<!DOCTYPE html>");
        w.open(&format!("<html lang=\"{}\">", d.attr_value(ctx.language())));
        w.open("<head>");
        w.line("<meta charset=\"UTF-8\">");
        w.line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
        w.line(&format!("<title>{}</title>", d.escape(ctx.page_title())));
        for tag in ctx.head_tags() {
            w.line(&tag.to_html());
        }
        if let Some(css) = ctx.stylesheet() {
            write_style_tag(&mut w, &css);
        }
        if let Some(id) = ctx.analytics_id() {
            w.block(&analytics_html(id));
        }
        w.close("</head>");

        w.open("<body>");
        ctx.write_body(&mut w);
        if let Some(script) = ctx.script() {
            write_script_tag(&mut w, script);
        }
        w.close("</body>");
        w.close("</html>");
        w.finish()
    }
}
