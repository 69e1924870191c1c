//! Wordpress PHP page template.

use crate::assets::analytics_html;
use crate::context::ExportContext;
use crate::options::ExportFormat;

use super::{write_script_tag, write_style_tag, FormatWriter};

/// Writes a page template usable from a theme directory.
///
/// The `Template Name` header is emitted verbatim even when minifying,
/// since Wordpress reads it line by line.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordpressFormat;

impl FormatWriter for WordpressFormat {
    fn format(&self) -> ExportFormat {
        ExportFormat::Wordpress
    }

    fn write(&self, ctx: &ExportContext<'_>) -> String {
        let mut w = ctx.writer();
        w.raw(&format!(
            "<?php\n/*\n * Template Name: {}\n */\n",
            template_name(ctx.page_title())
        ));
        w.blank();

        let head_tags = ctx.head_tags();
        if !head_tags.is_empty() {
            w.open("add_action('wp_head', function () {");
            w.line("?>");
            for tag in &head_tags {
                w.line(&tag.to_html());
            }
            w.line("<?php");
            w.close("});");
            w.blank();
        }

        w.line("get_header();");
        w.line("?>");
        if let Some(css) = ctx.stylesheet() {
            write_style_tag(&mut w, &css);
        }
        ctx.write_body(&mut w);
        if let Some(script) = ctx.script() {
            write_script_tag(&mut w, script);
        }
        if let Some(id) = ctx.analytics_id() {
            w.block(&analytics_html(id));
        }
        w.line("<?php get_footer(); ?>");
        w.finish()
    }
}

/// Title safe for a single-line PHP block comment.
fn template_name(title: &str) -> String {
    title
        .replace("*/", "")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
