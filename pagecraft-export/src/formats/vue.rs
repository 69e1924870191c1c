//! Vue single-file component.

use crate::context::ExportContext;
use crate::markup::js_string;
use crate::options::ExportFormat;

use super::{lifecycle_script, FormatWriter};

/// Writes a `.vue` file with `<template>`, `<script>` and `<style scoped>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VueFormat;

impl FormatWriter for VueFormat {
    fn format(&self) -> ExportFormat {
        ExportFormat::Vue
    }

    fn write(&self, ctx: &ExportContext<'_>) -> String {
        let mut w = ctx.writer();

        w.open("<template>");
        ctx.write_body(&mut w);
        w.close("</template>");
        w.blank();

        w.line("<script>");
        w.open("export default {");
        w.line(&format!("name: {},", js_string(&ctx.component_name())));
        let mounted = lifecycle_script(ctx);
        if !mounted.is_empty() {
            w.open("mounted() {");
            for line in &mounted {
                w.line(line);
            }
            w.close("},");
        }
        w.close("};");
        w.line("</script>");

        if let Some(css) = ctx.stylesheet() {
            w.blank();
            w.line("<style scoped>");
            w.block(&css);
            w.line("</style>");
        }
        w.finish()
    }
}
