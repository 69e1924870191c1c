//! React functional component.

use crate::context::ExportContext;
use crate::markup::escape_template_literal;
use crate::options::ExportFormat;

use super::{lifecycle_script, FormatWriter};

/// Writes a `.jsx` module exporting one functional component.
///
/// CSS is embedded as a template literal rendered into a `<style>` element;
/// SEO, behavior and analytics run in a mount-only `useEffect`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactFormat;

impl FormatWriter for ReactFormat {
    fn format(&self) -> ExportFormat {
        ExportFormat::React
    }

    fn write(&self, ctx: &ExportContext<'_>) -> String {
        let mut w = ctx.writer();
        let effect = lifecycle_script(ctx);
        let css = ctx.stylesheet();

        if effect.is_empty() {
            w.line("import React from 'react';");
        } else {
            w.line("import React, { useEffect } from 'react';");
        }
        w.blank();

        if let Some(css) = &css {
            w.open("const styles = `");
            w.block(&escape_template_literal(css));
            w.close("`;");
            w.blank();
        }

        w.open(&format!("export default function {}() {{", ctx.component_name()));
        if !effect.is_empty() {
            w.open("useEffect(() => {");
            for line in &effect {
                w.line(line);
            }
            w.close("}, []);");
            w.blank();
        }

        w.open("return (");
        w.open("<>");
        if css.is_some() {
            w.line("<style>{styles}</style>");
        }
        ctx.write_body(&mut w);
        w.close("</>");
        w.close(");");
        w.close("}");
        w.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ExportOptions, ProjectSettings};
    use pagecraft_core::{Element, ElementType};

    fn export(options: &ExportOptions) -> String {
        let elements = vec![
            Element::new(ElementType::Divider).with_id("hr"),
            Element::new(ElementType::Text).with_id("t").with_text("Hi"),
        ];
        let settings = ProjectSettings::titled("landing page");
        ReactFormat.write(&ExportContext::new(&elements, &settings, options))
    }

    #[test]
    fn test_component_shape() {
        let out = export(&ExportOptions::for_format(ExportFormat::React));
        assert!(out.starts_with("import React, { useEffect } from 'react';\n"));
        assert!(out.contains("const styles = `\n"));
        assert!(out.contains("export default function LandingPage() {\n"));
        assert!(out.contains("useEffect(() => {\n"));
        assert!(out.contains("<style>{styles}</style>"));
        assert!(out.contains("<div className=\"pc-canvas\">"));
        assert!(out.contains(" />\n"));
        assert!(!out.contains(" class=\""));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn test_no_effect_without_script() {
        let options = ExportOptions {
            include_js: false,
            include_css: false,
            ..ExportOptions::for_format(ExportFormat::React)
        };
        let out = export(&options);
        assert!(out.starts_with("import React from 'react';\n"));
        assert!(!out.contains("useEffect"));
        assert!(!out.contains("styles"));
    }
}
