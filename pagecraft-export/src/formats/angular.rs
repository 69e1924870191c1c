//! Angular standalone component.

use crate::context::{kebab_case, ExportContext};
use crate::markup::escape_template_literal;
use crate::options::ExportFormat;

use super::{lifecycle_script, FormatWriter};

/// Writes a `.component.ts` file with an inline template and styles.
///
/// Markup is already escaped for the template literal by the Angular
/// dialect; only the stylesheet needs escaping here.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngularFormat;

impl FormatWriter for AngularFormat {
    fn format(&self) -> ExportFormat {
        ExportFormat::Angular
    }

    fn write(&self, ctx: &ExportContext<'_>) -> String {
        let mut w = ctx.writer();
        let name = ctx.component_name();
        let hook = lifecycle_script(ctx);

        if hook.is_empty() {
            w.line("import { Component } from '@angular/core';");
        } else {
            w.line("import { AfterViewInit, Component } from '@angular/core';");
        }
        w.line("import { NgStyle } from '@angular/common';");
        w.blank();

        w.open("@Component({");
        w.line(&format!("selector: 'app-{}',", kebab_case(&name)));
        w.line("standalone: true,");
        w.line("imports: [NgStyle],");
        w.open("template: `");
        ctx.write_body(&mut w);
        w.close("`,");
        if let Some(css) = ctx.stylesheet() {
            w.open("styles: [`");
            w.block(&escape_template_literal(&css));
            w.close("`],");
        }
        w.close("})");

        if hook.is_empty() {
            w.line(&format!("export class {name}Component {{}}"));
        } else {
            w.open(&format!(
                "export class {name}Component implements AfterViewInit {{"
            ));
            w.open("ngAfterViewInit(): void {");
            for line in &hook {
                w.line(line);
            }
            w.close("}");
            w.close("}");
        }
        w.finish()
    }
}
