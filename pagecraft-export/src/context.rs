//! Everything a format writer needs for one export.

use pagecraft_core::Element;

use crate::assets::{is_valid_tracking_id, stylesheet, BEHAVIOR_SCRIPT};
use crate::head::{seo_tags, HeadTag};
use crate::markup::{write_elements, Dialect};
use crate::options::{ExportOptions, ProjectSettings};
use crate::writer::CodeWriter;

/// Fallback component name when the title yields no identifier.
pub const DEFAULT_COMPONENT_NAME: &str = "GeneratedPage";

/// Elements in paint order plus the settings and options of one export.
#[derive(Debug)]
pub struct ExportContext<'a> {
    elements: Vec<&'a Element>,
    settings: &'a ProjectSettings,
    options: &'a ExportOptions,
}

impl<'a> ExportContext<'a> {
    /// Build a context; elements are stably sorted by z-index.
    #[must_use]
    pub fn new(
        elements: &'a [Element],
        settings: &'a ProjectSettings,
        options: &'a ExportOptions,
    ) -> Self {
        let mut elements: Vec<&Element> = elements.iter().collect();
        elements.sort_by_key(|element| element.z_index);
        Self {
            elements,
            settings,
            options,
        }
    }

    /// Elements in paint order.
    #[must_use]
    pub fn elements(&self) -> &[&'a Element] {
        &self.elements
    }

    /// Project settings.
    #[must_use]
    pub fn settings(&self) -> &ProjectSettings {
        self.settings
    }

    /// Export options.
    #[must_use]
    pub fn options(&self) -> &ExportOptions {
        self.options
    }

    /// Markup dialect of the target format.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        Dialect::for_format(self.options.format)
    }

    /// A fresh writer honoring the minify option.
    #[must_use]
    pub fn writer(&self) -> CodeWriter {
        CodeWriter::new(self.options.minify)
    }

    /// Page title: the SEO title when set, otherwise the project title.
    #[must_use]
    pub fn page_title(&self) -> &str {
        self.settings
            .seo
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.settings.title)
    }

    /// Document language, defaulting to `en`.
    #[must_use]
    pub fn language(&self) -> &str {
        let language = self.settings.language.trim();
        if language.is_empty() {
            "en"
        } else {
            language
        }
    }

    /// The base stylesheet, when CSS is included.
    #[must_use]
    pub fn stylesheet(&self) -> Option<String> {
        self.options
            .include_css
            .then(|| stylesheet(&self.options.canvas))
    }

    /// The behavior script, when JS is included.
    #[must_use]
    pub fn script(&self) -> Option<&'static str> {
        self.options.include_js.then_some(BEHAVIOR_SCRIPT)
    }

    /// SEO head tags, when SEO is enabled.
    #[must_use]
    pub fn head_tags(&self) -> Vec<HeadTag> {
        if self.options.seo {
            seo_tags(&self.settings.seo)
        } else {
            Vec::new()
        }
    }

    /// The analytics tracking id, when analytics is enabled and the id is
    /// present and well formed.
    #[must_use]
    pub fn analytics_id(&self) -> Option<&str> {
        if !self.options.analytics {
            return None;
        }
        let id = self.settings.analytics.tracking_id.as_deref()?.trim();
        if is_valid_tracking_id(id) {
            Some(id)
        } else {
            tracing::debug!("Ignoring malformed analytics tracking id");
            None
        }
    }

    /// Pascal-case component name derived from the project title.
    #[must_use]
    pub fn component_name(&self) -> String {
        component_name(&self.settings.title)
    }

    /// Write the page body: the canvas wrapper and every element.
    pub fn write_body(&self, w: &mut CodeWriter) {
        let class = if self.dialect() == Dialect::Jsx {
            "className"
        } else {
            "class"
        };
        w.open(&format!("<div {class}=\"pc-canvas\">"));
        write_elements(w, self.elements.iter().copied(), self.dialect());
        w.close("</div>");
    }

    /// The page body as a standalone string.
    #[must_use]
    pub fn body(&self) -> String {
        let mut w = self.writer();
        self.write_body(&mut w);
        w.finish()
    }
}

/// Pascal-case identifier from free text.
///
/// Non-alphanumeric characters separate words. Falls back to
/// [`DEFAULT_COMPONENT_NAME`] when nothing usable remains, and prefixes
/// `Page` when the name would start with a digit.
#[must_use]
pub fn component_name(title: &str) -> String {
    let name: String = title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + chars.as_str()
            })
        })
        .collect();

    match name.chars().next() {
        None => DEFAULT_COMPONENT_NAME.to_string(),
        Some(first) if first.is_ascii_digit() => format!("Page{name}"),
        Some(_) => name,
    }
}

/// kebab-case form of a component name (`BakeryHome` -> `bakery-home`).
#[must_use]
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
