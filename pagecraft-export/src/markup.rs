//! Per-element markup templates.
//!
//! Every element renders as one tag tree carrying
//! `class="pc-el pc-<type>"`, `data-element-id` and its positional style.
//! The [`Dialect`] decides attribute spelling, void-tag closing, style
//! binding syntax and escaping, so the same templates serve every format.

use pagecraft_core::{Element, ElementType};
use serde_json::Value;

use crate::options::ExportFormat;
use crate::style::{element_declarations, inline_css, Declaration};
use crate::writer::CodeWriter;

/// Markup syntax family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Plain HTML.
    Html,
    /// React JSX.
    Jsx,
    /// Vue template.
    Vue,
    /// Angular template inside a TypeScript template literal.
    Angular,
}

impl Dialect {
    /// The dialect used by an export format.
    #[must_use]
    pub const fn for_format(format: ExportFormat) -> Self {
        match format {
            ExportFormat::React => Self::Jsx,
            ExportFormat::Vue => Self::Vue,
            ExportFormat::Angular => Self::Angular,
            ExportFormat::Html | ExportFormat::Wordpress | ExportFormat::Squarespace => Self::Html,
        }
    }

    const fn is_framework(self) -> bool {
        !matches!(self, Self::Html)
    }

    fn attr_name(self, name: &str) -> &str {
        if self != Self::Jsx {
            return name;
        }
        match name {
            "class" => "className",
            "for" => "htmlFor",
            "autoplay" => "autoPlay",
            "playsinline" => "playsInline",
            other => other,
        }
    }

    const fn void_end(self) -> &'static str {
        match self {
            Self::Jsx => " />",
            Self::Html | Self::Vue | Self::Angular => ">",
        }
    }

    const fn line_break(self) -> &'static str {
        match self {
            Self::Jsx => "<br />",
            Self::Html | Self::Vue | Self::Angular => "<br>",
        }
    }

    /// Escape text for element content or a quoted attribute value.
    ///
    /// Framework templates also escape braces so user text can never open
    /// an interpolation. Angular additionally escapes the characters that are
    /// special inside a template literal or its control-flow syntax.
    #[must_use]
    pub fn escape(self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for ch in input.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                '{' if self.is_framework() => out.push_str("&#123;"),
                '}' if self.is_framework() => out.push_str("&#125;"),
                '`' if self == Self::Angular => out.push_str("&#96;"),
                '$' if self == Self::Angular => out.push_str("&#36;"),
                '\\' if self == Self::Angular => out.push_str("&#92;"),
                '@' if self == Self::Angular => out.push_str("&#64;"),
                _ => out.push(ch),
            }
        }
        out
    }

    /// Escape a quoted attribute value. Newlines become `&#10;` so a tag
    /// always stays on one line.
    #[must_use]
    pub fn attr_value(self, input: &str) -> String {
        self.escape(&normalize_newlines(input)).replace('\n', "&#10;")
    }

    /// Escaped text with newlines turned into line breaks.
    fn text(self, input: &str) -> String {
        self.escape(&normalize_newlines(input))
            .replace('\n', self.line_break())
    }

    /// The style attribute in this dialect's binding syntax.
    fn style_attr(self, declarations: &[Declaration]) -> String {
        match self {
            Self::Html => format!(" style=\"{}\"", self.attr_value(&inline_css(declarations))),
            Self::Jsx => {
                let body = declarations
                    .iter()
                    .map(|d| format!("{}: {}", d.camel_property(), js_string(&d.value)))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(" style={{{{ {body} }}}}")
            }
            Self::Vue | Self::Angular => {
                let body = declarations
                    .iter()
                    .map(|d| format!("{}: {}", js_string(&d.property), js_string(&d.value)))
                    .collect::<Vec<_>>()
                    .join(", ");
                let object = format!("{{ {body} }}").replace('&', "&amp;").replace('"', "&quot;");
                if self == Self::Vue {
                    format!(" :style=\"{object}\"")
                } else {
                    format!(" [ngStyle]=\"{}\"", escape_template_literal(&object))
                }
            }
        }
    }
}

/// `\r\n` and lone `\r` to `\n`.
fn normalize_newlines(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

/// Single-quoted JavaScript string literal.
///
/// `<` is written as a unicode escape so the literal can sit inside a
/// `<script>` element.
#[must_use]
pub fn js_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    out.push('\'');
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003c"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// Escape text for the body of a JavaScript template literal.
#[must_use]
pub fn escape_template_literal(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// An opening tag under construction.
struct Tag {
    name: String,
    attrs: String,
    dialect: Dialect,
}

impl Tag {
    fn new(name: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            name: name.into(),
            attrs: String::new(),
            dialect,
        }
    }

    /// The element's own tag: classes, id hook and positional style.
    fn for_element(element: &Element, name: impl Into<String>, dialect: Dialect) -> Self {
        let mut tag = Self::new(name, dialect)
            .attr("class", &format!("pc-el pc-{}", element.kind.as_str()))
            .attr("data-element-id", element.id.as_str());
        tag.attrs
            .push_str(&dialect.style_attr(&element_declarations(element)));
        tag
    }

    fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push_str(&format!(
            " {}=\"{}\"",
            self.dialect.attr_name(name),
            self.dialect.attr_value(value)
        ));
        self
    }

    fn opt_attr(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    fn flag(mut self, name: &str, on: bool) -> Self {
        if on {
            self.attrs.push(' ');
            self.attrs.push_str(self.dialect.attr_name(name));
        }
        self
    }

    fn open(&self) -> String {
        format!("<{}{}>", self.name, self.attrs)
    }

    fn close(&self) -> String {
        format!("</{}>", self.name)
    }

    fn void(&self) -> String {
        format!("<{}{}{}", self.name, self.attrs, self.dialect.void_end())
    }

    fn wrap(&self, inner: &str) -> String {
        format!("{}{inner}{}", self.open(), self.close())
    }
}

/// Write elements in the order given.
pub fn write_elements<'e, I>(w: &mut CodeWriter, elements: I, dialect: Dialect)
where
    I: IntoIterator<Item = &'e Element>,
{
    for element in elements {
        write_element(w, element, dialect);
    }
}

/// Write one element and, for containers, its children in z order.
#[allow(clippy::too_many_lines)]
pub fn write_element(w: &mut CodeWriter, element: &Element, dialect: Dialect) {
    let d = dialect;
    match element.kind {
        ElementType::Text | ElementType::Unknown => {
            w.line(&Tag::for_element(element, "div", d).wrap(&d.text(body_text(element))));
        }
        ElementType::Heading => {
            let level = element
                .props
                .get("level")
                .and_then(Value::as_u64)
                .filter(|level| (1..=6).contains(level))
                .unwrap_or(2);
            let tag = Tag::for_element(element, format!("h{level}"), d);
            w.line(&tag.wrap(&d.text(body_text(element))));
        }
        ElementType::Paragraph => {
            w.line(&Tag::for_element(element, "p", d).wrap(&d.text(body_text(element))));
        }
        ElementType::Footer => {
            w.line(&Tag::for_element(element, "footer", d).wrap(&d.text(body_text(element))));
        }
        ElementType::Button => {
            let label = field(element, "label").unwrap_or_else(|| body_text(element));
            let tag = Tag::for_element(element, "button", d)
                .attr("type", "button")
                .opt_attr("data-href", field(element, "href"));
            w.line(&tag.wrap(&d.text(label)));
        }
        ElementType::Link => {
            let target = element.prop_str("target").filter(|t| !t.is_empty());
            let tag = Tag::for_element(element, "a", d)
                .opt_attr("href", field(element, "href"))
                .opt_attr("target", target)
                .opt_attr(
                    "rel",
                    (target == Some("_blank")).then_some("noopener noreferrer"),
                );
            let label = field(element, "label").unwrap_or_else(|| body_text(element));
            w.line(&tag.wrap(&d.text(label)));
        }
        ElementType::Image => {
            let tag = Tag::for_element(element, "img", d)
                .opt_attr("src", image_src(element))
                .opt_attr("alt", field(element, "alt"));
            w.line(&tag.void());
        }
        ElementType::Video => {
            let tag = Tag::for_element(element, "video", d)
                .opt_attr("src", field(element, "src"))
                .flag("controls", flag(element, "controls").unwrap_or(true))
                .flag("autoplay", flag(element, "autoplay").unwrap_or(false))
                .flag("loop", flag(element, "loop").unwrap_or(false))
                .flag("muted", flag(element, "muted").unwrap_or(false))
                .flag("playsinline", flag(element, "autoplay").unwrap_or(false));
            w.line(&tag.wrap(""));
        }
        ElementType::Container | ElementType::Section => {
            let name = if element.kind == ElementType::Section {
                "section"
            } else {
                "div"
            };
            let tag = Tag::for_element(element, name, d);
            let mut children = element.children();
            children.sort_by_key(|child| child.z_index);
            if children.is_empty() {
                w.line(&tag.wrap(""));
            } else {
                w.open(&tag.open());
                write_elements(w, &children, d);
                w.close(&tag.close());
            }
        }
        ElementType::Card => write_card(w, element, d),
        ElementType::Hero => write_hero(w, element, d),
        ElementType::Form => write_form(w, element, d),
        ElementType::Input => {
            let tag = Tag::for_element(element, "input", d)
                .attr(
                    "type",
                    element.prop_str("inputType").unwrap_or("text"),
                )
                .opt_attr("name", field(element, "name"))
                .opt_attr(
                    "placeholder",
                    field(element, "placeholder").or_else(|| non_empty(body_text(element))),
                )
                .flag("required", flag(element, "required").unwrap_or(false));
            w.line(&tag.void());
        }
        ElementType::Divider => {
            w.line(&Tag::for_element(element, "hr", d).void());
        }
        ElementType::Spacer => {
            let tag = Tag::for_element(element, "div", d).attr("aria-hidden", "true");
            w.line(&tag.wrap(""));
        }
        ElementType::List => write_list(w, element, d),
        ElementType::Navbar => write_navbar(w, element, d),
    }
}

fn write_card(w: &mut CodeWriter, element: &Element, d: Dialect) {
    let tag = Tag::for_element(element, "div", d);
    w.open(&tag.open());
    if let Some(src) = image_src(element) {
        let img = Tag::new("img", d)
            .attr("class", "pc-card-image")
            .attr("src", src)
            .opt_attr("alt", field(element, "alt").or_else(|| field(element, "title")));
        w.line(&img.void());
    }
    if let Some(title) = field(element, "title").or_else(|| element.content.as_text().and_then(non_empty)) {
        w.line(&Tag::new("h3", d).attr("class", "pc-card-title").wrap(&d.text(title)));
    }
    if let Some(description) = field(element, "description") {
        w.line(&Tag::new("p", d).attr("class", "pc-card-text").wrap(&d.text(description)));
    }
    if let Some(button) = field(element, "buttonText") {
        let button_tag = Tag::new("button", d)
            .attr("type", "button")
            .attr("class", "pc-card-button")
            .opt_attr("data-href", field(element, "buttonLink"));
        w.line(&button_tag.wrap(&d.text(button)));
    }
    w.close(&tag.close());
}

fn write_hero(w: &mut CodeWriter, element: &Element, d: Dialect) {
    let tag = Tag::for_element(element, "section", d);
    w.open(&tag.open());
    if let Some(title) = field(element, "title").or_else(|| element.content.as_text().and_then(non_empty)) {
        w.line(&Tag::new("h1", d).attr("class", "pc-hero-title").wrap(&d.text(title)));
    }
    if let Some(subtitle) = field(element, "subtitle") {
        w.line(&Tag::new("p", d).attr("class", "pc-hero-subtitle").wrap(&d.text(subtitle)));
    }
    if let Some(cta) = field(element, "ctaText") {
        let link = Tag::new("a", d)
            .attr("class", "pc-hero-cta")
            .attr("href", field(element, "ctaLink").unwrap_or("#"));
        w.line(&link.wrap(&d.text(cta)));
    }
    w.close(&tag.close());
}

fn write_form(w: &mut CodeWriter, element: &Element, d: Dialect) {
    let tag = Tag::for_element(element, "form", d).opt_attr("data-action", field(element, "action"));
    w.open(&tag.open());

    let fields = match element.props.get("fields") {
        Some(Value::Array(fields)) => fields.as_slice(),
        _ => &[],
    };
    for (index, spec) in fields.iter().enumerate() {
        let Some(spec) = spec.as_object() else {
            tracing::debug!("Skipping malformed form field {index} of {}", element.id);
            continue;
        };
        let get = |key: &str| spec.get(key).and_then(Value::as_str).filter(|s| !s.is_empty());
        let name = get("name").map_or_else(|| format!("field-{index}"), str::to_string);
        let input_id = format!("{}-{name}", element.id);
        let kind = get("type").unwrap_or("text");
        let required = spec.get("required").and_then(Value::as_bool).unwrap_or(false);

        w.open(&Tag::new("div", d).attr("class", "pc-form-field").open());
        let label = get("label").unwrap_or(&name);
        w.line(&Tag::new("label", d).attr("for", &input_id).wrap(&d.text(label)));
        let input = (if kind == "textarea" {
            Tag::new("textarea", d)
        } else {
            Tag::new("input", d).attr("type", kind)
        })
        .attr("id", &input_id)
        .attr("name", &name)
        .opt_attr("placeholder", get("placeholder"))
        .flag("required", required);
        if kind == "textarea" {
            w.line(&input.wrap(""));
        } else {
            w.line(&input.void());
        }
        w.close("</div>");
    }

    let submit = field(element, "submitText")
        .or_else(|| element.content.as_text().and_then(non_empty))
        .unwrap_or("Submit");
    w.line(&Tag::new("button", d).attr("type", "submit").wrap(&d.text(submit)));
    w.close(&tag.close());
}

fn write_list(w: &mut CodeWriter, element: &Element, d: Dialect) {
    let name = if flag(element, "ordered").unwrap_or(false) {
        "ol"
    } else {
        "ul"
    };
    let tag = Tag::for_element(element, name, d);
    let items: Vec<&str> = match element.props.get("items") {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => body_text(element)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect(),
    };
    w.open(&tag.open());
    for item in items {
        w.line(&format!("<li>{}</li>", d.text(item)));
    }
    w.close(&tag.close());
}

fn write_navbar(w: &mut CodeWriter, element: &Element, d: Dialect) {
    let tag = Tag::for_element(element, "nav", d);
    w.open(&tag.open());
    if let Some(brand) = field(element, "brand").or_else(|| element.content.as_text().and_then(non_empty)) {
        w.line(&Tag::new("span", d).attr("class", "pc-nav-brand").wrap(&d.text(brand)));
    }
    let links = match element.props.get("links") {
        Some(Value::Array(links)) => links.as_slice(),
        _ => &[],
    };
    if !links.is_empty() {
        w.open(&Tag::new("ul", d).attr("class", "pc-nav-links").open());
        for link in links {
            let label = link.get("label").and_then(Value::as_str).unwrap_or_default();
            let href = link.get("href").and_then(Value::as_str).unwrap_or("#");
            let anchor = Tag::new("a", d).attr("href", href);
            w.line(&format!("<li>{}</li>", anchor.wrap(&d.text(label))));
        }
        w.close("</ul>");
    }
    w.close(&tag.close());
}

/// The element's main text, or empty.
fn body_text(element: &Element) -> &str {
    element.content.field_or_text("text").unwrap_or_default()
}

/// A non-empty string prop, falling back to the structured content field.
fn field<'e>(element: &'e Element, key: &str) -> Option<&'e str> {
    element
        .prop_str(key)
        .or_else(|| element.content.field(key))
        .and_then(non_empty)
}

fn image_src(element: &Element) -> Option<&str> {
    field(element, "src").or_else(|| match element.kind {
        ElementType::Image => element.content.as_text().and_then(non_empty),
        _ => field(element, "image"),
    })
}

fn flag(element: &Element, key: &str) -> Option<bool> {
    element.props.get(key).and_then(Value::as_bool)
}

fn non_empty(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
