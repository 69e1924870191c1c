//! Mapping from editor style keys to CSS declarations.
//!
//! Only keys present on the element are emitted, in key order. Any
//! camelCase key maps to its kebab-case property; keys that cannot name a
//! CSS property are skipped. Nothing is defaulted here.

use std::collections::BTreeMap;

use pagecraft_core::{Element, StyleValue};

/// Keys whose bare numbers are written without a `px` unit.
const UNITLESS_PROPERTIES: &[&str] = &[
    "animationIterationCount",
    "aspectRatio",
    "columnCount",
    "flex",
    "flexGrow",
    "flexShrink",
    "fontWeight",
    "gridColumn",
    "gridRow",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
];

/// One CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// CSS property name (kebab-case).
    pub property: String,
    /// Rendered value.
    pub value: String,
}

impl Declaration {
    fn new(property: impl Into<String>, value: String) -> Self {
        Self {
            property: property.into(),
            value,
        }
    }

    /// Property name in camelCase, as React style objects expect.
    #[must_use]
    pub fn camel_property(&self) -> String {
        kebab_to_camel(&self.property)
    }
}

/// Absolute positioning for an element: left, top, width, height, z-index.
#[must_use]
pub fn position_declarations(element: &Element) -> Vec<Declaration> {
    vec![
        Declaration::new("position", "absolute".to_string()),
        Declaration::new("left", px(element.x)),
        Declaration::new("top", px(element.y)),
        Declaration::new("width", px(element.width)),
        Declaration::new("height", px(element.height)),
        Declaration::new("z-index", element.z_index.to_string()),
    ]
}

/// Declarations for every present key in `styles` that names a property.
#[must_use]
pub fn style_declarations(styles: &BTreeMap<String, StyleValue>) -> Vec<Declaration> {
    styles
        .iter()
        .filter_map(|(key, value)| {
            let Some(property) = css_property(key) else {
                tracing::trace!("Skipping style key {key}");
                return None;
            };
            let unitless = UNITLESS_PROPERTIES.contains(&key.as_str());
            Some(Declaration::new(property, render_value(value, unitless)?))
        })
        .collect()
}

/// Positioning followed by the element's own styles.
#[must_use]
pub fn element_declarations(element: &Element) -> Vec<Declaration> {
    let mut declarations = position_declarations(element);
    declarations.extend(style_declarations(&element.styles));
    declarations
}

/// `prop: value; prop: value` for a `style` attribute.
#[must_use]
pub fn inline_css(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|d| format!("{}: {}", d.property, d.value))
        .collect::<Vec<_>>()
        .join("; ")
}

fn render_value(value: &StyleValue, unitless: bool) -> Option<String> {
    match value {
        StyleValue::Number(n) if !n.is_finite() => None,
        StyleValue::Number(n) if unitless => Some(n.to_string()),
        StyleValue::Number(n) => Some(px(*n)),
        StyleValue::Text(text) => {
            let text = text.trim();
            if text.is_empty() || !is_contained_value(text) {
                None
            } else {
                Some(text.to_string())
            }
        }
        StyleValue::Other(_) => None,
    }
}

/// `marginTop` to `margin-top`. Vendor keys (`WebkitTransform`,
/// `msTransform`) gain the leading dash.
fn css_property(key: &str) -> Option<String> {
    if key.is_empty() || !key.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return None;
    }
    let mut out = String::with_capacity(key.len() + 4);
    if key.starts_with("ms") && key[2..].starts_with(|ch: char| ch.is_ascii_uppercase()) {
        out.push('-');
    }
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    Some(out)
}

/// A value must not be able to end its declaration or open a rule.
///
/// `;`, `{` and `}` are allowed inside parentheses or quotes, as in
/// `url(data:image/png;base64,...)`, provided every group is closed.
fn is_contained_value(text: &str) -> bool {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for ch in text.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, ch) {
            (_, '\\') => escaped = true,
            (Some(open), _) if ch == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '(') => depth += 1,
            (None, ')') => match depth.checked_sub(1) {
                Some(next) => depth = next,
                None => return false,
            },
            (None, ';' | '{' | '}') if depth == 0 => return false,
            (None, _) => {}
        }
    }
    depth == 0 && quote.is_none() && !escaped
}

#[allow(clippy::float_cmp)]
fn px(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        format!("{n}px")
    }
}

fn kebab_to_camel(name: &str) -> String {
    // React spells the ms prefix in lower case.
    let name = name
        .strip_prefix('-')
        .filter(|rest| rest.starts_with("ms-"))
        .unwrap_or(name);
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for ch in name.chars() {
        if ch == '-' {
            upper = true;
        } else if upper {
            out.push(ch.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_core::ElementType;

    #[test]
    fn test_only_present_keys_emitted() {
        let element = Element::new(ElementType::Text).with_style("color", "#333");
        let decls = style_declarations(&element.styles);
        assert_eq!(decls, vec![Declaration::new("color", "#333".to_string())]);
    }

    #[test]
    fn test_number_units() {
        let element = Element::new(ElementType::Text)
            .with_style("fontSize", 18.0)
            .with_style("opacity", 0.5)
            .with_style("fontWeight", 700.0)
            .with_style("borderRadius", 0.0);
        let css = inline_css(&style_declarations(&element.styles));
        assert_eq!(
            css,
            "border-radius: 0; font-size: 18px; font-weight: 700; opacity: 0.5"
        );
    }

    #[test]
    fn test_unknown_and_unsafe_values_skipped() {
        let element = Element::new(ElementType::Text)
            .with_style("font-size", "12px")
            .with_style("__proto__", "x")
            .with_style("color", "red; background: url(x)")
            .with_style("background", "url(a;b")
            .with_style("fontFamily", "\"Open Sans}\"; x: y")
            .with_style("margin", "");
        assert!(style_declarations(&element.styles).is_empty());
    }

    #[test]
    fn test_any_camel_case_key_is_mapped() {
        let element = Element::new(ElementType::Text)
            .with_style("marginTop", 12.0)
            .with_style("minHeight", 40.0)
            .with_style("zIndex", 3.0)
            .with_style("textShadow", "0 1px 2px #000")
            .with_style("WebkitLineClamp", "2")
            .with_style("msTransform", "none");
        let css = inline_css(&style_declarations(&element.styles));
        assert_eq!(
            css,
            "-webkit-line-clamp: 2; margin-top: 12px; min-height: 40px; -ms-transform: none; text-shadow: 0 1px 2px #000; z-index: 3"
        );
    }

    #[test]
    fn test_separators_inside_groups_are_kept() {
        let element = Element::new(ElementType::Text)
            .with_style("backgroundImage", "url(data:image/png;base64,AAAA)")
            .with_style("fontFamily", "\"A;B\", serif");
        let decls = style_declarations(&element.styles);
        assert_eq!(
            decls,
            vec![
                Declaration::new("background-image", "url(data:image/png;base64,AAAA)".to_string()),
                Declaration::new("font-family", "\"A;B\", serif".to_string()),
            ]
        );
    }

    #[test]
    fn test_position_declarations() {
        let element = Element::new(ElementType::Text)
            .with_position(10.5, 0.0)
            .with_size(200.0, 40.0)
            .with_z_index(3);
        assert_eq!(
            inline_css(&position_declarations(&element)),
            "position: absolute; left: 10.5px; top: 0; width: 200px; height: 40px; z-index: 3"
        );
    }

    #[test]
    fn test_camel_property() {
        let decl = Declaration::new("background-color", "red".to_string());
        assert_eq!(decl.camel_property(), "backgroundColor");
        assert_eq!(Declaration::new("z-index", "1".to_string()).camel_property(), "zIndex");
        let vendor = |p: &str| Declaration::new(p, String::new()).camel_property();
        assert_eq!(vendor("-webkit-line-clamp"), "WebkitLineClamp");
        assert_eq!(vendor("-ms-transform"), "msTransform");
    }
}
