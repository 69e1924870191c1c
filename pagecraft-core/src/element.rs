//! Canvas elements - the building blocks of scenes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::geometry::Rect;

/// Unique identifier for an element.
///
/// Identifiers are opaque strings. Freshly created elements get a UUID v4, but
/// any string read from a scene document is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Create a new unique element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The semantic kind of an element, which governs its exported markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementType {
    /// Inline text block.
    Text,
    /// Heading (`h1`-`h6`, level taken from `props.level`).
    Heading,
    /// Paragraph of body copy.
    Paragraph,
    /// Clickable button.
    Button,
    /// Hyperlink.
    Link,
    /// Static image.
    Image,
    /// Embedded video.
    Video,
    /// Generic container holding `props.children`.
    Container,
    /// Page section holding `props.children`.
    Section,
    /// Card with title, description and optional image.
    Card,
    /// Hero banner with title, subtitle and call to action.
    Hero,
    /// Form built from `props.fields`.
    Form,
    /// Single form input.
    Input,
    /// Horizontal rule.
    Divider,
    /// Empty spacing block.
    Spacer,
    /// Bulleted or numbered list from `props.items`.
    List,
    /// Navigation bar from `props.links`.
    Navbar,
    /// Page footer.
    Footer,
    /// Any type string this crate does not know about.
    #[serde(other)]
    Unknown,
}

impl ElementType {
    /// The kebab-case name used in scene documents and CSS class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Button => "button",
            Self::Link => "link",
            Self::Image => "image",
            Self::Video => "video",
            Self::Container => "container",
            Self::Section => "section",
            Self::Card => "card",
            Self::Hero => "hero",
            Self::Form => "form",
            Self::Input => "input",
            Self::Divider => "divider",
            Self::Spacer => "spacer",
            Self::List => "list",
            Self::Navbar => "navbar",
            Self::Footer => "footer",
            Self::Unknown => "unknown",
        }
    }

    /// Whether elements of this type nest `props.children`.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Container | Self::Section)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single style value: either a bare number or a string.
///
/// Anything else (`null`, booleans, objects) is kept as [`StyleValue::Other`]
/// so one odd value never rejects the scene; the exporter skips it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Numeric value (lengths are interpreted as pixels by the exporter).
    Number(f64),
    /// Raw string value, used verbatim.
    Text(String),
    /// Any other JSON value.
    Other(Value),
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Element content: plain text, or a structured map whose meaning depends on
/// the element type (e.g. `title`/`subtitle` for a hero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Plain text.
    Text(String),
    /// Structured fields.
    Fields(Map<String, Value>),
}

impl Default for Content {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl Content {
    /// The plain text, if this is text content.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Fields(_) => None,
        }
    }

    /// A string field of structured content.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Fields(fields) => fields.get(key).and_then(Value::as_str),
        }
    }

    /// The named field, or the plain text when content is not structured.
    #[must_use]
    pub fn field_or_text(&self, key: &str) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Fields(_) => self.field(key),
        }
    }
}

/// Strings and objects map directly, scalars become their text, and
/// anything else (`null`, arrays) is empty content.
fn lenient_content<'de, D>(deserializer: D) -> Result<Content, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Content::Text(text),
        Value::Object(fields) => Content::Fields(fields),
        Value::Number(n) => Content::Text(n.to_string()),
        Value::Bool(b) => Content::Text(b.to_string()),
        Value::Null | Value::Array(_) => Content::default(),
    })
}

/// A positioned, styled scene element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Unique identifier.
    pub id: ElementId,
    /// Semantic kind.
    #[serde(rename = "type")]
    pub kind: ElementType,
    /// X position (pixels from left).
    pub x: f64,
    /// Y position (pixels from top).
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Paint order; higher paints later.
    #[serde(default)]
    pub z_index: i32,
    /// Visual properties keyed by camelCase name.
    #[serde(default)]
    pub styles: BTreeMap<String, StyleValue>,
    /// Text or structured content.
    #[serde(default, deserialize_with = "lenient_content")]
    pub content: Content,
    /// Type-specific configuration.
    #[serde(default)]
    pub props: Map<String, Value>,
}

impl Element {
    /// Create a new element with the given kind at the origin.
    #[must_use]
    pub fn new(kind: ElementType) -> Self {
        Self {
            id: ElementId::new(),
            kind,
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            z_index: 0,
            styles: BTreeMap::new(),
            content: Content::default(),
            props: Map::new(),
        }
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the top-left position.
    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the size. Negative extents are clamped to zero.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self
    }

    /// Set the paint order.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Add a style property.
    #[must_use]
    pub fn with_style(mut self, key: &str, value: impl Into<StyleValue>) -> Self {
        self.styles.insert(key.to_string(), value.into());
        self
    }

    /// Set the content.
    #[must_use]
    pub fn with_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Set plain text content.
    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.with_content(Content::Text(text.to_string()))
    }

    /// Add a prop.
    #[must_use]
    pub fn with_prop(mut self, key: &str, value: Value) -> Self {
        self.props.insert(key.to_string(), value);
        self
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal center.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical center.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Bounding rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Check if a point (in canvas coordinates) is within this element.
    #[must_use]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.bounds().contains_point(x, y)
    }

    /// A string prop.
    #[must_use]
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(Value::as_str)
    }

    /// Nested children of a container.
    ///
    /// Entries in `props.children` that do not parse as elements are skipped.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        let Some(Value::Array(items)) = self.props.get("children") else {
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| match serde_json::from_value(item.clone()) {
                Ok(child) => Some(child),
                Err(e) => {
                    tracing::debug!("Skipping malformed child of {}: {}", self.id, e);
                    None
                }
            })
            .collect()
    }
}
