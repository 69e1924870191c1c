//! Export configuration and project settings.

use std::fmt;
use std::str::FromStr;

use pagecraft_core::CanvasSize;
use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};

/// Target syntax for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Standalone HTML document.
    #[default]
    Html,
    /// React functional component.
    React,
    /// Vue single-file component.
    Vue,
    /// Angular standalone component.
    Angular,
    /// Wordpress PHP page template.
    Wordpress,
    /// Squarespace header injection plus page code block.
    Squarespace,
}

impl ExportFormat {
    /// Every supported format.
    pub const ALL: [Self; 6] = [
        Self::Html,
        Self::React,
        Self::Vue,
        Self::Angular,
        Self::Wordpress,
        Self::Squarespace,
    ];

    /// Lowercase format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::React => "react",
            Self::Vue => "vue",
            Self::Angular => "angular",
            Self::Wordpress => "wordpress",
            Self::Squarespace => "squarespace",
        }
    }

    /// Conventional file name for the exported document.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Html => "index.html",
            Self::React => "Page.jsx",
            Self::Vue => "Page.vue",
            Self::Angular => "page.component.ts",
            Self::Wordpress => "page-template.php",
            Self::Squarespace => "squarespace-code-block.html",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "react" | "jsx" => Ok(Self::React),
            "vue" => Ok(Self::Vue),
            "angular" => Ok(Self::Angular),
            "wordpress" | "wp" => Ok(Self::Wordpress),
            "squarespace" => Ok(Self::Squarespace),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Options chosen in the export dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    /// Target syntax.
    pub format: ExportFormat,
    /// Emit the stylesheet.
    #[serde(rename = "includeCSS")]
    pub include_css: bool,
    /// Emit the behavior script.
    #[serde(rename = "includeJS")]
    pub include_js: bool,
    /// Strip indentation and newlines.
    pub minify: bool,
    /// Emit SEO meta tags.
    pub seo: bool,
    /// Emit the analytics snippet.
    pub analytics: bool,
    /// Canvas size the page was designed at.
    pub canvas: CanvasSize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Html,
            include_css: true,
            include_js: true,
            minify: false,
            seo: false,
            analytics: false,
            canvas: CanvasSize::default(),
        }
    }
}

impl ExportOptions {
    /// Default options for `format`.
    #[must_use]
    pub fn for_format(format: ExportFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}

/// Search-engine and social metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoSettings {
    /// Page title override.
    pub title: Option<String>,
    /// Meta description.
    pub description: Option<String>,
    /// Comma separated keywords.
    pub keywords: Option<String>,
    /// Author name.
    pub author: Option<String>,
    /// Canonical URL.
    pub canonical_url: Option<String>,
    /// Open Graph title.
    pub og_title: Option<String>,
    /// Open Graph description.
    pub og_description: Option<String>,
    /// Open Graph image URL.
    pub og_image: Option<String>,
    /// Twitter card type (`summary`, `summary_large_image`).
    pub twitter_card: Option<String>,
    /// Twitter `@handle` of the site.
    pub twitter_site: Option<String>,
    /// Favicon URL.
    pub favicon: Option<String>,
}

/// Analytics integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSettings {
    /// Google Analytics measurement id (`G-XXXX`).
    pub tracking_id: Option<String>,
}

/// Project-wide settings that feed the document head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectSettings {
    /// Project title, used for `<title>` and component names.
    pub title: String,
    /// Document language.
    pub language: String,
    /// SEO metadata.
    pub seo: SeoSettings,
    /// Analytics integration.
    pub analytics: AnalyticsSettings,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            title: "Untitled Page".to_string(),
            language: "en".to_string(),
            seo: SeoSettings::default(),
            analytics: AnalyticsSettings::default(),
        }
    }
}

impl ProjectSettings {
    /// Settings with the given title and defaults elsewhere.
    #[must_use]
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    /// Parse settings from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe project settings.
    pub fn from_json(json: &str) -> ExportResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
