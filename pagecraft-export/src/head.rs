//! Document head: SEO and social metadata.

use crate::markup::{js_string, Dialect};
use crate::options::SeoSettings;

/// One tag destined for the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    /// `<meta {attr}="{key}" content="{content}">`.
    Meta {
        /// Keying attribute, `name` or `property`.
        attr: &'static str,
        /// Meta name, e.g. `description` or `og:title`.
        key: &'static str,
        /// Content value.
        content: String,
    },
    /// `<link rel="{rel}" href="{href}">`.
    Link {
        /// Link relation.
        rel: &'static str,
        /// Target URL.
        href: String,
    },
}

impl HeadTag {
    fn meta(attr: &'static str, key: &'static str, content: &str) -> Self {
        Self::Meta {
            attr,
            key,
            content: content.to_string(),
        }
    }

    /// Render as an HTML tag.
    #[must_use]
    pub fn to_html(&self) -> String {
        let d = Dialect::Html;
        match self {
            Self::Meta { attr, key, content } => {
                format!("<meta {attr}=\"{key}\" content=\"{}\">", d.attr_value(content))
            }
            Self::Link { rel, href } => format!("<link rel=\"{rel}\" href=\"{}\">", d.attr_value(href)),
        }
    }
}

/// Tags for every SEO field that is present.
///
/// The title is not included; each format places it itself.
#[must_use]
pub fn seo_tags(seo: &SeoSettings) -> Vec<HeadTag> {
    let metas: [(&'static str, &'static str, &Option<String>); 9] = [
        ("name", "description", &seo.description),
        ("name", "keywords", &seo.keywords),
        ("name", "author", &seo.author),
        ("property", "og:title", &seo.og_title),
        ("property", "og:description", &seo.og_description),
        ("property", "og:image", &seo.og_image),
        ("name", "twitter:card", &seo.twitter_card),
        ("name", "twitter:site", &seo.twitter_site),
        ("name", "twitter:image", &seo.og_image),
    ];

    let mut tags: Vec<HeadTag> = metas
        .into_iter()
        .filter_map(|(attr, key, value)| {
            present(value.as_deref()).map(|content| HeadTag::meta(attr, key, content))
        })
        .collect();

    if let Some(href) = present(seo.canonical_url.as_deref()) {
        tags.push(HeadTag::Link {
            rel: "canonical",
            href: href.to_string(),
        });
    }
    if let Some(href) = present(seo.favicon.as_deref()) {
        tags.push(HeadTag::Link {
            rel: "icon",
            href: href.to_string(),
        });
    }
    tags
}

/// Script lines that add `tags` to `document.head` at runtime.
///
/// The output is valid as both JavaScript and strict TypeScript.
#[must_use]
pub fn head_script(title: Option<&str>, tags: &[HeadTag]) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(title) = title {
        lines.push(format!("document.title = {};", js_string(title)));
    }

    let metas: Vec<String> = tags
        .iter()
        .filter_map(|tag| match tag {
            HeadTag::Meta { attr, key, content } => Some(format!(
                "[{}, {}, {}]",
                js_string(attr),
                js_string(key),
                js_string(content)
            )),
            HeadTag::Link { .. } => None,
        })
        .collect();
    if !metas.is_empty() {
        lines.push(format!("[{}].forEach(function (entry) {{", metas.join(", ")));
        lines.push("  var tag = document.createElement('meta');".to_string());
        lines.push("  tag.setAttribute(entry[0], entry[1]);".to_string());
        lines.push("  tag.setAttribute('content', entry[2]);".to_string());
        lines.push("  document.head.appendChild(tag);".to_string());
        lines.push("});".to_string());
    }

    let links: Vec<String> = tags
        .iter()
        .filter_map(|tag| match tag {
            HeadTag::Link { rel, href } => Some(format!("[{}, {}]", js_string(rel), js_string(href))),
            HeadTag::Meta { .. } => None,
        })
        .collect();
    if !links.is_empty() {
        lines.push(format!("[{}].forEach(function (entry) {{", links.join(", ")));
        lines.push("  var link = document.createElement('link');".to_string());
        lines.push("  link.setAttribute('rel', entry[0]);".to_string());
        lines.push("  link.setAttribute('href', entry[1]);".to_string());
        lines.push("  document.head.appendChild(link);".to_string());
        lines.push("});".to_string());
    }
    lines
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_produce_no_tags() {
        assert!(seo_tags(&SeoSettings::default()).is_empty());
    }

    #[test]
    fn test_only_present_fields_emitted() {
        let seo = SeoSettings {
            description: Some("Fresh bread daily".into()),
            og_image: Some("https://x.test/og.png".into()),
            canonical_url: Some("  ".into()),
            ..SeoSettings::default()
        };
        let html: Vec<String> = seo_tags(&seo).iter().map(HeadTag::to_html).collect();
        assert_eq!(
            html,
            vec![
                "<meta name=\"description\" content=\"Fresh bread daily\">",
                "<meta property=\"og:image\" content=\"https://x.test/og.png\">",
                "<meta name=\"twitter:image\" content=\"https://x.test/og.png\">",
            ]
        );
    }

    #[test]
    fn test_links() {
        let seo = SeoSettings {
            canonical_url: Some("https://x.test/".into()),
            favicon: Some("/favicon.ico".into()),
            ..SeoSettings::default()
        };
        let html: Vec<String> = seo_tags(&seo).iter().map(HeadTag::to_html).collect();
        assert_eq!(
            html,
            vec![
                "<link rel=\"canonical\" href=\"https://x.test/\">",
                "<link rel=\"icon\" href=\"/favicon.ico\">",
            ]
        );
    }

    #[test]
    fn test_content_escaped() {
        let tag = HeadTag::meta("name", "description", "\"quoted\" <b>");
        assert_eq!(
            tag.to_html(),
            "<meta name=\"description\" content=\"&quot;quoted&quot; &lt;b&gt;\">"
        );
    }

    #[test]
    fn test_head_script() {
        let tags = vec![HeadTag::meta("name", "author", "O'Brien")];
        let lines = head_script(Some("Home"), &tags);
        assert_eq!(lines[0], "document.title = 'Home';");
        assert_eq!(lines[1], "[['name', 'author', 'O\\'Brien']].forEach(function (entry) {");
        assert_eq!(lines.len(), 7);
        assert!(head_script(None, &[]).is_empty());
    }
}
