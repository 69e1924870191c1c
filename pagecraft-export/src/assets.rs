//! Stylesheet, behavior script and analytics snippet.

use pagecraft_core::CanvasSize;

use crate::markup::js_string;

/// Client-side behavior shared by every format.
///
/// Handles `data-href` buttons, `data-action` form submission and
/// same-page anchor scrolling. Written to type-check as strict TypeScript
/// and to survive line-joining when minified.
pub const BEHAVIOR_SCRIPT: &str = r"(function () {
  const root = document.querySelector('.pc-canvas');
  if (!root) return;
  root.querySelectorAll('[data-href]').forEach(function (el) {
    el.addEventListener('click', function () {
      const href = el.getAttribute('data-href');
      if (href) window.location.href = href;
    });
  });
  root.querySelectorAll('form').forEach(function (form) {
    const action = form.getAttribute('data-action');
    if (!action) return;
    form.addEventListener('submit', function (event) {
      event.preventDefault();
      fetch(action, { method: 'POST', body: new FormData(form) })
        .then(function () { form.reset(); })
        .catch(function (err) { console.error(err); });
    });
  });
  root.querySelectorAll('a').forEach(function (link) {
    const target = link.getAttribute('href');
    if (!target || target === '#' || target.charAt(0) !== '#') return;
    link.addEventListener('click', function (event) {
      const section = document.querySelector(target);
      if (section) {
        event.preventDefault();
        section.scrollIntoView({ behavior: 'smooth' });
      }
    });
  });
})();";

const GTAG_URL: &str = "https://www.googletagmanager.com/gtag/js?id=";

/// Base stylesheet for a page designed at `canvas` size.
#[must_use]
pub fn stylesheet(canvas: &CanvasSize) -> String {
    format!(
        "*, *::before, *::after {{
  box-sizing: border-box;
}}
body {{
  margin: 0;
}}
.pc-canvas {{
  position: relative;
  width: {width}px;
  min-height: {height}px;
  margin: 0 auto;
}}
.pc-el {{
  margin: 0;
}}
.pc-form-field {{
  display: flex;
  flex-direction: column;
  gap: 4px;
  margin-bottom: 12px;
}}
.pc-card-image {{
  display: block;
  width: 100%;
}}
.pc-nav-links {{
  display: flex;
  gap: 16px;
  list-style: none;
  margin: 0;
  padding: 0;
}}
@media (max-width: {width}px) {{
  .pc-canvas {{
    width: 100%;
    overflow-x: auto;
  }}
}}",
        width = canvas.width,
        height = canvas.height,
    )
}

/// Whether `id` looks like an analytics measurement id.
///
/// Ids end up inside URLs and scripts, so only `[A-Za-z0-9_-]` is accepted.
#[must_use]
pub fn is_valid_tracking_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Analytics as HTML `<script>` tags.
#[must_use]
pub fn analytics_html(tracking_id: &str) -> String {
    format!(
        "<script async src=\"{GTAG_URL}{tracking_id}\"></script>
<script>
  window.dataLayer = window.dataLayer || [];
  function gtag() {{ dataLayer.push(arguments); }}
  gtag('js', new Date());
  gtag('config', '{tracking_id}');
</script>"
    )
}

/// Analytics injected at runtime, for component lifecycle hooks.
#[must_use]
pub fn analytics_script(tracking_id: &str) -> String {
    let inline = format!(
        "window.dataLayer = window.dataLayer || []; function gtag() {{ dataLayer.push(arguments); }} gtag('js', new Date()); gtag('config', '{tracking_id}');"
    );
    format!(
        "var gaLoader = document.createElement('script');
gaLoader.async = true;
gaLoader.src = {url};
document.head.appendChild(gaLoader);
var gaConfig = document.createElement('script');
gaConfig.text = {inline};
document.head.appendChild(gaConfig);",
        url = js_string(&format!("{GTAG_URL}{tracking_id}")),
        inline = js_string(&inline),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_uses_canvas_size() {
        let css = stylesheet(&CanvasSize {
            width: 960.0,
            height: 640.0,
        });
        assert!(css.contains("width: 960px;"));
        assert!(css.contains("min-height: 640px;"));
        assert!(css.contains("@media (max-width: 960px)"));
    }

    #[test]
    fn test_tracking_id_validation() {
        assert!(is_valid_tracking_id("G-ABC123"));
        assert!(!is_valid_tracking_id(""));
        assert!(!is_valid_tracking_id("G-1'); alert(1); ('"));
    }

    #[test]
    fn test_analytics_snippets() {
        let html = analytics_html("G-TEST");
        assert!(html.contains("gtag/js?id=G-TEST"));
        assert!(html.contains("gtag('config', 'G-TEST');"));
        let script = analytics_script("G-TEST");
        assert!(script.contains("gaLoader.src = 'https://www.googletagmanager.com/gtag/js?id=G-TEST';"));
        assert!(script.contains("gtag(\\'config\\', \\'G-TEST\\');"));
    }

    #[test]
    fn test_behavior_script_has_no_line_comments() {
        assert!(!BEHAVIOR_SCRIPT.contains("//"));
        assert!(BEHAVIOR_SCRIPT.contains("data-action"));
    }
}
