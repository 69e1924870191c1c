//! Indentation-aware output buffer.

const INDENT: &str = "  ";

/// Line-oriented writer that either pretty-prints or minifies.
///
/// When minifying, every line is trimmed and emitted without a newline.
#[derive(Debug, Default)]
pub struct CodeWriter {
    buf: String,
    minify: bool,
    depth: usize,
}

impl CodeWriter {
    /// Create a writer.
    #[must_use]
    pub fn new(minify: bool) -> Self {
        Self {
            buf: String::with_capacity(4096),
            minify,
            depth: 0,
        }
    }

    /// Write one line at the current depth.
    pub fn line(&mut self, text: &str) {
        if self.minify {
            self.buf.push_str(text.trim());
            return;
        }
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    /// Write a blank separator line (dropped when minifying).
    pub fn blank(&mut self) {
        self.line("");
    }

    /// Write a line and indent what follows.
    pub fn open(&mut self, text: &str) {
        self.line(text);
        self.depth += 1;
    }

    /// Dedent and write a closing line.
    pub fn close(&mut self, text: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    /// Write pre-formatted multi-line text, re-indented to the current depth.
    pub fn block(&mut self, text: &str) {
        for line in text.lines() {
            self.line(line);
        }
    }

    /// Append text verbatim, bypassing indentation and minification.
    pub fn raw(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Take the output.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_nesting() {
        let mut w = CodeWriter::new(false);
        w.open("<div>");
        w.line("<p>hi</p>");
        w.close("</div>");
        assert_eq!(w.finish(), "<div>\n  <p>hi</p>\n</div>\n");
    }

    #[test]
    fn test_minified_output_has_no_whitespace_between_lines() {
        let mut w = CodeWriter::new(true);
        w.open("<div>");
        w.blank();
        w.block(".a {\n  color: red;\n}");
        w.close("</div>");
        assert_eq!(w.finish(), "<div>.a {color: red;}</div>");
    }

    #[test]
    fn test_block_keeps_relative_indent() {
        let mut w = CodeWriter::new(false);
        w.open("<style>");
        w.block("a {\n  b: c;\n}");
        w.close("</style>");
        assert_eq!(w.finish(), "<style>\n  a {\n    b: c;\n  }\n</style>\n");
    }

    #[test]
    fn test_raw_is_verbatim() {
        let mut w = CodeWriter::new(true);
        w.raw("<?php\n");
        w.line("  x  ");
        assert_eq!(w.finish(), "<?php\nx");
    }
}
