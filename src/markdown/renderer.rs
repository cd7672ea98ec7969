//! Gist Markdown to HTML conversion.

use comrak::{Options, Plugins};

use crate::highlight::CodeHighlighter;

/// Renders markdown to unsanitized HTML with GitHub Flavored Markdown extensions.
///
/// Provides GFM extensions including tables, strikethrough, autolinks and
/// task lists, with single newlines rendered as line breaks. Raw HTML in the
/// source is passed through untouched: the output must go through
/// [`crate::Sanitizer`] before display. Code blocks are highlighted with
/// [`CodeHighlighter`].
///
/// The renderer is built once and only read afterwards.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    highlighter: CodeHighlighter,
}

impl MarkdownRenderer<'_> {
    /// Creates renderer matching how GitHub displays Gist Markdown.
    pub fn new() -> Self {
        let mut options = Options::default();

        // GFM
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;

        // Newlines are kept as written; raw HTML is left for the sanitizer
        options.render.hardbreaks = true;
        options.render.unsafe_ = true;

        Self {
            options,
            highlighter: CodeHighlighter::new(),
        }
    }

    /// Converts `markdown` to HTML with highlighted code blocks.
    ///
    /// Code blocks are highlighted as comrak renders them, so raw HTML in
    /// the document passes through untouched. The result is not yet
    /// sanitized.
    pub fn render(&self, markdown: &str) -> String {
        let mut plugins = Plugins::default();
        plugins.render.codefence_syntax_highlighter = Some(&self.highlighter);

        comrak::markdown_to_html_with_plugins(markdown, &self.options, &plugins)
    }
}

impl Default for MarkdownRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> String {
        MarkdownRenderer::new().render(markdown)
    }

    #[test]
    fn test_render_gist_readme() {
        // Arrange
        let markdown = "# Setup notes\n\nRun the **installer** first.";

        // Act
        let html = render(markdown);

        // Assert
        assert!(html.contains("<h1>Setup notes</h1>"), "{}", html);
        assert!(html.contains("<strong>installer</strong>"), "{}", html);
    }

    #[test]
    fn test_single_newline_is_line_break() {
        // Arrange
        let markdown = "roses are red\nviolets are blue";

        // Act
        let html = render(markdown);

        // Assert
        assert!(html.contains("roses are red<br />"), "{}", html);
    }

    #[test]
    fn test_gfm_extensions() {
        // Arrange
        let markdown = concat!(
            "| os | ok |\n|----|----|\n| linux | yes |\n\n",
            "~~old~~ see https://example.com\n\n",
            "- [x] done\n",
        );

        // Act
        let html = render(markdown);

        // Assert
        assert!(html.contains("<th>os</th>"), "Table: {}", html);
        assert!(html.contains("<td>linux</td>"), "Table: {}", html);
        assert!(html.contains("<del>old</del>"), "Strikethrough: {}", html);
        assert!(
            html.contains("<a href=\"https://example.com\">"),
            "Autolink: {}",
            html
        );
        assert!(html.contains("type=\"checkbox\""), "Task list: {}", html);
    }

    #[test]
    fn test_tagged_fence_is_highlighted() {
        // Arrange
        let markdown = "```rust\nlet total: u32 = 42;\n```\n";

        // Act
        let html = render(markdown);

        // Assert
        assert!(
            html.contains("<pre><code class=\"hljs language-rust\">"),
            "{}",
            html
        );
        assert!(html.contains("<span class=\"hljs-"), "{}", html);
        assert!(html.contains("42"));
        assert!(!html.contains("class=\"language-rust\""), "Original block replaced");
    }

    #[test]
    fn test_unknown_or_missing_language_uses_base_class() {
        // Arrange
        let markdown = "```klingon\nqapla\n```\n\n```\njust text\n```\n";

        // Act
        let html = render(markdown);

        // Assert
        assert_eq!(html.matches("<pre><code class=\"hljs\">").count(), 2, "{}", html);
        assert!(html.contains("qapla"));
        assert!(html.contains("just text"));
    }

    #[test]
    fn test_code_entities_survive_highlighting() {
        // Arrange
        let markdown = "```js\nif (a < b && c) { el.innerHTML = \"<b>\"; }\n```\n";

        // Act
        let html = render(markdown);

        // Assert
        assert!(!html.contains("<b>"), "Code must stay escaped: {}", html);
        assert!(html.contains("&lt;"), "{}", html);
        assert!(html.contains("&amp;"), "{}", html);
    }

    #[test]
    fn test_text_between_blocks_is_kept() {
        // Arrange
        let markdown = "```python\nprint(1)\n```\n\nin between\n\n```sh\nls -la\n```\n";

        // Act
        let html = render(markdown);

        // Assert
        assert!(html.contains("language-python"), "{}", html);
        assert!(html.contains("language-sh"), "{}", html);
        assert!(html.contains("<p>in between</p>"), "{}", html);
    }

    #[test]
    fn test_inline_raw_code_tags_do_not_swallow_document() {
        // Arrange
        let markdown = concat!(
            "Intro <pre><code>\n\n",
            "# Heading\n\n",
            "Some **bold** text\n\n",
            "```rust\nlet x = 1;\n```\n",
        );

        // Act
        let html = render(markdown);

        // Assert
        assert!(html.contains("<h1>Heading</h1>"), "{}", html);
        assert!(html.contains("<strong>bold</strong>"), "{}", html);
        assert!(
            html.contains("<pre><code class=\"hljs language-rust\">"),
            "Fence keeps its highlighting: {}",
            html
        );
        assert!(!html.contains("&lt;h1&gt;"), "{}", html);
    }

    #[test]
    fn test_indented_code_block_uses_base_class() {
        // Arrange
        let markdown = "para\n\n    indented <code>\n";

        // Act
        let html = render(markdown);

        // Assert
        assert!(
            html.contains("<pre><code class=\"hljs\">indented &lt;code&gt;"),
            "{}",
            html
        );
    }

    #[test]
    fn test_raw_html_is_left_for_sanitizer() {
        // Arrange
        let markdown = "<script>steal()</script>\n\nafter";

        // Act
        let html = render(markdown);

        // Assert
        assert!(html.contains("<script>steal()</script>"), "{}", html);
        assert!(html.contains("<p>after</p>"));
    }

    #[test]
    fn test_empty_markdown() {
        assert!(MarkdownRenderer::default().render("").is_empty());
    }
}
