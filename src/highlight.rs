//! Syntax highlighting for fenced code blocks with syntect.

use anyhow::{Context, Result};
use comrak::adapters::SyntaxHighlighterAdapter;
use std::collections::HashMap;
use std::io::{self, Write};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Base class of every emitted code block.
pub const BASE_CLASS: &str = "hljs";

/// Highlights code blocks into class-annotated HTML.
///
/// Token spans use the `hljs-` prefix so highlight.js style sheets apply.
/// Every output is wrapped in `<pre><code class="hljs ...">`, whichever
/// fallback produced it.
pub struct CodeHighlighter {
    syntax_set: SyntaxSet,
}

impl CodeHighlighter {
    /// Creates highlighter with syntect's bundled syntax definitions.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Renders one code block as a complete `<pre><code>` element.
    ///
    /// With a recognized `language`, the block is highlighted for it and
    /// tagged `hljs language-<lang>`. Otherwise, or when highlighting fails,
    /// the language is detected from the first line; if detection fails too
    /// the code is emitted escaped. Fallback blocks carry only `hljs`.
    ///
    /// # Arguments
    ///
    /// * `code`: Unescaped source text
    /// * `language`: Fence info language token, if any
    ///
    /// # Returns
    ///
    /// HTML for the block
    pub fn highlight_block(&self, code: &str, language: Option<&str>) -> String {
        format!("<pre>{}</code></pre>", self.code_element(code, language))
    }

    /// Opening `<code>` tag followed by the highlighted body, left unclosed.
    ///
    /// The tag and body are produced together since the class depends on
    /// whether highlighting for `language` succeeded.
    fn code_element(&self, code: &str, language: Option<&str>) -> String {
        if let Some(language) = language.filter(|l| !l.is_empty())
            && let Some(syntax) = self.find_syntax(language)
        {
            match self.highlight_with(code, syntax) {
                Ok(html) => {
                    return format!(
                        "<code class=\"{} language-{}\">{}",
                        BASE_CLASS,
                        escape_html(language),
                        html
                    );
                }
                Err(e) => {
                    tracing::warn!(language, error = %e, "highlighting failed, detecting language");
                }
            }
        }

        format!(
            "<code class=\"{}\">{}",
            BASE_CLASS,
            self.highlight_auto(code)
        )
    }

    /// Looks up a syntax by fence token, then by file extension.
    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        self.syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
    }

    /// Highlights with a syntax guessed from the first line, else escapes.
    fn highlight_auto(&self, code: &str) -> String {
        let first_line = code.lines().next().unwrap_or("");
        let Some(syntax) = self.syntax_set.find_syntax_by_first_line(first_line) else {
            return escape_html(code);
        };

        self.highlight_with(code, syntax).unwrap_or_else(|e| {
            tracing::warn!(
                syntax = %syntax.name,
                error = %e,
                "detected syntax failed, emitting plain code"
            );
            escape_html(code)
        })
    }

    fn highlight_with(&self, code: &str, syntax: &SyntaxReference) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lets comrak call the highlighter for each fenced or indented code block
/// while rendering, so raw HTML in the document is never mistaken for code.
///
/// The `<code>` tag is written along with the body by `write_highlighted`;
/// comrak closes both tags.
impl SyntaxHighlighterAdapter for CodeHighlighter {
    fn write_highlighted(
        &self,
        output: &mut dyn Write,
        lang: Option<&str>,
        code: &str,
    ) -> io::Result<()> {
        output.write_all(self.code_element(code, lang).as_bytes())
    }

    fn write_pre_tag(
        &self,
        output: &mut dyn Write,
        _attributes: HashMap<String, String>,
    ) -> io::Result<()> {
        output.write_all(b"<pre>")
    }

    fn write_code_tag(
        &self,
        _output: &mut dyn Write,
        _attributes: HashMap<String, String>,
    ) -> io::Result<()> {
        Ok(())
    }
}

/// Escapes HTML special characters.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
