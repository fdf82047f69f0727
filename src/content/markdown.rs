//! Markdown rendering with syntax highlighting

use anyhow::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Markdown renderer with syntect-highlighted fenced code blocks
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
}

impl MarkdownRenderer {
    /// Create a renderer with the default theme
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", false)
    }

    /// Create a renderer with a named theme and line-number setting
    pub fn with_options(theme: &str, line_numbers: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            line_numbers,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut in_code_block = false;
        let mut code_lang: Option<String> = None;
        let mut code_buf = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_code_block = true;
                    code_buf.clear();
                    code_lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                }
                Event::Text(text) if in_code_block => {
                    code_buf.push_str(&text);
                }
                Event::End(TagEnd::CodeBlock) => {
                    in_code_block = false;
                    let highlighted = self.highlight_code(&code_buf, code_lang.take().as_deref());
                    events.push(Event::Html(CowStr::from(highlighted)));
                }
                other => events.push(other),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight one fenced code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .unwrap_or_else(|| {
                self.theme_set
                    .themes
                    .values()
                    .next()
                    .expect("syntect ships with built-in themes")
            });

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) if self.line_numbers => {
                let numbered = number_lines(&highlighted);
                format!(r#"<div class="highlight {lang}">{numbered}</div>"#)
            }
            Ok(highlighted) => {
                format!(r#"<div class="highlight {lang}">{highlighted}</div>"#)
            }
            Err(_) => {
                let escaped = html_escape(code);
                format!(r#"<pre><code class="language-{lang}">{escaped}</code></pre>"#)
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap each code line in a numbered span
fn number_lines(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    for (i, line) in code.lines().enumerate() {
        out.push_str(&format!(
            r#"<span class="line" data-line="{}">{}</span>"#,
            i + 1,
            line
        ));
        out.push('\n');
    }
    out
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello\n\nA paragraph.").unwrap();
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<p>A paragraph.</p>"));
    }

    #[test]
    fn test_render_code_block() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```").unwrap();
        assert!(html.contains("highlight"));
        assert!(html.contains("rust"));
    }

    #[test]
    fn test_render_gfm_table() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| a | b |\n|---|---|\n| 1 | 2 |\n").unwrap();
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let renderer = MarkdownRenderer::new();
        let html = renderer
            .render("```nosuchlang\nplain text here\n```")
            .unwrap();
        assert!(html.contains("plain text here"));
    }
}
