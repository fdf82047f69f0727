//! Embedded Tera templates
//!
//! The whole theme is compiled into the binary; there is no on-disk theme
//! directory to resolve or watch.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Templates emit already-rendered HTML fragments; autoescaping
        // would double-escape them
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("index.html", include_str!("theme/index.html")),
            ("blog.html", include_str!("theme/blog.html")),
            ("post.html", include_str!("theme/post.html")),
            ("reviews.html", include_str!("theme/reviews.html")),
            ("review.html", include_str!("theme/review.html")),
            ("projects.html", include_str!("theme/projects.html")),
            ("project.html", include_str!("theme/project.html")),
            ("page.html", include_str!("theme/page.html")),
            ("tag.html", include_str!("theme/tag.html")),
            ("404.html", include_str!("theme/404.html")),
        ])?;

        tera.register_filter("strip_html", strip_html_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: strip HTML tags
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    Ok(tera::Value::String(crate::helpers::strip_html(&s)))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 160,
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!("{}…", truncated.trim_end())))
    }
}

/// A post prepared for template rendering
#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub id: String,
    pub title: String,
    /// Display form of the date ("January 15, 2024" or the raw fallback)
    pub date: String,
    pub path: String,
    pub permalink: String,
    pub description: String,
    pub tags: Vec<String>,
    pub content: String,
}

/// A standalone page prepared for rendering
#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub id: String,
    pub title: String,
    pub path: String,
    pub content: String,
}

/// One tag with the posts carrying it
#[derive(Debug, Clone, Serialize)]
pub struct TagData {
    pub name: String,
    pub slug: String,
    pub path: String,
    pub posts: Vec<PostData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_compile() {
        // add_raw_templates parses every template eagerly, so construction
        // alone catches syntax errors
        TemplateRenderer::new().unwrap();
    }

    #[test]
    fn test_truncate_filter() {
        let mut args = HashMap::new();
        args.insert("length".to_string(), tera::Value::from(5));
        let out = truncate_chars_filter(&tera::Value::from("hello world"), &args).unwrap();
        assert_eq!(out, tera::Value::from("hello…"));
    }

    #[test]
    fn test_strip_html_filter() {
        let out = strip_html_filter(&tera::Value::from("<b>bold</b>"), &HashMap::new()).unwrap();
        assert_eq!(out, tera::Value::from("bold"));
    }
}
