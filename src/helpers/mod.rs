//! Helper functions shared by the generator and templates

use chrono::NaiveDate;

use crate::config::SiteConfig;

/// Generate a URL with the configured root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog/") // -> "/folio/blog/" when root is "/folio/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Format a raw front-matter date string for display.
///
/// Valid dates render with the configured format (e.g. "January 15, 2024");
/// anything else, including the "Unknown Date" sentinel, passes through
/// unchanged.
pub fn display_date(config: &SiteConfig, raw: &str) -> String {
    match parse_display_date(raw) {
        Some(d) => d.format(&config.date_format).to_string(),
        None => raw.to_string(),
    }
}

fn parse_display_date(raw: &str) -> Option<NaiveDate> {
    crate::content::parse_date_string(raw)
}

/// Escape XML special characters for the Atom feed
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Strip HTML tags from rendered content
pub fn strip_html(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}
