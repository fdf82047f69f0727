//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub author: String,
    pub email: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub static_dir: String,
    pub public_dir: String,
    /// Subdirectory of content_dir holding blog posts
    pub blog_dir: String,
    pub tag_dir: String,

    // Writing
    pub new_post_name: String,
    pub date_format: String,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Navigation
    #[serde(default)]
    pub menu: Vec<MenuItem>,

    // Social links
    #[serde(default)]
    pub social: SocialConfig,

    // Atom feed
    #[serde(default)]
    pub feed: FeedConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "folio".to_string(),
            tagline: "a personal portfolio and blog".to_string(),
            description: String::new(),
            author: "Saman Shaiza".to_string(),
            email: String::new(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            static_dir: "static".to_string(),
            public_dir: "public".to_string(),
            blog_dir: "blog".to_string(),
            tag_dir: "tags".to_string(),

            new_post_name: ":title.md".to_string(),
            date_format: "%B %-d, %Y".to_string(),
            highlight: HighlightConfig::default(),

            menu: vec![
                MenuItem::new("home", "/"),
                MenuItem::new("blog", "/blog/"),
                MenuItem::new("reviews", "/reviews/"),
                MenuItem::new("projects", "/projects/"),
                MenuItem::new("about", "/about/"),
                MenuItem::new("contact", "/contact/"),
            ],
            social: SocialConfig::default(),
            feed: FeedConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// A navigation menu entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
}

impl MenuItem {
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
        }
    }
}

/// Syntax highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// Social link configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SocialConfig {
    pub github: String,
    pub twitter: String,
    pub bandcamp: String,
}

/// Atom feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub limit: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { limit: 20 }
    }
}
