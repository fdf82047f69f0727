//! folio-rs: a static site generator for a personal portfolio and blog
//!
//! Markdown posts with YAML front matter become the blog; reviews and
//! projects are built-in record sets. Everything renders through embedded
//! Tera templates into a plain static tree.

pub mod commands;
pub mod config;
pub mod content;
pub mod data;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod site;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main application handle: configuration plus resolved directories.
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory (markdown sources)
    pub content_dir: std::path::PathBuf,
    /// Static asset directory (copied verbatim)
    pub static_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new Folio instance rooted at a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let static_dir = base_dir.join(&config.static_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            static_dir,
            public_dir,
        })
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str) -> Result<()> {
        commands::new::run(self, title)
    }
}
