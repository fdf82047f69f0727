//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("content/blog"))?;
    fs::create_dir_all(target_dir.join("static"))?;

    let config_content = r#"# Site
title: folio
tagline: a personal portfolio and blog
description: ''
author: Your Name
email: ''
language: en

# URL
url: http://example.com
root: /

# Directory
content_dir: content
static_dir: static
public_dir: public
blog_dir: blog
tag_dir: tags

# Writing
new_post_name: :title.md
date_format: '%B %-d, %Y'
highlight:
  theme: base16-ocean.dark
  line_number: false

# Social
social:
  github: ''
  twitter: ''
  bandcamp: ''

# Atom feed
feed:
  limit: 20
"#;

    let config_path = target_dir.join("_config.yml");
    if !config_path.exists() {
        fs::write(&config_path, config_content)?;
    }

    let sample_post = r#"---
title: Hello World
date: 2024-01-01
description: The obligatory first post
tags:
  - meta
---

Welcome! This post lives in `content/blog`. Edit it, add more markdown
files next to it, and run `folio-rs generate`.
"#;

    let post_path = target_dir.join("content/blog/hello-world.md");
    if !post_path.exists() {
        fs::write(&post_path, sample_post)?;
    }

    let about = "---\ntitle: About\n---\n\nWrite something about yourself here.\n";
    let about_path = target_dir.join("content/about.md");
    if !about_path.exists() {
        fs::write(&about_path, about)?;
    }

    let contact = "---\ntitle: Contact\n---\n\nHow to reach you.\n";
    let contact_path = target_dir.join("content/contact.md");
    if !contact_path.exists() {
        fs::write(&contact_path, contact)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::ContentLoader;
    use crate::Folio;

    #[test]
    fn test_init_then_load() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join("_config.yml").exists());
        assert!(dir.path().join("content/blog/hello-world.md").exists());

        // A freshly initialized site loads cleanly
        let folio = Folio::new(dir.path()).unwrap();
        let loader = ContentLoader::new(&folio);
        let records = loader.load_posts().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "hello-world");
        assert_eq!(records[0].title, "Hello World");

        let pages = loader.load_pages().unwrap();
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn test_init_is_non_destructive() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        std::fs::write(dir.path().join("_config.yml"), "title: kept\n").unwrap();
        init_site(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("_config.yml")).unwrap();
        assert_eq!(content, "title: kept\n");
    }
}
