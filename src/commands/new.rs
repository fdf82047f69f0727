//! Create a new blog post

use anyhow::Result;
use std::fs;

use crate::Folio;

/// Create a new post file with a front-matter scaffold
pub fn create_post(folio: &Folio, title: &str, path: Option<&str>) -> Result<()> {
    let now = chrono::Local::now();

    let blog_dir = folio.content_dir.join(&folio.config.blog_dir);
    fs::create_dir_all(&blog_dir)?;

    let filename = if let Some(p) = path {
        format!("{}.md", p.trim_end_matches(".md"))
    } else {
        let slug = slug::slugify(title);
        folio
            .config
            .new_post_name
            .replace(":title", &slug)
            .replace(":year", &now.format("%Y").to_string())
            .replace(":month", &now.format("%m").to_string())
            .replace(":day", &now.format("%d").to_string())
    };

    let file_path = blog_dir.join(&filename);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        r#"---
title: {}
date: {}
description: ''
tags: []
---
"#,
        title,
        now.format("%Y-%m-%d")
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

/// Run the new command
pub fn run(folio: &Folio, title: &str) -> Result<()> {
    create_post(folio, title, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::ContentLoader;

    #[test]
    fn test_create_post_scaffold() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        create_post(&folio, "My New Post", None).unwrap();

        let path = dir.path().join("content/blog/my-new-post.md");
        assert!(path.exists());

        // The scaffold parses back with the title intact
        let loader = ContentLoader::new(&folio);
        let records = loader.load_posts().unwrap();
        assert_eq!(records[0].title, "My New Post");
        assert!(records[0].sort_date.is_some());
    }

    #[test]
    fn test_create_post_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        create_post(&folio, "Twice", None).unwrap();
        assert!(create_post(&folio, "Twice", None).is_err());
    }
}
