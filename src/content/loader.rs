//! Content loader - builds records from the content directory
//!
//! One synchronous pass at generation time: every markdown file under the
//! blog directory becomes a [`Record`], sorted newest-first. A malformed
//! front-matter block aborts the whole pass.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Page, Record};
use crate::Folio;

/// Default title for posts without one
const DEFAULT_TITLE: &str = "Untitled";
/// Sentinel date string for posts without one
const DEFAULT_DATE: &str = "Unknown Date";

/// Loads posts and pages from the content directory
pub struct ContentLoader<'a> {
    folio: &'a Folio,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        let renderer = MarkdownRenderer::with_options(
            &folio.config.highlight.theme,
            folio.config.highlight.line_number,
        );
        Self { folio, renderer }
    }

    /// Load all blog posts, sorted descending by date.
    ///
    /// Records with an unparseable date sort after every dated record. The
    /// sort is stable, so same-date posts keep enumeration order. When two
    /// files derive the same id the later one wins and the collision is
    /// logged.
    pub fn load_posts(&self) -> Result<Vec<Record>> {
        let blog_dir = self.folio.content_dir.join(&self.folio.config.blog_dir);
        if !blog_dir.exists() {
            return Ok(Vec::new());
        }

        let mut records: Vec<Record> = Vec::new();
        let mut by_id: HashMap<String, usize> = HashMap::new();

        for entry in WalkDir::new(&blog_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let record = self.load_post(path)?;

            match by_id.get(&record.id) {
                Some(&pos) => {
                    // Same id from two files: last write wins
                    tracing::warn!(
                        "Duplicate id {:?}: {:?} replaces {:?}",
                        record.id,
                        record.source,
                        records[pos].source
                    );
                    records[pos] = record;
                }
                None => {
                    by_id.insert(record.id.clone(), records.len());
                    records.push(record);
                }
            }
        }

        records.sort_by(|a, b| b.sort_date.cmp(&a.sort_date));

        Ok(records)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Record> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let (fm, body) = FrontMatter::parse(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        let sort_date = fm.parse_date();

        let title = fm.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let date = fm.date.unwrap_or_else(|| DEFAULT_DATE.to_string());
        let description = fm.description.unwrap_or_default();

        let content = self.renderer.render(body)?;

        let root = self.folio.config.root.trim_end_matches('/');
        let url_path = format!("{}/blog/{}/", root, id);
        let permalink = format!(
            "{}{}",
            self.folio.config.url.trim_end_matches('/'),
            url_path
        );

        Ok(Record {
            id,
            title,
            date,
            sort_date,
            description,
            tags: fm.tags,
            body: body.to_string(),
            content,
            source: path.to_path_buf(),
            path: url_path,
            permalink,
        })
    }

    /// Load standalone pages (top-level markdown files in the content dir)
    pub fn load_pages(&self) -> Result<Vec<Page>> {
        if !self.folio.content_dir.exists() {
            return Ok(Vec::new());
        }

        let mut pages = Vec::new();

        for entry in WalkDir::new(&self.folio.content_dir)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                pages.push(self.load_page(path)?);
            }
        }

        Ok(pages)
    }

    /// Load a single page from a file
    fn load_page(&self, path: &Path) -> Result<Page> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let (fm, body) = FrontMatter::parse(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        // Pages fall back to their filename as title
        let title = fm.title.unwrap_or_else(|| id.clone());

        let content = self.renderer.render(body)?;

        let root = self.folio.config.root.trim_end_matches('/');
        let url_path = format!("{}/{}/", root, id);

        Ok(Page {
            id,
            title,
            content,
            source: path.to_path_buf(),
            path: url_path,
        })
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_with_posts(posts: &[(&str, &str)]) -> (tempfile::TempDir, Folio) {
        let dir = tempfile::tempdir().unwrap();
        let blog = dir.path().join("content/blog");
        fs::create_dir_all(&blog).unwrap();
        for (name, body) in posts {
            fs::write(blog.join(name), body).unwrap();
        }
        let folio = Folio::new(dir.path()).unwrap();
        (dir, folio)
    }

    #[test]
    fn test_sorted_descending_by_date() {
        let (_dir, folio) = site_with_posts(&[
            (
                "older.md",
                "---\ntitle: Older\ndate: 2024-01-15\n---\nbody\n",
            ),
            (
                "newer.md",
                "---\ntitle: Newer\ndate: 2024-04-15\n---\nbody\n",
            ),
        ]);

        let loader = ContentLoader::new(&folio);
        let records = loader.load_posts().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "newer");
        assert_eq!(records[1].id, "older");
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let (_dir, folio) = site_with_posts(&[("bare.md", "No header at all.\n")]);

        let loader = ContentLoader::new(&folio);
        let records = loader.load_posts().unwrap();
        let r = &records[0];
        assert_eq!(r.id, "bare");
        assert_eq!(r.title, "Untitled");
        assert_eq!(r.date, "Unknown Date");
        assert_eq!(r.description, "");
        assert!(r.tags.is_empty());
        assert_eq!(r.sort_date, None);
        assert!(r.body.starts_with("No header at all."));
    }

    #[test]
    fn test_undated_records_sort_last() {
        let (_dir, folio) = site_with_posts(&[
            ("undated.md", "---\ntitle: Undated\n---\nbody\n"),
            (
                "dated.md",
                "---\ntitle: Dated\ndate: 2023-06-01\n---\nbody\n",
            ),
            ("badly-dated.md", "---\ndate: not a date\n---\nbody\n"),
        ]);

        let loader = ContentLoader::new(&folio);
        let records = loader.load_posts().unwrap();
        assert_eq!(records[0].id, "dated");
        // Both undated records follow every dated one, in enumeration order
        assert_eq!(records[1].id, "badly-dated");
        assert_eq!(records[2].id, "undated");
    }

    #[test]
    fn test_malformed_header_fails_whole_pass() {
        let (_dir, folio) = site_with_posts(&[
            ("fine.md", "---\ntitle: Fine\ndate: 2024-01-01\n---\nbody\n"),
            ("broken.md", "---\ntitle: [unterminated\n---\nbody\n"),
        ]);

        let loader = ContentLoader::new(&folio);
        let err = loader.load_posts().unwrap_err();
        assert!(err.to_string().contains("broken.md"));
    }

    #[test]
    fn test_idempotent_load() {
        let (_dir, folio) = site_with_posts(&[
            ("a.md", "---\ntitle: A\ndate: 2024-02-02\ntags: [x]\n---\nbody a\n"),
            ("b.md", "---\ntitle: B\ndate: 2024-03-03\n---\nbody b\n"),
        ]);

        let loader = ContentLoader::new(&folio);
        let first = loader.load_posts().unwrap();
        let second = loader.load_posts().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_id_last_write_wins() {
        // post.markdown and post.md derive the same id; enumeration is
        // sorted by file name, so post.md is seen last and wins
        let (_dir, folio) = site_with_posts(&[
            (
                "post.markdown",
                "---\ntitle: First\ndate: 2024-01-01\n---\nbody\n",
            ),
            (
                "post.md",
                "---\ntitle: Second\ndate: 2024-01-02\n---\nbody\n",
            ),
        ]);

        let loader = ContentLoader::new(&folio);
        let records = loader.load_posts().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Second");
    }

    #[test]
    fn test_load_pages() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(content.join("blog")).unwrap();
        fs::write(content.join("about.md"), "---\ntitle: About\n---\nHi.\n").unwrap();
        fs::write(content.join("contact.md"), "Reach me by email.\n").unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let loader = ContentLoader::new(&folio);
        let pages = loader.load_pages().unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].id, "about");
        assert_eq!(pages[0].title, "About");
        assert_eq!(pages[0].path, "/about/");
        // Filename fallback title
        assert_eq!(pages[1].title, "contact");
    }
}
