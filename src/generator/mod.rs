//! Generator module - writes the static site tree
//!
//! One page per route: home, blog index, one page per post, reviews,
//! projects, standalone pages, tag pages, the 404 page, the Atom feed, and
//! a JSON search index.

use anyhow::Result;
use chrono::Datelike;
use std::collections::HashMap;
use std::fs;
use tera::Context;
use walkdir::WalkDir;

use crate::content::{Page, Record};
use crate::data::{projects, reviews, Project, Review};
use crate::helpers::{display_date, escape_xml, strip_html, url_for};
use crate::site::review_section;
use crate::templates::{PageData, PostData, TagData, TemplateRenderer};
use crate::Folio;

/// Default stylesheet written alongside the generated pages
const SITE_CSS: &str = include_str!("../templates/theme/site.css");

/// Static site generator
pub struct Generator {
    folio: Folio,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(folio: &Folio) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        Ok(Self {
            folio: folio.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, records: &[Record], pages: &[Page]) -> Result<()> {
        fs::create_dir_all(&self.folio.public_dir)?;

        self.write_stylesheet()?;
        self.copy_static_assets()?;

        let posts: Vec<PostData> = records.iter().map(|r| self.post_data(r)).collect();
        let reviews = reviews();
        let projects = projects();

        self.generate_home(&posts)?;
        self.generate_blog_index(&posts)?;
        self.generate_post_pages(&posts)?;
        self.generate_reviews(&reviews)?;
        self.generate_projects(&projects)?;
        self.generate_pages(pages)?;
        self.generate_tag_pages(&posts)?;
        self.generate_not_found()?;
        self.generate_atom_feed(records)?;
        self.generate_search_index(records)?;

        Ok(())
    }

    /// Base template context shared by every page
    fn base_context(&self, current_path: &str) -> Context {
        let mut context = Context::new();
        context.insert("config", &self.folio.config);
        context.insert("current_path", current_path);
        context.insert(
            "current_year",
            &chrono::Utc::now().year().to_string(),
        );
        context
    }

    /// Prepare a record for template rendering
    fn post_data(&self, record: &Record) -> PostData {
        PostData {
            id: record.id.clone(),
            title: record.title.clone(),
            date: display_date(&self.folio.config, &record.date),
            path: record.path.clone(),
            permalink: record.permalink.clone(),
            description: record.description.clone(),
            tags: record.tags.clone(),
            content: record.content.clone(),
        }
    }

    /// Render one template and write it to `<route>/index.html`
    fn write_page(&self, template: &str, context: &Context, route: &str) -> Result<()> {
        let html = self.renderer.render(template, context)?;
        let clean = route.trim_matches('/');
        let output_path = if clean.is_empty() {
            self.folio.public_dir.join("index.html")
        } else {
            self.folio.public_dir.join(clean).join("index.html")
        };
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    fn generate_home(&self, posts: &[PostData]) -> Result<()> {
        let mut context = self.base_context("/");
        let recent: Vec<&PostData> = posts.iter().take(5).collect();
        context.insert("recent_posts", &recent);
        self.write_page("index.html", &context, "/")
    }

    fn generate_blog_index(&self, posts: &[PostData]) -> Result<()> {
        let mut context = self.base_context("/blog/");
        context.insert("posts", posts);
        self.write_page("blog.html", &context, "blog")
    }

    fn generate_post_pages(&self, posts: &[PostData]) -> Result<()> {
        for post in posts {
            let mut context = self.base_context(&post.path);
            context.insert("post", post);
            self.write_page("post.html", &context, &format!("blog/{}", post.id))?;
        }
        tracing::info!("Generated {} post pages", posts.len());
        Ok(())
    }

    fn generate_reviews(&self, reviews: &[Review]) -> Result<()> {
        let mut context = self.base_context("/reviews/");
        context.insert("reviews", reviews);
        self.write_page("reviews.html", &context, "reviews")?;

        for review in reviews {
            let mut context = self.base_context(&format!("/reviews/{}/", review.id));
            context.insert("review", review);
            // Bespoke long-form section, if one is registered for this id
            let extra = review_section(review.id)
                .map(|render| render(review))
                .unwrap_or_default();
            context.insert("extra_section", &extra);
            self.write_page("review.html", &context, &format!("reviews/{}", review.id))?;
        }
        Ok(())
    }

    fn generate_projects(&self, projects: &[Project]) -> Result<()> {
        let mut context = self.base_context("/projects/");
        context.insert("projects", projects);
        self.write_page("projects.html", &context, "projects")?;

        for project in projects {
            let mut context = self.base_context(&format!("/project/{}/", project.id));
            context.insert("project", project);
            self.write_page("project.html", &context, &format!("project/{}", project.id))?;
        }
        Ok(())
    }

    fn generate_pages(&self, pages: &[Page]) -> Result<()> {
        for page in pages {
            let data = PageData {
                id: page.id.clone(),
                title: page.title.clone(),
                path: page.path.clone(),
                content: page.content.clone(),
            };
            let mut context = self.base_context(&page.path);
            context.insert("page", &data);
            self.write_page("page.html", &context, &page.id)?;
        }
        Ok(())
    }

    fn generate_tag_pages(&self, posts: &[PostData]) -> Result<()> {
        let mut tags_map: HashMap<String, Vec<PostData>> = HashMap::new();

        for post in posts {
            for tag in &post.tags {
                if tag.trim().is_empty() {
                    continue;
                }
                let mut entry = post.clone();
                entry.content = String::new();
                tags_map.entry(tag.clone()).or_default().push(entry);
            }
        }

        let tag_dir = self.folio.config.tag_dir.clone();
        for (name, posts) in &tags_map {
            let tag_slug = slug::slugify(name);
            if tag_slug.is_empty() {
                continue;
            }

            let route = format!("{}/{}", tag_dir, tag_slug);
            let tag = TagData {
                name: name.clone(),
                slug: tag_slug.clone(),
                path: url_for(&self.folio.config, &format!("{route}/")),
                posts: posts.clone(),
            };

            let mut context = self.base_context(&tag.path);
            context.insert("tag", &tag);
            self.write_page("tag.html", &context, &route)?;
        }

        tracing::info!("Generated {} tag pages", tags_map.len());
        Ok(())
    }

    /// The not-found page; the dev server (and most static hosts) serve it
    /// for any unmatched path
    fn generate_not_found(&self) -> Result<()> {
        let context = self.base_context("");
        let html = self.renderer.render("404.html", &context)?;
        fs::write(self.folio.public_dir.join("404.html"), html)?;
        Ok(())
    }

    /// Generate the Atom feed
    fn generate_atom_feed(&self, records: &[Record]) -> Result<()> {
        let config = &self.folio.config;
        let site_url = config.url.trim_end_matches('/');

        let mut feed = String::new();
        feed.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        feed.push_str("<feed xmlns=\"http://www.w3.org/2005/Atom\">\n");
        feed.push_str(&format!("  <title>{}</title>\n", escape_xml(&config.title)));
        feed.push_str(&format!(
            "  <link href=\"{}/atom.xml\" rel=\"self\"/>\n",
            site_url
        ));
        feed.push_str(&format!("  <link href=\"{}/\"/>\n", site_url));
        feed.push_str(&format!(
            "  <updated>{}</updated>\n",
            chrono::Utc::now().to_rfc3339()
        ));
        feed.push_str(&format!("  <id>{}/</id>\n", site_url));
        feed.push_str(&format!(
            "  <author><name>{}</name></author>\n",
            escape_xml(&config.author)
        ));

        for record in records.iter().take(config.feed.limit) {
            let link = &record.permalink;
            feed.push_str("  <entry>\n");
            feed.push_str(&format!(
                "    <title>{}</title>\n",
                escape_xml(&record.title)
            ));
            feed.push_str(&format!("    <link href=\"{}\"/>\n", link));
            feed.push_str(&format!("    <id>{}</id>\n", link));
            if let Some(date) = record.sort_date {
                feed.push_str(&format!(
                    "    <published>{}T00:00:00Z</published>\n",
                    date.format("%Y-%m-%d")
                ));
            }
            feed.push_str(&format!(
                "    <summary>{}</summary>\n",
                escape_xml(&record.description)
            ));
            feed.push_str(&format!(
                "    <content type=\"html\"><![CDATA[{}]]></content>\n",
                record.content
            ));
            feed.push_str("  </entry>\n");
        }

        feed.push_str("</feed>\n");

        fs::write(self.folio.public_dir.join("atom.xml"), feed)?;
        tracing::info!("Generated atom.xml");
        Ok(())
    }

    /// Generate the search index (JSON)
    fn generate_search_index(&self, records: &[Record]) -> Result<()> {
        let search_data: Vec<serde_json::Value> = records
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.id,
                    "title": r.title,
                    "url": r.path,
                    "date": r.date,
                    "tags": r.tags,
                    "content": strip_html(&r.content),
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&search_data)?;
        fs::write(self.folio.public_dir.join("search.json"), json)?;
        tracing::info!("Generated search.json");
        Ok(())
    }

    /// Write the embedded stylesheet
    fn write_stylesheet(&self) -> Result<()> {
        let css_dir = self.folio.public_dir.join("css");
        fs::create_dir_all(&css_dir)?;
        fs::write(css_dir.join("site.css"), SITE_CSS)?;
        Ok(())
    }

    /// Copy everything under static/ into the output tree verbatim
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.folio.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() {
                let relative = path.strip_prefix(static_dir)?;
                let dest = self.folio.public_dir.join(relative);
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(path, &dest)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::ContentLoader;
    use std::fs;

    fn generated_site() -> (tempfile::TempDir, Folio) {
        let dir = tempfile::tempdir().unwrap();
        let blog = dir.path().join("content/blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(
            blog.join("first-post.md"),
            "---\ntitle: First Post\ndate: 2024-01-15\ndescription: hello\ntags: [rust]\n---\nSome *body* text.\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("content/about.md"),
            "---\ntitle: About\n---\nAbout me.\n",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let loader = ContentLoader::new(&folio);
        let records = loader.load_posts().unwrap();
        let pages = loader.load_pages().unwrap();
        Generator::new(&folio)
            .unwrap()
            .generate(&records, &pages)
            .unwrap();
        (dir, folio)
    }

    #[test]
    fn test_generates_full_tree() {
        let (_dir, folio) = generated_site();
        let public = &folio.public_dir;

        for route in [
            "index.html",
            "blog/index.html",
            "blog/first-post/index.html",
            "reviews/index.html",
            "reviews/nurture/index.html",
            "reviews/yakuza-like-a-dragon/index.html",
            "projects/index.html",
            "project/punks/index.html",
            "project/fortunadws/index.html",
            "about/index.html",
            "tags/rust/index.html",
            "404.html",
            "atom.xml",
            "search.json",
            "css/site.css",
        ] {
            assert!(public.join(route).exists(), "missing {route}");
        }
    }

    #[test]
    fn test_post_page_contents() {
        let (_dir, folio) = generated_site();
        let html =
            fs::read_to_string(folio.public_dir.join("blog/first-post/index.html")).unwrap();
        assert!(html.contains("First Post"));
        assert!(html.contains("January 15, 2024"));
        assert!(html.contains("<em>body</em>"));
        assert!(html.contains("rust"));
    }

    #[test]
    fn test_registered_review_gets_bespoke_section() {
        let (_dir, folio) = generated_site();
        let html =
            fs::read_to_string(folio.public_dir.join("reviews/nurture/index.html")).unwrap();
        assert!(html.contains("Standout Tracks"));
    }

    #[test]
    fn test_not_found_page() {
        let (_dir, folio) = generated_site();
        let html = fs::read_to_string(folio.public_dir.join("404.html")).unwrap();
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("Return to Home"));
    }

    #[test]
    fn test_search_index_contents() {
        let (_dir, folio) = generated_site();
        let json = fs::read_to_string(folio.public_dir.join("search.json")).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0]["id"], "first-post");
        assert!(parsed[0]["content"]
            .as_str()
            .unwrap()
            .contains("body text"));
    }
}
