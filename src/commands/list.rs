//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::data::{projects, reviews};
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let loader = ContentLoader::new(folio);
            let records = loader.load_posts()?;
            println!("Posts ({}):", records.len());
            for record in records {
                println!("  {} - {} [{}]", record.date, record.title, record.id);
            }
        }
        "page" | "pages" => {
            let loader = ContentLoader::new(folio);
            let pages = loader.load_pages()?;
            println!("Pages ({}):", pages.len());
            for page in pages {
                println!("  {} [{}]", page.title, page.path);
            }
        }
        "review" | "reviews" => {
            let reviews = reviews();
            println!("Reviews ({}):", reviews.len());
            for review in reviews {
                println!(
                    "  {} - {} by {} ({}/10)",
                    review.date, review.title, review.artist, review.rating
                );
            }
        }
        "project" | "projects" => {
            let projects = projects();
            println!("Projects ({}):", projects.len());
            for project in projects {
                println!("  {} - {}", project.title, project.description);
            }
        }
        "tag" | "tags" => {
            let loader = ContentLoader::new(folio);
            let records = loader.load_posts()?;
            let mut tags: std::collections::HashMap<String, usize> =
                std::collections::HashMap::new();
            for record in &records {
                for tag in &record.tags {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, page, review, project, tag",
                content_type
            );
        }
    }

    Ok(())
}
