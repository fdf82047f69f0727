//! Built-in record sets - reviews and projects
//!
//! These are flat, immutable records declared directly in code rather than
//! loaded from files. Lookup is the same linear-search contract as blog
//! records: a miss returns None.

mod projects;
mod reviews;

pub use projects::projects;
pub use reviews::reviews;

use serde::Serialize;

/// What kind of work a review covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewKind {
    Music,
    Game,
}

impl ReviewKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewKind::Music => "music",
            ReviewKind::Game => "game",
        }
    }
}

/// A review of an album or game
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub kind: ReviewKind,
    pub description: &'static str,
    pub rating: f32,
    pub date: &'static str,
    pub cover_image: &'static str,
    pub tags: &'static [&'static str],
}

/// A screenshot with caption
#[derive(Debug, Clone, Serialize)]
pub struct Screenshot {
    pub url: &'static str,
    pub caption: &'static str,
}

/// A portfolio project
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub technologies: &'static [&'static str],
    pub github_link: Option<&'static str>,
    pub demo_link: Option<&'static str>,
    pub full_description: Option<&'static str>,
    pub screenshots: &'static [Screenshot],
    pub features: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub learnings: &'static [&'static str],
}

/// Find a review by exact id
pub fn find_review<'a>(reviews: &'a [Review], id: &str) -> Option<&'a Review> {
    reviews.iter().find(|r| r.id == id)
}

/// Find a project by exact id
pub fn find_project<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_review_hit() {
        let all = reviews();
        let nurture = find_review(&all, "nurture").unwrap();
        assert_eq!(nurture.title, "Nurture");
        assert_eq!(nurture.artist, "Porter Robinson");
        assert_eq!(nurture.kind, ReviewKind::Music);
        assert_eq!(nurture.rating, 9.5);
        assert_eq!(nurture.date, "2024-01-15");
        assert!(nurture.tags.contains(&"electronic"));
    }

    #[test]
    fn test_find_review_miss() {
        let all = reviews();
        assert!(find_review(&all, "does-not-exist").is_none());
    }

    #[test]
    fn test_find_project() {
        let all = projects();
        let punks = find_project(&all, "punks").unwrap();
        assert!(punks.technologies.contains(&"Electron"));
        assert!(find_project(&all, "missing").is_none());
    }

    #[test]
    fn test_review_ids_unique() {
        let all = reviews();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
