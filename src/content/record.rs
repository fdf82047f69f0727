//! Record and Page models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A blog post loaded from the content directory.
///
/// `date` keeps the raw front-matter string for display (it may be the
/// "Unknown Date" fallback); `sort_date` is the parsed form that drives
/// ordering. Records are built once per load pass and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, derived from the filename
    pub id: String,

    /// Post title
    pub title: String,

    /// Date as written in the front matter
    pub date: String,

    /// Parsed date used for ordering; None when the date string is invalid
    pub sort_date: Option<NaiveDate>,

    /// Short description shown on index pages
    pub description: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Raw markdown body
    pub body: String,

    /// Rendered HTML body
    pub content: String,

    /// Source file path
    pub source: PathBuf,

    /// URL path (with root)
    pub path: String,

    /// Full permalink URL
    pub permalink: String,
}

/// Linear search for a record by exact id.
///
/// A miss is a normal outcome, not an error: the caller renders the
/// not-found state.
pub fn find<'a>(records: &'a [Record], id: &str) -> Option<&'a Record> {
    records.iter().find(|r| r.id == id)
}

/// A standalone page (about, contact)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Identifier derived from the filename
    pub id: String,

    /// Page title
    pub title: String,

    /// Rendered HTML body
    pub content: String,

    /// Source file path
    pub source: PathBuf,

    /// URL path (with root)
    pub path: String,
}
