//! Front-matter parsing
//!
//! Documents may open with a `---`-delimited YAML block carrying `title`,
//! `date`, `description`, and `tags`. A document without the block is all
//! body. A delimited block that is not valid YAML is a hard error: content
//! loading is a single build-time pass, so a bad header should stop the
//! build rather than silently drop a post.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors raised while turning a source document into a record.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed front matter: {0}")]
    Frontmatter(#[from] serde_yaml::Error),
}

/// Custom deserializer accepting either a single string or a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Parsed front-matter header of a post or page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Split a document into its front matter and body.
    ///
    /// Returns `(front_matter, body)`. A missing or unclosed `---` block
    /// yields the default header with the whole input as body; a closed
    /// block that fails YAML parsing is an error.
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let trimmed = content.trim_start();

        let Some(rest) = trimmed.strip_prefix("---") else {
            return Ok((FrontMatter::default(), trimmed));
        };
        // The opening delimiter must end its line
        let rest = rest.strip_prefix('\r').unwrap_or(rest);
        let Some(rest) = rest.strip_prefix('\n') else {
            return Ok((FrontMatter::default(), trimmed));
        };

        let Some(end) = rest.find("\n---") else {
            // Unclosed delimiter, treat the document as plain body
            return Ok((FrontMatter::default(), trimmed));
        };

        let header = &rest[..end];
        let body = rest[end + 4..].trim_start_matches(['\r', '\n']);

        if header.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm: FrontMatter = serde_yaml::from_str(header)?;
        Ok((fm, body))
    }

    /// Parse the date field into a calendar date, if present and valid
    pub fn parse_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date_string)
    }
}

/// Parse a date string in the handful of formats posts actually use
pub fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_header() {
        let content = r#"---
title: Building punks
date: 2024-04-15
description: Notes from building a sample navigator
tags:
  - electron
  - audio
---

This is the body.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Building punks".to_string()));
        assert_eq!(fm.date, Some("2024-04-15".to_string()));
        assert_eq!(
            fm.description,
            Some("Notes from building a sample navigator".to_string())
        );
        assert_eq!(fm.tags, vec!["electron", "audio"]);
        assert!(body.starts_with("This is the body."));
    }

    // Round-trip of header fields: parse then re-serialize reproduces the
    // same values
    #[test]
    fn test_header_round_trip() {
        let content = "---\ntitle: Hello\ndate: 2024-01-15\ndescription: hi\ntags: [a, b]\n---\nbody\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();

        let reserialized = serde_yaml::to_string(&fm).unwrap();
        let reparsed: FrontMatter = serde_yaml::from_str(&reserialized).unwrap();
        assert_eq!(reparsed.title, fm.title);
        assert_eq!(reparsed.date, fm.date);
        assert_eq!(reparsed.description, fm.description);
        assert_eq!(reparsed.tags, fm.tags);
    }

    #[test]
    fn test_single_string_tags() {
        let content = "---\ntitle: One tag\ntags: notes\n---\nbody\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["notes"]);
    }

    #[test]
    fn test_no_front_matter() {
        let (fm, body) = FrontMatter::parse("Just a body, nothing else.\n").unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(fm.date, None);
        assert!(fm.tags.is_empty());
        assert!(body.starts_with("Just a body"));
    }

    #[test]
    fn test_unclosed_block_is_body() {
        let content = "---\ntitle: never closed\n\nSome text.\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(body.contains("never closed"));
    }

    #[test]
    fn test_malformed_header_is_error() {
        let content = "---\ntitle: [unterminated\n---\nbody\n";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_empty_header_block() {
        let content = "---\n\n---\nbody here\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(body, "body here\n");
    }

    #[test]
    fn test_parse_date_formats() {
        for s in ["2024-01-15", "2024/01/15", "2024-01-15 10:30:00"] {
            let fm = FrontMatter {
                date: Some(s.to_string()),
                ..Default::default()
            };
            let d = fm.parse_date().unwrap();
            assert_eq!(d.format("%Y-%m-%d").to_string(), "2024-01-15");
        }
    }

    #[test]
    fn test_unparseable_date() {
        let fm = FrontMatter {
            date: Some("Unknown Date".to_string()),
            ..Default::default()
        };
        assert_eq!(fm.parse_date(), None);
    }
}
