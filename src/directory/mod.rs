//! Bundled feed directory for URL autocomplete.
//!
//! One JSON file per supported language, compiled into the binary. The
//! directory only feeds suggestions; the fetch pipeline never consults it.

use serde::Deserialize;

use crate::app::Result;

const DIRECTORY_EN: &str = include_str!("../../assets/directory/en.json");
const DIRECTORY_ZH: &str = include_str!("../../assets/directory/zh.json");

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub title: String,
    #[serde(rename = "feedUrl")]
    pub feed_url: String,
}

pub struct FeedDirectory {
    entries: Vec<DirectoryEntry>,
}

impl FeedDirectory {
    /// Load the bundled directory for `language` (a two-letter code).
    /// Unknown languages fall back to English.
    pub fn bundled(language: &str) -> Result<Self> {
        let raw = match language {
            "zh" => DIRECTORY_ZH,
            _ => DIRECTORY_EN,
        };
        let entries: Vec<DirectoryEntry> = serde_json::from_str(raw)?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Case-insensitive substring filter over titles and URLs. A blank
    /// query yields nothing rather than the whole directory.
    pub fn suggest(&self, query: &str) -> Vec<&DirectoryEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| {
                entry.title.to_lowercase().contains(&query)
                    || entry.feed_url.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_english_loads() {
        let directory = FeedDirectory::bundled("en").unwrap();
        assert!(!directory.entries().is_empty());
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let en = FeedDirectory::bundled("en").unwrap();
        let xx = FeedDirectory::bundled("xx").unwrap();
        assert_eq!(en.entries(), xx.entries());
    }

    #[test]
    fn test_suggest_matches_title_case_insensitively() {
        let directory = FeedDirectory::bundled("en").unwrap();
        let hits = directory.suggest("rust");
        assert!(hits.iter().any(|e| e.title == "Rust Blog"));
    }

    #[test]
    fn test_suggest_matches_url() {
        let directory = FeedDirectory::bundled("en").unwrap();
        let hits = directory.suggest("ycombinator");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Hacker News");
    }

    #[test]
    fn test_blank_query_yields_nothing() {
        let directory = FeedDirectory::bundled("en").unwrap();
        assert!(directory.suggest("").is_empty());
        assert!(directory.suggest("   ").is_empty());
    }

    #[test]
    fn test_chinese_directory_loads() {
        let directory = FeedDirectory::bundled("zh").unwrap();
        assert!(!directory.entries().is_empty());
    }
}
