use serde::{Deserialize, Serialize};

/// Fallback title for entries that carry none.
pub const UNTITLED: &str = "(Untitled)";

/// One normalized feed entry. Every textual field has already been
/// markup-stripped; a list of articles replaces the previous one wholesale
/// on each fetch, so articles carry no identity and are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub content: String,
}

impl Article {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: String::new(),
            summary: String::new(),
            content: String::new(),
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Best available body text for the viewer pane.
    pub fn display_content(&self) -> &str {
        if self.content.is_empty() {
            &self.summary
        } else {
            &self.content
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_fallback() {
        let article = Article::new("");
        assert_eq!(article.display_title(), UNTITLED);
    }

    #[test]
    fn test_display_content_prefers_content() {
        let mut article = Article::new("t");
        article.summary = "short".into();
        article.content = "full".into();
        assert_eq!(article.display_content(), "full");
    }

    #[test]
    fn test_display_content_falls_back_to_summary() {
        let mut article = Article::new("t");
        article.summary = "short".into();
        assert_eq!(article.display_content(), "short");
    }
}
