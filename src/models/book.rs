use serde::{Deserialize, Serialize};

use crate::models::responses::SearchDoc;

pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/200x300?text=No+Cover";

/// User-supplied search input. All fields are optional; an intent where every
/// field is unset triggers no catalog call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchIntent {
    pub free_text: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<u32>,
    pub language: Option<String>,
}

impl SearchIntent {
    pub fn is_empty(&self) -> bool {
        non_empty(&self.free_text).is_none() && !self.has_filters()
    }

    /// True when at least one structured filter (title, author, year,
    /// language) is set. Structured filters take exclusive precedence over
    /// free text when building the outbound query.
    pub fn has_filters(&self) -> bool {
        non_empty(&self.title).is_some()
            || non_empty(&self.author).is_some()
            || self.year.is_some()
            || non_empty(&self.language).is_some()
    }
}

// Empty and whitespace-only strings count as unset.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Normalized book record, the only shape exposed past the catalog boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub first_publish_year: Option<u32>,
    pub languages: Vec<String>,
    pub edition_count: u32,
    pub cover_url: String,
}

impl From<SearchDoc> for Book {
    fn from(doc: SearchDoc) -> Self {
        let cover_url = match doc.cover_i {
            Some(cover_id) => format!("https://covers.openlibrary.org/b/id/{}-M.jpg", cover_id),
            None => PLACEHOLDER_COVER_URL.to_string(),
        };

        Book {
            id: doc.key,
            title: doc.title,
            authors: doc.author_name,
            first_publish_year: doc.first_publish_year,
            languages: doc.language,
            edition_count: doc.edition_count,
            cover_url,
        }
    }
}
