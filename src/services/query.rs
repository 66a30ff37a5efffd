use url::Url;

use crate::models::book::{non_empty, SearchIntent};

/// Resolved outbound catalog query: an ordered map of query parameters,
/// encoded in a single step when rendered against the base endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    params: Vec<(&'static str, String)>,
}

impl CatalogRequest {
    /// Builds the one request an intent resolves to, or `None` when there is
    /// nothing to search. Structured filters take exclusive precedence: if
    /// any of title/author/year/language is set, free text is dropped even
    /// when present. Free text maps to the generic `q` parameter.
    pub fn build(intent: &SearchIntent) -> Option<Self> {
        let mut params = Vec::new();

        if let Some(title) = non_empty(&intent.title) {
            params.push(("title", title.to_string()));
        }
        if let Some(author) = non_empty(&intent.author) {
            params.push(("author", author.to_string()));
        }
        if let Some(year) = intent.year {
            params.push(("first_publish_year", year.to_string()));
        }
        if let Some(language) = non_empty(&intent.language) {
            params.push(("language", language.to_string()));
        }

        if params.is_empty() {
            let text = non_empty(&intent.free_text)?;
            params.push(("q", text.to_string()));
        }

        Some(Self { params })
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn url(&self, base: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(base, self.params.iter().map(|(k, v)| (*k, v.as_str())))
    }
}
