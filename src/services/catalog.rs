use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::book::{Book, SearchIntent};
use crate::services::normalize::normalize;
use crate::services::query::CatalogRequest;

pub const OPENLIBRARY_URL: &str = "https://openlibrary.org/search.json";

/// Free-text query behind `load_default`.
pub const DEFAULT_QUERY: &str = "harry potter";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog responded with status {0}")]
    Status(StatusCode),
    #[error("invalid catalog query url: {0}")]
    Url(#[from] url::ParseError),
}

/// Client for the Open Library search endpoint. One GET per search, no
/// retries, no timeout beyond the transport default.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self::with_base_url(OPENLIBRARY_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Searches the catalog, absorbing every failure into an empty result
    /// list. Callers that need to tell "failed" apart from "found nothing"
    /// use [`try_search`](Self::try_search) instead.
    pub async fn search(&self, intent: &SearchIntent) -> Vec<Book> {
        match self.try_search(intent).await {
            Ok(books) => books,
            Err(e) => {
                warn!("book search failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Tagged variant of [`search`](Self::search): transport failures,
    /// non-2xx statuses and non-JSON bodies surface as errors. An empty
    /// intent is not an error; it issues no request and returns no books
    /// (check `intent.is_empty()` to keep a previous result set instead).
    pub async fn try_search(&self, intent: &SearchIntent) -> Result<Vec<Book>, CatalogError> {
        let Some(request) = CatalogRequest::build(intent) else {
            debug!("empty search intent, skipping catalog call");
            return Ok(Vec::new());
        };
        self.fetch(request).await
    }

    /// Loads the fixed default book list shown before any user input.
    pub async fn load_default(&self) -> Vec<Book> {
        let intent = SearchIntent {
            free_text: Some(DEFAULT_QUERY.to_string()),
            ..Default::default()
        };
        self.search(&intent).await
    }

    async fn fetch(&self, request: CatalogRequest) -> Result<Vec<Book>, CatalogError> {
        let url = request.url(&self.base_url)?;
        debug!("querying catalog: {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let body: Value = response.json().await?;
        Ok(normalize(&body))
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
