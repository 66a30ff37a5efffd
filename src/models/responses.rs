use serde::{Deserialize, Serialize};

/// Raw record shape of the Open Library `search.json` `docs` array. Every
/// field the catalog may omit defaults, so sparse records still deserialize.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchDoc {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author_name: Vec<String>,
    pub first_publish_year: Option<u32>,
    #[serde(default)]
    pub language: Vec<String>,
    #[serde(default)]
    pub edition_count: u32,
    pub cover_i: Option<u64>,
}
