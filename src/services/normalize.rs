use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::models::book::Book;
use crate::models::responses::SearchDoc;

/// At most this many records are kept per response, in upstream order.
pub const RESULT_LIMIT: usize = 20;

/// Maps a raw catalog response into normalized books. A response without a
/// `docs` array yields an empty list rather than an error; individual records
/// that fail to deserialize are skipped. Malformed input is logged.
pub fn normalize(response: &Value) -> Vec<Book> {
    let Some(docs) = response.get("docs").and_then(Value::as_array) else {
        warn!("catalog response has no docs array, treating as empty");
        return Vec::new();
    };

    docs.iter()
        .take(RESULT_LIMIT)
        .filter_map(|raw| match SearchDoc::deserialize(raw) {
            Ok(doc) => Some(Book::from(doc)),
            Err(e) => {
                warn!("skipping malformed catalog record: {}", e);
                None
            }
        })
        .collect()
}
