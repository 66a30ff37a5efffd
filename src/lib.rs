//! Book search client for the Open Library catalog: builds one well-formed
//! query from a sparse set of user filters and normalizes the heterogeneous
//! remote records into a stable local shape.

pub mod models;
pub mod services;

pub use models::book::{Book, SearchIntent};
pub use services::catalog::{CatalogClient, CatalogError, DEFAULT_QUERY, OPENLIBRARY_URL};
pub use services::debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use services::normalize::{normalize, RESULT_LIMIT};
pub use services::query::CatalogRequest;
