pub mod catalog;
pub mod debounce;
pub mod normalize;
pub mod query;
