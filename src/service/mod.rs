//! Data access for words, on top of the SQL builder and a request-scoped session.

mod words;
pub use words::WordService;
