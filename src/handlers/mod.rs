//! HTTP handlers for word CRUD.

pub mod words;
pub use words::*;
