//! Biblio Search
//!
//! Keyword-search core of a library management system: exact substring
//! matching via Knuth-Morris-Pratt, field-selectable filtering of
//! catalog records, paged listings, and the stock rules applied when
//! books are borrowed and returned. Everything is synchronous and
//! operates over in-memory collections; persistence and the HTTP
//! surface live in other components.

pub mod config;
pub mod error;
pub mod matcher;
pub mod models;
pub mod services;

pub use config::SearchConfig;
pub use error::{AppError, AppResult};
pub use matcher::Matcher;
