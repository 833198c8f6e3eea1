//! Domain models for catalog records and search requests

pub mod book;
pub mod borrow;
pub mod category;
pub mod enums;
pub mod query;
pub mod user;

pub use book::{Book, BookSearchField};
pub use borrow::{BorrowRecord, BorrowSearchField};
pub use category::Category;
pub use enums::{BookSource, BookStatus, BorrowStatus, Gender};
pub use query::{ListQuery, SortOrder};
pub use user::User;
