//! Keyword search over catalog records.
//!
//! Each search compiles the folded keyword once and runs it against the
//! folded value of the selected field on every candidate record. The
//! matcher itself is case-sensitive; folding both sides here is what
//! makes these searches case-insensitive. A record whose optional field
//! is unset is treated as holding the empty string, so a blank keyword
//! matches every record.

use crate::{
    error::{AppError, AppResult},
    matcher::Matcher,
    models::{Book, BookSearchField, BorrowRecord, BorrowSearchField, Category, User},
};

/// Search books on one field, optionally restricted to a category
/// (exact category name).
pub fn search_books<'a>(
    books: &'a [Book],
    keyword: &str,
    field: BookSearchField,
    category: Option<&str>,
) -> AppResult<Vec<&'a Book>> {
    let matcher = Matcher::new(&keyword.to_lowercase());

    let matched: Vec<&Book> = books
        .iter()
        .filter(|book| category.map_or(true, |name| book.in_category(name)))
        .filter(|book| {
            let value = book.field_value(field).unwrap_or_default();
            matcher.matches(&value.to_lowercase())
        })
        .collect();

    tracing::debug!(
        "Book search for {:?} on {} matched {} of {} records",
        keyword,
        field,
        matched.len(),
        books.len()
    );

    if matched.is_empty() {
        return Err(AppError::NotFound("No books match the search".to_string()));
    }
    Ok(matched)
}

/// Search categories by name.
pub fn search_categories<'a>(
    categories: &'a [Category],
    keyword: &str,
) -> AppResult<Vec<&'a Category>> {
    let matcher = Matcher::new(&keyword.to_lowercase());

    let matched: Vec<&Category> = categories
        .iter()
        .filter(|category| matcher.matches(&category.name.to_lowercase()))
        .collect();

    if matched.is_empty() {
        return Err(AppError::NotFound(
            "No categories match the search".to_string(),
        ));
    }
    Ok(matched)
}

/// Search members: a user matches when the keyword occurs in any of
/// name, email, registration number, or phone.
pub fn search_users<'a>(users: &'a [User], keyword: &str) -> AppResult<Vec<&'a User>> {
    let matcher = Matcher::new(&keyword.to_lowercase());

    let matched: Vec<&User> = users
        .iter()
        .filter(|user| {
            matcher.matches(&user.name.to_lowercase())
                || matcher.matches(&user.email.to_lowercase())
                || matcher.matches(&user.nis.to_lowercase())
                || matcher.matches(&user.phone.to_lowercase())
        })
        .collect();

    tracing::debug!(
        "User search for {:?} matched {} of {} records",
        keyword,
        matched.len(),
        users.len()
    );

    if matched.is_empty() {
        return Err(AppError::NotFound("No users match the search".to_string()));
    }
    Ok(matched)
}

/// Search borrow records on borrower name, book title, or status label.
pub fn search_borrows<'a>(
    borrows: &'a [BorrowRecord],
    keyword: &str,
    field: BorrowSearchField,
) -> AppResult<Vec<&'a BorrowRecord>> {
    let matcher = Matcher::new(&keyword.to_lowercase());

    let matched: Vec<&BorrowRecord> = borrows
        .iter()
        .filter(|borrow| matcher.matches(&borrow.field_value(field).to_lowercase()))
        .collect();

    if matched.is_empty() {
        return Err(AppError::NotFound(
            "No borrow records match the search".to_string(),
        ));
    }
    Ok(matched)
}
