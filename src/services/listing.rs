//! Paged, sorted listings of catalog records

use serde::Serialize;
use uuid::Uuid;

use crate::{
    config::ListDefaults,
    error::AppResult,
    models::{query, Book, BorrowRecord, Category, ListQuery, SortOrder, User},
};

/// Paging summary returned alongside every listing
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub total_page: u32,
    pub total_records: u64,
}

/// One page of records
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// List books sorted by `title` (default), `author`, `year`, or `code`.
pub fn list_books(
    books: &[Book],
    request: &ListQuery,
    defaults: &ListDefaults,
) -> AppResult<Page<Book>> {
    query::validate(request)?;

    let mut sorted: Vec<&Book> = books.iter().collect();
    match sort_key(request, defaults) {
        "author" => sorted.sort_by(|a, b| a.author.cmp(&b.author)),
        "year" => sorted.sort_by(|a, b| a.year.cmp(&b.year)),
        "code" => sorted.sort_by(|a, b| a.code.cmp(&b.code)),
        _ => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
    }

    Ok(page_of(sorted, request, defaults))
}

/// List members sorted by `name` (default), `email`, or `member_since`.
pub fn list_users(
    users: &[User],
    request: &ListQuery,
    defaults: &ListDefaults,
) -> AppResult<Page<User>> {
    query::validate(request)?;

    let mut sorted: Vec<&User> = users.iter().collect();
    match sort_key(request, defaults) {
        "email" => sorted.sort_by(|a, b| a.email.cmp(&b.email)),
        "member_since" => sorted.sort_by(|a, b| a.member_since.cmp(&b.member_since)),
        _ => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
    }

    Ok(page_of(sorted, request, defaults))
}

/// List categories sorted by name.
pub fn list_categories(
    categories: &[Category],
    request: &ListQuery,
    defaults: &ListDefaults,
) -> AppResult<Page<Category>> {
    query::validate(request)?;

    let mut sorted: Vec<&Category> = categories.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(page_of(sorted, request, defaults))
}

/// List borrow records sorted by `borrow_date` (default), `due_date`,
/// or `status`. The configured default order is descending, newest
/// borrows first.
pub fn list_borrows(
    borrows: &[BorrowRecord],
    request: &ListQuery,
    defaults: &ListDefaults,
) -> AppResult<Page<BorrowRecord>> {
    query::validate(request)?;

    let mut sorted: Vec<&BorrowRecord> = borrows.iter().collect();
    match sort_key(request, defaults) {
        "due_date" => sorted.sort_by(|a, b| a.due_date.cmp(&b.due_date)),
        "status" => sorted.sort_by(|a, b| a.status.as_str().cmp(b.status.as_str())),
        _ => sorted.sort_by(|a, b| a.borrow_date.cmp(&b.borrow_date)),
    }

    Ok(page_of(sorted, request, defaults))
}

/// Borrow history for one member, most recent first.
pub fn borrow_history_for_user<'a>(
    borrows: &'a [BorrowRecord],
    user_id: Uuid,
) -> Vec<&'a BorrowRecord> {
    let mut history: Vec<&BorrowRecord> = borrows
        .iter()
        .filter(|borrow| borrow.user.id == user_id)
        .collect();
    history.sort_by(|a, b| b.borrow_date.cmp(&a.borrow_date));
    history
}

fn sort_key<'a>(request: &'a ListQuery, defaults: &'a ListDefaults) -> &'a str {
    request.sort_by.as_deref().unwrap_or(&defaults.sort_by)
}

fn page_of<T: Clone>(mut sorted: Vec<&T>, request: &ListQuery, defaults: &ListDefaults) -> Page<T> {
    if request.sort_order.unwrap_or(defaults.sort_order) == SortOrder::Desc {
        sorted.reverse();
    }

    let page = request.page.unwrap_or(1);
    let limit = request.limit.unwrap_or(defaults.page_size).max(1);
    let total_records = sorted.len() as u64;
    let total_page = (total_records.div_ceil(limit as u64)) as u32;
    let offset = (page as u64 - 1).saturating_mul(limit as u64) as usize;

    let data = sorted
        .into_iter()
        .skip(offset)
        .take(limit as usize)
        .cloned()
        .collect();

    Page {
        data,
        pagination: Pagination {
            page,
            total_page,
            total_records,
        },
    }
}
