//! Borrow lifecycle: stock and status rules for lending books.
//!
//! Stock is decremented when a borrow is created and restored when the
//! book comes back. A copy reported lost is never restored. The last
//! copy leaving the shelf flips the book to `Borrowed`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookStatus, BorrowRecord, BorrowStatus, User},
};

/// Lend one copy of `book` to `user`.
///
/// The due date must be strictly in the future and the book must be
/// available with at least one copy in stock.
pub fn borrow_book(
    user: &User,
    book: &mut Book,
    due_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> AppResult<BorrowRecord> {
    if due_date <= now {
        return Err(AppError::Validation(
            "Due date must be in the future".to_string(),
        ));
    }
    if book.status == BookStatus::Borrowed || book.stock < 1 {
        return Err(AppError::BadRequest("Book is not available".to_string()));
    }

    book.stock -= 1;
    if book.stock == 0 {
        book.status = BookStatus::Borrowed;
    }

    tracing::info!(
        "Borrow created: {:?} -> {:?}, {} copies left",
        user.name,
        book.title,
        book.stock
    );

    Ok(BorrowRecord {
        id: Uuid::new_v4(),
        user: user.clone(),
        book: book.clone(),
        borrow_date: now,
        due_date,
        return_date: None,
        status: BorrowStatus::Borrowed,
    })
}

/// Close an active borrow.
///
/// When no explicit status is supplied the outcome resolves to `Late`
/// if the record is past due, otherwise `Returned`. Returned copies go
/// back into stock; lost copies do not.
pub fn return_borrow(
    borrow: &mut BorrowRecord,
    book: &mut Book,
    return_date: DateTime<Utc>,
    status: Option<BorrowStatus>,
    now: DateTime<Utc>,
) -> AppResult<()> {
    if return_date > now {
        return Err(AppError::Validation(
            "Return date may not be in the future".to_string(),
        ));
    }
    if !borrow.status.is_active() {
        return Err(AppError::BadRequest(
            "Book was already returned or declared lost".to_string(),
        ));
    }

    let resolved = match status {
        Some(s @ (BorrowStatus::Returned | BorrowStatus::Late | BorrowStatus::Lost)) => s,
        _ => {
            if now > borrow.due_date {
                BorrowStatus::Late
            } else {
                BorrowStatus::Returned
            }
        }
    };

    borrow.status = resolved;
    borrow.return_date = Some(return_date);

    if resolved != BorrowStatus::Lost {
        book.stock += 1;
        book.status = BookStatus::Available;
    }

    tracing::info!(
        "Borrow closed as {}: {:?}, {} copies in stock",
        resolved,
        book.title,
        book.stock
    );

    Ok(())
}

/// Release stock held by a borrow record that is being deleted.
///
/// Deleting a record whose book is still out returns the copy to the
/// shelf; closed records release nothing.
pub fn delete_borrow(borrow: &BorrowRecord, book: &mut Book) {
    if borrow.status.is_active() {
        book.stock += 1;
        book.status = BookStatus::Available;
    }
}
