//! Borrow record model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::book::Book;
use super::enums::BorrowStatus;
use super::user::User;

/// One borrow of one book by one member, with embedded snapshots of
/// both for display and search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub id: Uuid,
    pub user: User,
    pub book: Book,
    pub borrow_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub status: BorrowStatus,
}

impl BorrowRecord {
    /// Value of the given searchable field
    pub fn field_value(&self, field: BorrowSearchField) -> &str {
        match field {
            BorrowSearchField::User => &self.user.name,
            BorrowSearchField::Book => &self.book.title,
            BorrowSearchField::Status => self.status.as_str(),
        }
    }

    /// Still out and past its due date
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status.is_active() && now > self.due_date
    }
}

/// Field a borrow keyword search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorrowSearchField {
    #[default]
    User,
    Book,
    Status,
}

impl BorrowSearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorrowSearchField::User => "user",
            BorrowSearchField::Book => "book",
            BorrowSearchField::Status => "status",
        }
    }
}

impl std::fmt::Display for BorrowSearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BorrowSearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(BorrowSearchField::User),
            "book" => Ok(BorrowSearchField::Book),
            "status" => Ok(BorrowSearchField::Status),
            _ => Err(format!("Invalid borrow search field: {}", s)),
        }
    }
}
