//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::enums::{BookSource, BookStatus};

/// Catalog book with its assigned categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub code: Option<String>,
    pub title: String,
    pub author: String,
    pub publisher: Option<String>,
    pub year: Option<i32>,
    pub location: Option<String>,
    pub cover: Option<String>,
    pub description: Option<String>,
    pub isbn: Option<String>,
    #[serde(default)]
    pub status: BookStatus,
    pub stock: i32,
    #[serde(default)]
    pub source: BookSource,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Book {
    /// Value of the given searchable field, if set
    pub fn field_value(&self, field: BookSearchField) -> Option<&str> {
        match field {
            BookSearchField::Title => Some(&self.title),
            BookSearchField::Author => Some(&self.author),
            BookSearchField::Publisher => self.publisher.as_deref(),
            BookSearchField::Isbn => self.isbn.as_deref(),
            BookSearchField::Code => self.code.as_deref(),
            BookSearchField::Location => self.location.as_deref(),
        }
    }

    /// Whether the book is assigned to the named category (exact name)
    pub fn in_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }
}

/// Field a book keyword search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookSearchField {
    #[default]
    Title,
    Author,
    Publisher,
    Isbn,
    Code,
    Location,
}

impl BookSearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookSearchField::Title => "title",
            BookSearchField::Author => "author",
            BookSearchField::Publisher => "publisher",
            BookSearchField::Isbn => "isbn",
            BookSearchField::Code => "code",
            BookSearchField::Location => "location",
        }
    }
}

impl std::fmt::Display for BookSearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookSearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(BookSearchField::Title),
            "author" => Ok(BookSearchField::Author),
            "publisher" => Ok(BookSearchField::Publisher),
            "isbn" => Ok(BookSearchField::Isbn),
            "code" => Ok(BookSearchField::Code),
            "location" => Ok(BookSearchField::Location),
            _ => Err(format!("Invalid book search field: {}", s)),
        }
    }
}
