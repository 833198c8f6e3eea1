//! Request types shared by listing operations

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Sort direction, ascending unless stated otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Paged listing request. Unset values fall back to the per-entity
/// defaults in [`SearchConfig`](crate::config::SearchConfig).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListQuery {
    #[validate(range(min = 1))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// Sort key; unknown keys fall back to the entity default
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

/// Run validator rules and map failures into the crate error type
pub fn validate<T: Validate>(request: &T) -> AppResult<()> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_zero_rejected() {
        let query = ListQuery {
            page: Some(0),
            ..ListQuery::default()
        };
        assert!(validate(&query).is_err());
    }

    #[test]
    fn test_limit_cap() {
        let query = ListQuery {
            limit: Some(101),
            ..ListQuery::default()
        };
        assert!(validate(&query).is_err());

        let query = ListQuery {
            limit: Some(100),
            ..ListQuery::default()
        };
        assert!(validate(&query).is_ok());
    }

    #[test]
    fn test_defaults_pass() {
        assert!(validate(&ListQuery::default()).is_ok());
    }
}
