//! Registered member model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Gender;

/// Library member account. Passwords and session tokens live in the
/// authentication layer, outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Member registration number
    pub nis: String,
    pub phone: String,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub image: Option<String>,
    pub member_since: DateTime<Utc>,
    pub is_admin: bool,
}
