use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::roles::Role;

/// Account able to log into Clio.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Inactive users cannot log in.
    pub is_active: bool,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl NewUser {
    #[must_use]
    pub fn new(name: String, email: String, password_hash: String, role: Role) -> Self {
        Self {
            name,
            email: email.to_lowercase(),
            password_hash,
            role,
        }
    }
}

/// Patch applied to an existing user. `None` fields stay unchanged.
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub password_hash: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateUser {
    fn default() -> Self {
        Self {
            name: None,
            role: None,
            is_active: None,
            password_hash: None,
            updated_at: Local::now().naive_utc(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    /// Substring matched against name and email.
    pub search: Option<String>,
    pub role: Option<Role>,
}

impl UserListQuery {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}
