//! Role-based access to pages and actions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Roles a Clio user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Administrador,
    Editor,
    Asistente,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Administrador, Role::Editor, Role::Asistente];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrador => "ADMINISTRADOR",
            Role::Editor => "EDITOR",
            Role::Asistente => "ASISTENTE",
        }
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("rol desconocido `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownRole(value.to_string()))
    }
}

/// Protected operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Read any record. Only requires a logged in user.
    ViewRecords,
    ManageUsers,
    ManageEditorialNumbers,
    /// Thematic lines and languages.
    ManageCatalog,
    ManageResearchers,
    ManageArticles,
    DeleteRecords,
}

impl Action {
    /// Roles allowed to perform the action. Empty means any logged in user.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Action::ViewRecords => &[],
            Action::ManageUsers => &[Role::Administrador],
            Action::ManageEditorialNumbers | Action::ManageCatalog | Action::DeleteRecords => {
                &[Role::Administrador, Role::Editor]
            }
            Action::ManageResearchers | Action::ManageArticles => &Role::ALL,
        }
    }
}

/// Case-insensitive membership test. An empty allow-list lets everyone in;
/// a missing role is refused by any non-empty allow-list.
pub fn is_allowed<S: AsRef<str>>(user_role: Option<&str>, allowed_roles: &[S]) -> bool {
    if allowed_roles.is_empty() {
        return true;
    }

    match user_role {
        Some(role) => allowed_roles
            .iter()
            .any(|allowed| allowed.as_ref().eq_ignore_ascii_case(role.trim())),
        None => false,
    }
}

/// Decides whether a role may perform an action.
pub trait RoleGate {
    fn permits(&self, role: Option<Role>, action: Action) -> bool;
}

/// Gate backed by [`Action::allowed_roles`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRoleGate;

impl RoleGate for StaticRoleGate {
    fn permits(&self, role: Option<Role>, action: Action) -> bool {
        is_allowed(role.as_ref().map(Role::as_str), action.allowed_roles())
    }
}
