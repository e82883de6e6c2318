use pushkind_common::routes::empty_string_as_none;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::user::{NewUser, UpdateUser};
use crate::forms::sanitize_inline_text;
use crate::roles::{Role, UnknownRole};

const NAME_MAX_LEN: u64 = 128;
/// Shortest password accepted for an account.
pub const PASSWORD_MIN_LEN: u64 = 8;

pub type UserFormResult<T> = Result<T, UserFormError>;

#[derive(Debug, Error)]
pub enum UserFormError {
    #[error("Datos de usuario no válidos: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("El nombre no puede estar vacío.")]
    EmptyName,
    #[error("Rol desconocido: {0}.")]
    UnknownRole(String),
}

impl From<UnknownRole> for UserFormError {
    fn from(err: UnknownRole) -> Self {
        UserFormError::UnknownRole(err.0)
    }
}

/// Payload used to create a user account.
#[derive(Debug, Deserialize, Validate)]
pub struct AddUserForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = PASSWORD_MIN_LEN))]
    pub password: String,
    pub role: String,
}

/// Validated account data. The password is still in clear text.
#[derive(Debug)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl UserPayload {
    pub fn into_new_user(self, password_hash: String) -> NewUser {
        NewUser::new(self.name, self.email, password_hash, self.role)
    }
}

impl AddUserForm {
    pub fn into_payload(self) -> UserFormResult<UserPayload> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(UserFormError::EmptyName);
        }

        Ok(UserPayload {
            name,
            email: self.email.trim().to_lowercase(),
            password: self.password,
            role: self.role.parse()?,
        })
    }
}

/// Partial update of a user account. Missing fields stay unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditUserForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(min = PASSWORD_MIN_LEN))]
    pub password: Option<String>,
}

impl EditUserForm {
    /// Returns the patch and the new clear-text password, if any.
    pub fn into_update(self) -> UserFormResult<(UpdateUser, Option<String>)> {
        self.validate()?;

        let name = match self.name.as_deref().map(sanitize_inline_text) {
            Some(name) if name.is_empty() => return Err(UserFormError::EmptyName),
            other => other,
        };

        let role = self.role.as_deref().map(str::parse::<Role>).transpose()?;

        let update = UpdateUser {
            name,
            role,
            is_active: self.is_active,
            ..UpdateUser::default()
        };

        Ok((update, self.password))
    }
}
