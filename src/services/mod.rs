use serde::Deserialize;
use thiserror::Error;

use crate::auth::{AuthError, AuthenticatedUser};
use crate::pagination::PageRequest;
use crate::repository::errors::RepositoryError;
use crate::roles::{Action, RoleGate, StaticRoleGate};
use crate::settings::SettingsError;

pub mod articles;
pub mod auth;
pub mod editorial_numbers;
pub mod languages;
pub mod researchers;
pub mod settings;
pub mod thematic_lines;
pub mod users;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or wrong credentials.
    #[error("Credenciales no válidas.")]
    Unauthenticated,
    /// The caller's role does not allow the action.
    #[error("No tiene permisos para realizar esta acción.")]
    Unauthorized,
    #[error("El registro solicitado no existe.")]
    NotFound,
    #[error("{0}")]
    Conflict(String),
    #[error("Las fechas se superponen con el número {number} ({start_date} a {end_date}).")]
    OverlapConflict {
        id: i32,
        number: i32,
        start_date: String,
        end_date: String,
    },
    #[error("{0}")]
    Form(String),
    /// Filter text was typed but neither added nor discarded.
    #[error("El filtro «{0}» no se ha añadido. Confirme si desea añadirlo o descartarlo.")]
    ConfirmationRequired(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict => ServiceError::Conflict(
                "El registro ya existe o está siendo utilizado por otros datos.".to_string(),
            ),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for ServiceError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken | AuthError::Expired | AuthError::InvalidToken => {
                ServiceError::Unauthenticated
            }
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<SettingsError> for ServiceError {
    fn from(err: SettingsError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

/// Refuse the call unless the user's role may perform `action`.
pub fn ensure_allowed(user: &AuthenticatedUser, action: Action) -> ServiceResult<()> {
    if StaticRoleGate.permits(user.role, action) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Query parameters shared by the list endpoints.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    /// Page size the client was showing before this request.
    pub previous_per_page: Option<usize>,
}

impl ListQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_params(self.page, self.per_page, self.previous_per_page)
    }

    /// Trimmed search text, `None` when blank.
    pub fn search_term(&self) -> Option<String> {
        non_blank(self.search.as_deref())
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
