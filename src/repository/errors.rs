use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::dates::DateParseError;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    /// A unique or foreign key constraint rejected the write.
    #[error("record conflicts with existing data")]
    Conflict,
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("database error: {0}")]
    Database(DieselError),
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => RepositoryError::Conflict,
            other => RepositoryError::Database(other),
        }
    }
}

impl From<DateParseError> for RepositoryError {
    fn from(err: DateParseError) -> Self {
        RepositoryError::InvalidData(err.to_string())
    }
}
