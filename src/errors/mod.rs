use rusqlite::ErrorCode;
use thiserror::Error;

pub type TournamentResult<T> = Result<T, TournamentError>;

/// Failures surfaced by every tournament operation.
#[derive(Error, Debug)]
pub enum TournamentError {
    /// The store could not be reached (pool, open, lock timeout)
    #[error("Database connection error: {0}")]
    Connection(String),

    /// A referential, not-null or uniqueness constraint rejected the statement
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Any other statement failure
    #[error("Query error: {0}")]
    Query(String),
}

impl TournamentError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    pub fn constraint_violation(message: impl Into<String>) -> Self {
        Self::ConstraintViolation(message.into())
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query(message.into())
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }
}

impl From<rusqlite::Error> for TournamentError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(failure, _) => match failure.code {
                ErrorCode::ConstraintViolation => Self::constraint_violation(err.to_string()),
                ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::PermissionDenied => Self::connection(err.to_string()),
                _ => Self::query(err.to_string()),
            },
            _ => Self::query(err.to_string()),
        }
    }
}

impl From<r2d2::Error> for TournamentError {
    fn from(err: r2d2::Error) -> Self {
        Self::connection(err.to_string())
    }
}
