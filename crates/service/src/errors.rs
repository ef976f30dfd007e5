use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn conflict(entity: &str, field: &str, value: &str) -> Self {
        Self::Conflict(format!("{entity} with {field} '{value}' already exists"))
    }

    /// Client-side failures that map to a 400 response.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Model(models::errors::ModelError::Validation(_))
        )
    }
}

/// Constraint violations raised by the database become client errors; the
/// up-front checks in the services can race with concurrent writers.
impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Validation(msg),
            _ => Self::Db(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn validation_kinds() {
        assert!(ServiceError::Validation("x".into()).is_validation());
        assert!(ServiceError::from(ModelError::invalid("name", "is required")).is_validation());
        assert!(!ServiceError::not_found("guest").is_validation());
    }

    #[test]
    fn plain_db_errors_stay_internal() {
        let e = ServiceError::from(DbErr::Custom("socket closed".into()));
        assert!(matches!(e, ServiceError::Db(_)));
        assert_eq!(ServiceError::not_found("room").to_string(), "not found: room not found");
    }
}
