// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        sqlx::Error::Database(db_err) => match db_err.constraint() {
            Some(constraint) => {
                DomainError::Conflict(format!("database constraint violation: {constraint}"))
            }
            None => DomainError::Persistence(err.to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}
