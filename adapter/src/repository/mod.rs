use shared::error::AppError;

pub mod health;
pub mod reservation;
pub mod room;
pub mod user;

/// Reclassifies a store-level unique-constraint violation into
/// `DuplicateEntry`. Needed for the race where two creations with the
/// same natural key pass their pre-checks and the loser only fails at
/// commit time.
pub(crate) fn classify_unique_violation(e: sqlx::Error, message: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::DuplicateEntry(message.into())
        }
        _ => AppError::SpecificOperationError(e),
    }
}

/// Reclassifies a foreign-key violation into `UnprocessableEntity`.
/// Raised when deleting a room or user that still has reservations
/// (the schema uses ON DELETE RESTRICT).
pub(crate) fn classify_fk_violation(e: sqlx::Error, message: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            AppError::UnprocessableEntity(message.into())
        }
        _ => AppError::SpecificOperationError(e),
    }
}
