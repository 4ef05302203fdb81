use sea_orm::{DbErr, SqlErr};

/// True when the driver reports a unique-index violation.
///
/// Falls back to message inspection for errors that were wrapped before
/// reaching us (mocked connections, custom errors).
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let message = err.to_string().to_lowercase();
    message.contains("23505")
        || message.contains("duplicate key")
        || message.contains("unique constraint")
}
