use sea_orm::{DbErr, SqlErr};

/// Returns true when the database rejected a write because of a unique index.
///
/// Business identifiers (`client.client_id`, `formation.formation_id`) rely on their
/// unique index rather than a read-then-write check, so services translate this
/// error into a conflict response.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
