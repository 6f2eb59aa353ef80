use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr, Statement};

/// True when the error comes from a violated unique index or constraint.
///
/// Driver errors carry the SQLSTATE and are classified by sea-orm; anything
/// else (mock connections, wrapped errors) falls back to the message text.
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

/// Round-trip a trivial statement to confirm the pool can reach the database.
pub async fn ping(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "SELECT 1",
    ))
    .await
    .map(|_| ())
}
