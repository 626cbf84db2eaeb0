use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::{debug, info};

use crate::common::DatabaseError;

/// Execute idempotent DDL statements (`CREATE TABLE IF NOT EXISTS ...`) in one
/// transaction. Either every statement applies or none does.
pub async fn bootstrap_schema(
    db: &DatabaseConnection,
    statements: &[&str],
) -> Result<(), DatabaseError> {
    let txn = db.begin().await?;

    for sql in statements {
        debug!(sql, "Applying schema statement");
        txn.execute_unprepared(sql)
            .await
            .map_err(|e| DatabaseError::SchemaError(format!("{}: {}", first_line(sql), e)))?;
    }

    txn.commit().await?;
    info!(statements = statements.len(), "Database schema bootstrapped");
    Ok(())
}

fn first_line(sql: &str) -> &str {
    sql.trim().lines().next().unwrap_or_default()
}
