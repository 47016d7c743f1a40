use sqlx::PgPool;

#[derive(Debug, Clone, Copy)]
pub struct DeleteStatCommand {
    pub id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteStatError {
    #[error("Stat not found")]
    NotFound(i32),
    #[error("Internal Server Error")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, command: DeleteStatCommand) -> Result<(), DeleteStatError> {
    let result = sqlx::query("DELETE FROM stats WHERE id = $1")
        .bind(command.id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DeleteStatError::NotFound(command.id));
    }

    tracing::info!(stat_id = command.id, "Stat line deleted");
    Ok(())
}
