use sqlx::PgPool;

use crate::models::Player;

#[derive(Debug, thiserror::Error)]
pub enum ListPlayersError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Every player, ordered by id
#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool) -> Result<Vec<Player>, ListPlayersError> {
    let players =
        sqlx::query_as::<_, Player>("SELECT id, name, position FROM players ORDER BY id ASC")
            .fetch_all(&pool)
            .await?;

    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestPlayer;

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_list_empty(pool: PgPool) -> sqlx::Result<()> {
        assert!(handle(pool.clone()).await.unwrap().is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_list_ordered_by_id(pool: PgPool) -> sqlx::Result<()> {
        let zed = TestPlayer::new("Zed", "P").insert(&pool).await?;
        let ann = TestPlayer::new("Ann", "SS").insert(&pool).await?;

        let ids: Vec<i32> = handle(pool.clone()).await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![zed.id, ann.id]);
        Ok(())
    }
}
