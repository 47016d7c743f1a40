use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::features::uploads::parse::{parse_stats, CsvError, StatRow};

/// Rows per multi-row INSERT (14 binds each)
pub const STATS_CHUNK_SIZE: usize = 1000;

#[derive(Debug, Clone)]
pub struct UploadStatsCommand {
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStatsError {
    #[error(transparent)]
    Csv(#[from] CsvError),
    #[error("Error saving stats to database.")]
    Database(#[from] sqlx::Error),
}

/// All-or-nothing: an unknown player or game anywhere in the file rolls back
/// every row.
#[tracing::instrument(skip(pool, command), fields(bytes = command.content.len()))]
pub async fn handle(pool: PgPool, command: UploadStatsCommand) -> Result<StatsSummary, UploadStatsError> {
    let rows = parse_stats(&command.content)?;

    let mut tx = pool.begin().await?;

    for chunk in rows.chunks(STATS_CHUNK_SIZE) {
        insert_chunk(&mut tx, chunk).await?;
    }

    tx.commit().await?;

    tracing::info!(total = rows.len(), "Stats uploaded");

    Ok(StatsSummary { total: rows.len() })
}

async fn insert_chunk(
    tx: &mut sqlx::Transaction<'_, Postgres>,
    chunk: &[StatRow],
) -> Result<(), sqlx::Error> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
        r#"
        INSERT INTO stats (
            player_id, game_id, at_bats, hits, runs, rbis, home_runs, walks,
            strikeouts, doubles, triples, hit_by_pitch, sacrifice_flies, stolen_bases
        )
        "#,
    );

    qb.push_values(chunk, |mut b, row| {
        b.push_bind(row.player_id).push_bind(row.game_id);
        for value in row.line.values() {
            b.push_bind(value);
        }
    });

    qb.build().execute(&mut **tx).await?;
    Ok(())
}
