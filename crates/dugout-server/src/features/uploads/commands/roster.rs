use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::features::uploads::parse::{parse_roster, CsvError, RosterRow};

/// Rows per multi-row INSERT
pub const ROSTER_CHUNK_SIZE: usize = 1000;

/// Raw CSV bytes from the `file` field
#[derive(Debug, Clone)]
pub struct UploadRosterCommand {
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSummary {
    /// Rows actually inserted; names already on the roster add nothing
    pub players_added: u64,
    pub rows_processed: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadRosterError {
    #[error(transparent)]
    Csv(#[from] CsvError),
    #[error("Could not process CSV file.")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool, command), fields(bytes = command.content.len()))]
pub async fn handle(
    pool: PgPool,
    command: UploadRosterCommand,
) -> Result<RosterSummary, UploadRosterError> {
    let parsed = parse_roster(&command.content)?;

    let mut tx = pool.begin().await?;
    let mut players_added = 0;

    for chunk in parsed.rows.chunks(ROSTER_CHUNK_SIZE) {
        players_added += insert_chunk(&mut tx, chunk).await?;
    }

    tx.commit().await?;

    tracing::info!(
        players_added,
        rows = parsed.rows.len(),
        rows_read = parsed.rows_read,
        "Roster uploaded"
    );

    Ok(RosterSummary {
        players_added,
        rows_processed: parsed.rows.len(),
    })
}

async fn insert_chunk(
    tx: &mut sqlx::Transaction<'_, Postgres>,
    chunk: &[RosterRow],
) -> Result<u64, sqlx::Error> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("INSERT INTO players (name, position) ");
    qb.push_values(chunk, |mut b, row| {
        b.push_bind(&row.name).push_bind(&row.position);
    });
    qb.push(" ON CONFLICT (name) DO NOTHING");

    let result = qb.build().execute(&mut **tx).await?;
    Ok(result.rows_affected())
}
