//! Test helpers and fixtures for database tests
//!
//! Provides utilities to reduce boilerplate in test setup.
//!
//! # Examples
//!
//! ```rust,ignore
//! use dugout_server::features::shared::test_helpers::*;
//!
//! #[sqlx::test(migrations = "../../migrations")]
//! async fn test_something(pool: PgPool) -> sqlx::Result<()> {
//!     let ann = TestPlayer::new("Ann", "SS").insert(&pool).await?;
//!     let game = TestGame::new("2024-04-01", "Rivals").insert(&pool).await?;
//!     TestStat::new(ann.id, game.id).at_bats(4).hits(2).insert(&pool).await?;
//!     Ok(())
//! }
//! ```

use chrono::NaiveDate;
use dugout_common::stats::StatLine;
use sqlx::PgPool;

/// Builder for creating test players
#[derive(Debug, Clone)]
pub struct TestPlayer {
    pub id: i32,
    pub name: String,
    pub position: String,
}

impl TestPlayer {
    pub fn new(name: &str, position: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            position: position.to_string(),
        }
    }

    /// Insert the player and capture its id
    pub async fn insert(self, pool: &PgPool) -> sqlx::Result<Self> {
        let id: i32 =
            sqlx::query_scalar("INSERT INTO players (name, position) VALUES ($1, $2) RETURNING id")
                .bind(&self.name)
                .bind(&self.position)
                .fetch_one(pool)
                .await?;

        Ok(Self { id, ..self })
    }
}

/// Builder for creating test games
#[derive(Debug, Clone)]
pub struct TestGame {
    pub id: i32,
    pub date: NaiveDate,
    pub opponent: String,
    pub location: Option<String>,
    pub result: Option<String>,
}

impl TestGame {
    /// `date` must be `YYYY-MM-DD`
    pub fn new(date: &str, opponent: &str) -> Self {
        Self {
            id: 0,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("test date must be YYYY-MM-DD"),
            opponent: opponent.to_string(),
            location: None,
            result: None,
        }
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_result(mut self, result: &str) -> Self {
        self.result = Some(result.to_string());
        self
    }

    pub async fn insert(self, pool: &PgPool) -> sqlx::Result<Self> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO games (date, opponent, location, result) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(self.date)
        .bind(&self.opponent)
        .bind(&self.location)
        .bind(&self.result)
        .fetch_one(pool)
        .await?;

        Ok(Self { id, ..self })
    }
}

/// Builder for creating test stat rows
#[derive(Debug, Clone)]
pub struct TestStat {
    pub id: i32,
    pub player_id: i32,
    pub game_id: i32,
    pub line: StatLine,
}

impl TestStat {
    pub fn new(player_id: i32, game_id: i32) -> Self {
        Self {
            id: 0,
            player_id,
            game_id,
            line: StatLine::default(),
        }
    }

    pub fn at_bats(mut self, n: i32) -> Self {
        self.line.at_bats = n;
        self
    }

    pub fn hits(mut self, n: i32) -> Self {
        self.line.hits = n;
        self
    }

    pub fn line(mut self, line: StatLine) -> Self {
        self.line = line;
        self
    }

    pub async fn insert(self, pool: &PgPool) -> sqlx::Result<Self> {
        let l = &self.line;
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO stats (
                player_id, game_id, at_bats, hits, runs, rbis, home_runs, walks,
                strikeouts, doubles, triples, hit_by_pitch, sacrifice_flies, stolen_bases
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id
            "#,
        )
        .bind(self.player_id)
        .bind(self.game_id)
        .bind(l.at_bats)
        .bind(l.hits)
        .bind(l.runs)
        .bind(l.rbis)
        .bind(l.home_runs)
        .bind(l.walks)
        .bind(l.strikeouts)
        .bind(l.doubles)
        .bind(l.triples)
        .bind(l.hit_by_pitch)
        .bind(l.sacrifice_flies)
        .bind(l.stolen_bases)
        .fetch_one(pool)
        .await?;

        Ok(Self { id, ..self })
    }
}

/// Number of rows in `table`
pub async fn count_rows(pool: &PgPool, table: &str) -> sqlx::Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar(&sql).fetch_one(pool).await
}
