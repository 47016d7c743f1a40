//! CSV decoding for roster and stat uploads
//!
//! Files are parsed completely in memory before anything is written. Headers
//! are matched case-insensitively, so `RBIs` lands in `rbis`.

use csv::{ReaderBuilder, StringRecord, Trim};
use dugout_common::stats::StatLine;

#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error("CSV file is empty or formatted incorrectly.")]
    Empty,
    #[error("CSV file is empty or formatted incorrectly.")]
    Malformed(#[from] csv::Error),
    #[error("Row {row}, column '{column}': '{value}' is not an integer.")]
    NotInteger {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("Row {row}: player_id and game_id are required.")]
    MissingIds { row: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub name: String,
    pub position: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatRow {
    pub player_id: i32,
    pub game_id: i32,
    pub line: StatLine,
}

/// Roster rows plus the number of data rows read (including skipped ones)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoster {
    pub rows: Vec<RosterRow>,
    pub rows_read: usize,
}

struct Headers(Vec<String>);

impl Headers {
    fn read(record: &StringRecord) -> Self {
        Headers(
            record
                .iter()
                .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
                .collect(),
        )
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|h| h == name)
    }
}

fn cell(record: &StringRecord, index: Option<usize>) -> &str {
    index.and_then(|i| record.get(i)).unwrap_or("")
}

fn integer(row: usize, column: &'static str, raw: &str) -> Result<Option<i32>, CsvError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i32>().map(Some).map_err(|_| CsvError::NotInteger {
        row,
        column,
        value: raw.to_string(),
    })
}

fn reader(data: &[u8]) -> csv::Reader<&[u8]> {
    ReaderBuilder::new().flexible(true).trim(Trim::All).from_reader(data)
}

/// Rows missing a name or position are skipped
pub fn parse_roster(data: &[u8]) -> Result<ParsedRoster, CsvError> {
    let mut rdr = reader(data);
    let headers = Headers::read(rdr.headers()?);

    let (Some(name_idx), Some(position_idx)) = (headers.index_of("name"), headers.index_of("position"))
    else {
        return Err(CsvError::Empty);
    };

    let mut rows = Vec::new();
    let mut rows_read = 0;

    for record in rdr.records() {
        let record = record?;
        rows_read += 1;

        let name = cell(&record, Some(name_idx));
        let position = cell(&record, Some(position_idx));
        if name.is_empty() || position.is_empty() {
            continue;
        }

        rows.push(RosterRow {
            name: name.to_string(),
            position: position.to_string(),
        });
    }

    if rows.is_empty() {
        return Err(CsvError::Empty);
    }

    Ok(ParsedRoster { rows, rows_read })
}

/// Missing stat columns and empty cells count as 0. Values are not checked for
/// sign or hits against at-bats.
pub fn parse_stats(data: &[u8]) -> Result<Vec<StatRow>, CsvError> {
    let mut rdr = reader(data);
    let headers = Headers::read(rdr.headers()?);

    let (Some(player_idx), Some(game_idx)) = (headers.index_of("player_id"), headers.index_of("game_id"))
    else {
        return Err(CsvError::Empty);
    };
    let field_idx = StatLine::FIELDS.map(|field| headers.index_of(field));

    let mut rows = Vec::new();

    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;

        if record.iter().all(str::is_empty) {
            continue;
        }

        let player_id = integer(row, "player_id", cell(&record, Some(player_idx)))?;
        let game_id = integer(row, "game_id", cell(&record, Some(game_idx)))?;
        let (Some(player_id), Some(game_id)) = (player_id, game_id) else {
            return Err(CsvError::MissingIds { row });
        };

        let mut values = [0; 12];
        for ((slot, field), idx) in values.iter_mut().zip(StatLine::FIELDS).zip(field_idx) {
            *slot = integer(row, field, cell(&record, idx))?.unwrap_or(0);
        }

        rows.push(StatRow {
            player_id,
            game_id,
            line: StatLine::from_values(values),
        });
    }

    if rows.is_empty() {
        return Err(CsvError::Empty);
    }

    Ok(rows)
}
