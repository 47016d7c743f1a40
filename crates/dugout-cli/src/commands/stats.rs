//! `dugout stats` command implementation
//!
//! The server has no paging; `list` fetches every matching row and slices
//! the requested page locally.

use dugout_common::stats::StatLine;
use tracing::debug;

use crate::api::{ApiClient, NewStat, StatFilters, StatListItem};
use crate::error::{CliError, Result};
use crate::output::{emit, success, table, OutputFormat};

/// One page of a fully fetched listing
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

/// Slice `items` into pages of `per_page` (all rows when `None`)
///
/// A page past the end is empty rather than an error.
pub fn paginate<T>(items: &[T], page: usize, per_page: Option<usize>) -> Result<Page<'_, T>> {
    if page == 0 {
        return Err(CliError::config("--page starts at 1"));
    }
    let per_page = match per_page {
        Some(0) => return Err(CliError::config("--per-page must be at least 1")),
        Some(n) => n,
        None => items.len().max(1),
    };

    let total_pages = items.len().div_ceil(per_page).max(1);
    let slice = items.chunks(per_page).nth(page - 1).unwrap_or(&[]);

    Ok(Page {
        items: slice,
        page,
        total_pages,
        total: items.len(),
    })
}

pub async fn list(
    client: &ApiClient,
    filters: &StatFilters,
    page: usize,
    per_page: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let rows = client.list_stats(filters).await?;
    debug!(total = rows.len(), "Fetched stat lines");
    let page = paginate(&rows, page, per_page)?;

    match format {
        OutputFormat::Table => {
            if page.total == 0 {
                println!("No stat lines match.");
                return Ok(());
            }
            println!("{}", render(page.items));
            println!("Page {} of {} ({} lines)", page.page, page.total_pages, page.total);
        },
        OutputFormat::Csv => emit(&to_csv(page.items)?, None)?,
        OutputFormat::Json => emit(&format!("{}\n", serde_json::to_string_pretty(page.items)?), None)?,
    }
    Ok(())
}

fn render(rows: &[StatListItem]) -> comfy_table::Table {
    let mut out = table(["ID", "Player", "Date", "Opponent", "AB", "H", "R", "RBI", "HR"]);
    for row in rows {
        out.add_row(vec![
            row.id.to_string(),
            row.name.clone(),
            row.date.to_string(),
            row.opponent.clone(),
            row.at_bats.to_string(),
            row.hits.to_string(),
            row.runs.to_string(),
            row.rbis.to_string(),
            row.home_runs.to_string(),
        ]);
    }
    out
}

/// Header row from the field names, one record per line
pub fn to_csv(rows: &[StatListItem]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Io(std::io::Error::new(e.error().kind(), e.to_string())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub async fn record(client: &ApiClient, player_id: i32, game_id: i32, line: StatLine) -> Result<()> {
    let created = client
        .record_stat(&NewStat {
            player_id,
            game_id,
            line,
        })
        .await?;

    match created.record {
        Some(stat) => success(&format!(
            "{} #{} ({} for {})",
            created.message, stat.id, stat.line.hits, stat.line.at_bats
        )),
        None => success(&created.message),
    }
    Ok(())
}

pub async fn remove(client: &ApiClient, id: i32) -> Result<()> {
    let deleted = client.remove_stat(id).await?;
    success(&deleted.message);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_paginate_slices() {
        let items: Vec<i32> = (1..=7).collect();

        let first = paginate(&items, 1, Some(3)).unwrap();
        assert_eq!(first.items, &[1, 2, 3]);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total, 7);

        let last = paginate(&items, 3, Some(3)).unwrap();
        assert_eq!(last.items, &[7]);

        let past = paginate(&items, 4, Some(3)).unwrap();
        assert!(past.items.is_empty());
    }

    #[test]
    fn test_paginate_defaults_to_everything() {
        let items = vec!["a", "b"];
        let page = paginate(&items, 1, None).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 1);

        let empty: Vec<i32> = Vec::new();
        let page = paginate(&empty, 1, None).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_paginate_rejects_zero() {
        let items = vec![1];
        assert!(paginate(&items, 0, Some(1)).is_err());
        assert!(paginate(&items, 1, Some(0)).is_err());
    }

    #[test]
    fn test_stats_csv() {
        let rows = vec![StatListItem {
            id: 1,
            name: "Ann".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            opponent: "Rivals, Inc".to_string(),
            at_bats: 4,
            hits: 2,
            runs: 1,
            rbis: 0,
            home_runs: 1,
        }];
        assert_eq!(
            to_csv(&rows).unwrap(),
            "id,name,date,opponent,at_bats,hits,runs,rbis,home_runs\n\
             1,Ann,2024-04-01,\"Rivals, Inc\",4,2,1,0,1\n"
        );
    }
}
