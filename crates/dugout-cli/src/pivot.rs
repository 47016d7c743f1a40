//! Reshape flat trend rows into a date axis with one series per player
//!
//! The server returns one row per (date, player). Charts and tables want the
//! transpose: the sorted set of dates down one side and a column per player,
//! with a blank where that player has no line on that date.

use chrono::NaiveDate;
use comfy_table::Table;
use dugout_common::stats::TrendMetric;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::{BTreeSet, HashMap};

use crate::api::TrendRow;
use crate::error::{CliError, Result};
use crate::output::{table, value_to_string};

/// One player's values aligned with [`TrendTable::dates`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub player: String,
    pub values: Vec<Option<Value>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendTable {
    pub metric: TrendMetric,
    pub dates: Vec<NaiveDate>,
    pub series: Vec<Series>,
}

impl TrendTable {
    /// Pivot `rows` on date
    ///
    /// With an empty `players` selection every player in `rows` gets a series,
    /// ordered by name. Otherwise only the selected players are kept, in the
    /// order given; a selected player with no rows gets an all-blank series.
    pub fn pivot(metric: TrendMetric, rows: &[TrendRow], players: &[String]) -> Self {
        let mut selected: Vec<&str> = Vec::new();
        for name in players.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
            if !selected.contains(&name) {
                selected.push(name);
            }
        }

        let kept: Vec<&TrendRow> = rows
            .iter()
            .filter(|row| selected.is_empty() || selected.contains(&row.player_name.as_str()))
            .collect();

        let dates: Vec<NaiveDate> = kept
            .iter()
            .map(|row| row.date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let names: Vec<&str> = if selected.is_empty() {
            kept.iter()
                .map(|row| row.player_name.as_str())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        } else {
            selected
        };

        let cells: HashMap<(NaiveDate, &str), &Value> = kept
            .iter()
            .filter_map(|row| {
                row.value(metric)
                    .map(|value| ((row.date, row.player_name.as_str()), value))
            })
            .collect();

        let series = names
            .into_iter()
            .map(|name| Series {
                player: name.to_string(),
                values: dates
                    .iter()
                    .map(|date| cells.get(&(*date, name)).map(|v| (*v).clone()))
                    .collect(),
            })
            .collect();

        Self {
            metric,
            dates,
            series,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    fn cell(&self, series: &Series, index: usize) -> String {
        series
            .values
            .get(index)
            .and_then(Option::as_ref)
            .map(value_to_string)
            .unwrap_or_default()
    }

    pub fn to_table(&self) -> Table {
        let header = std::iter::once("Date".to_string())
            .chain(self.series.iter().map(|s| s.player.clone()))
            .collect::<Vec<_>>();
        let mut out = table(header);

        for (i, date) in self.dates.iter().enumerate() {
            let row = std::iter::once(date.to_string())
                .chain(self.series.iter().map(|s| self.cell(s, i)))
                .collect::<Vec<_>>();
            out.add_row(row);
        }
        out
    }

    /// `date,<player>,<player>...` with blank cells for missing points
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header = vec!["date".to_string()];
        header.extend(self.series.iter().map(|s| s.player.clone()));
        writer.write_record(&header)?;

        for (i, date) in self.dates.iter().enumerate() {
            let mut record = vec![date.to_string()];
            record.extend(self.series.iter().map(|s| self.cell(s, i)));
            writer.write_record(&record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| CliError::Io(std::io::Error::new(e.error().kind(), e.to_string())))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// `{metric, label, dates, series: [{player, values}]}`; missing points are null
    pub fn to_json(&self) -> Value {
        json!({
            "metric": self.metric.column(),
            "label": self.metric.label(),
            "dates": self.dates,
            "series": self.series,
        })
    }
}
