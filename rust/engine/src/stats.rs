//! Personal statistics over a completion log.
//!
//! A log may hold several records for the same day (a quit, then a later
//! finish). Each day keeps one result: a ranked completion is never replaced,
//! otherwise the most recent record wins.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::date::PuzzleDate;
use crate::logger::CompletionRecord;

/// How many days `recent` lists, newest first.
pub const RECENT_DAYS: usize = 30;

/// Outcome of one puzzle day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayResult {
    pub date: PuzzleDate,
    pub secs: Option<u64>,
    /// Finished without revealing the answers
    pub completed: bool,
}

impl From<&CompletionRecord> for DayResult {
    fn from(rec: &CompletionRecord) -> Self {
        Self {
            date: rec.date,
            secs: rec.completion_secs,
            completed: rec.is_ranked(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub days_played: usize,
    pub completions: usize,
    pub did_not_complete: usize,
    pub best_secs: Option<u64>,
    pub average_secs: Option<f64>,
    /// Completions per `YYYY-MM`
    pub completions_by_month: BTreeMap<String, usize>,
    pub recent: Vec<DayResult>,
}

/// One result per day, in date order.
pub fn daily_results(records: &[CompletionRecord]) -> BTreeMap<PuzzleDate, DayResult> {
    let mut days: BTreeMap<PuzzleDate, DayResult> = BTreeMap::new();
    for rec in records {
        match days.get(&rec.date) {
            Some(existing) if existing.completed => {}
            _ => {
                days.insert(rec.date, DayResult::from(rec));
            }
        }
    }
    days
}

pub fn player_stats(records: &[CompletionRecord]) -> PlayerStats {
    let days = daily_results(records);

    let times: Vec<u64> = days
        .values()
        .filter(|d| d.completed)
        .filter_map(|d| d.secs)
        .collect();
    let completions = days.values().filter(|d| d.completed).count();

    let mut completions_by_month = BTreeMap::new();
    for day in days.values().filter(|d| d.completed) {
        let month = day.date.naive().format("%Y-%m").to_string();
        *completions_by_month.entry(month).or_insert(0) += 1;
    }

    PlayerStats {
        days_played: days.len(),
        completions,
        did_not_complete: days.len() - completions,
        best_secs: times.iter().copied().min(),
        average_secs: if times.is_empty() {
            None
        } else {
            Some(times.iter().sum::<u64>() as f64 / times.len() as f64)
        },
        completions_by_month,
        recent: days.values().rev().take(RECENT_DAYS).cloned().collect(),
    }
}
