//! A single player's attempt at a board.
//!
//! The session tracks which positions are selected, which Sets have been found,
//! whether the player gave up and revealed the answers, and how long they have
//! spent on the puzzle. Time is passed in explicitly so callers (and tests)
//! control the clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::warn;

use crate::cards::Card;
use crate::date::PuzzleDate;
use crate::errors::PuzzleError;
use crate::finder::{find_all_sets, parse_set_key, set_key, set_label, Triple};
use crate::rules::is_valid_set;

/// What happened after a card was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Position added; `selected` cards are now picked
    Selected { selected: usize },
    /// Position was already picked and has been released
    Deselected { selected: usize },
    /// A new Set was found
    Found {
        triple: Triple,
        label: String,
        found: usize,
        remaining: usize,
    },
    /// The last Set on the board was found
    Completed {
        triple: Triple,
        label: String,
        elapsed: Duration,
    },
    AlreadyFound { triple: Triple },
    NotASet { triple: Triple },
}

#[derive(Debug, Clone, Default)]
struct Timer {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl Timer {
    fn start(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    fn stop(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += now.saturating_duration_since(since);
        }
    }

    fn elapsed(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + now.saturating_duration_since(since),
            None => self.accumulated,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PuzzleSession {
    board: Vec<Card>,
    all_sets: Vec<Triple>,
    selected: Vec<usize>,
    found: Vec<Triple>,
    showed_all_sets: bool,
    timer: Timer,
    completion_time: Option<Duration>,
}

impl PuzzleSession {
    pub fn new(board: Vec<Card>) -> Self {
        let all_sets = find_all_sets(&board);
        Self {
            board,
            all_sets,
            selected: Vec::with_capacity(3),
            found: Vec::new(),
            showed_all_sets: false,
            timer: Timer::default(),
            completion_time: None,
        }
    }

    /// Rebuilds a session from saved progress on the same board.
    ///
    /// Keys that do not name a Set on this board are dropped.
    pub fn restore(board: Vec<Card>, progress: &PuzzleProgress) -> Self {
        let mut session = Self::new(board);
        for key in &progress.found_set_keys {
            match parse_set_key(key) {
                Some(triple) if session.all_sets.contains(&triple) => {
                    if !session.found.contains(&triple) {
                        session.found.push(triple);
                    }
                }
                _ => warn!(key = %key, date = %progress.date, "ignoring unknown set key in saved progress"),
            }
        }
        session.timer.accumulated = Duration::from_secs(progress.elapsed_seconds);
        session
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn all_sets(&self) -> &[Triple] {
        &self.all_sets
    }

    pub fn found_sets(&self) -> &[Triple] {
        &self.found
    }

    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Number of Sets to find: every Set actually on the board.
    pub fn goal(&self) -> usize {
        self.all_sets.len()
    }

    pub fn remaining(&self) -> usize {
        self.goal().saturating_sub(self.found.len())
    }

    pub fn is_complete(&self) -> bool {
        self.found.len() >= self.goal()
    }

    pub fn showed_all_sets(&self) -> bool {
        self.showed_all_sets
    }

    /// Completed without revealing the answers.
    pub fn is_ranked(&self) -> bool {
        self.is_complete() && !self.showed_all_sets
    }

    pub fn completion_time(&self) -> Option<Duration> {
        self.completion_time
    }

    pub fn start(&mut self, now: Instant) {
        self.timer.start(now);
    }

    pub fn pause(&mut self, now: Instant) {
        self.timer.stop(now);
    }

    pub fn resume(&mut self, now: Instant) {
        if !self.is_complete() {
            self.timer.start(now);
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.running_since.is_some()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.timer.elapsed(now)
    }

    /// Toggles `index`; the third distinct pick is checked as a Set and the
    /// selection is cleared.
    pub fn select(&mut self, index: usize, now: Instant) -> Result<SelectionOutcome, PuzzleError> {
        self.check_playable()?;
        self.check_position(index)?;

        if let Some(pos) = self.selected.iter().position(|&i| i == index) {
            self.selected.remove(pos);
            return Ok(SelectionOutcome::Deselected {
                selected: self.selected.len(),
            });
        }

        self.selected.push(index);
        if self.selected.len() < 3 {
            return Ok(SelectionOutcome::Selected {
                selected: self.selected.len(),
            });
        }

        let triple = [self.selected[0], self.selected[1], self.selected[2]];
        self.selected.clear();
        Ok(self.evaluate(triple, now))
    }

    /// Checks three positions at once, in any order.
    pub fn submit(&mut self, triple: Triple, now: Instant) -> Result<SelectionOutcome, PuzzleError> {
        self.check_playable()?;
        for &i in &triple {
            self.check_position(i)?;
        }
        self.selected.clear();
        if triple[0] == triple[1] || triple[1] == triple[2] || triple[0] == triple[2] {
            return Ok(SelectionOutcome::NotASet { triple });
        }
        Ok(self.evaluate(triple, now))
    }

    /// Gives up on finding the rest: returns every Set with its label and marks
    /// the session as unranked.
    pub fn reveal_all(&mut self) -> Vec<(String, Triple)> {
        self.showed_all_sets = true;
        self.labelled_sets()
    }

    pub fn labelled_sets(&self) -> Vec<(String, Triple)> {
        self.all_sets
            .iter()
            .enumerate()
            .map(|(i, t)| (set_label(i), *t))
            .collect()
    }

    /// Snapshot for resuming later.
    pub fn progress(&self, date: PuzzleDate, now: Instant, wall: DateTime<Utc>) -> PuzzleProgress {
        PuzzleProgress {
            date,
            elapsed_seconds: self.elapsed(now).as_secs(),
            found_set_keys: self.found.iter().map(|t| set_key(*t)).collect(),
            last_updated: wall,
        }
    }

    fn check_playable(&self) -> Result<(), PuzzleError> {
        if self.is_complete() {
            Err(PuzzleError::SessionFinished)
        } else {
            Ok(())
        }
    }

    fn check_position(&self, index: usize) -> Result<(), PuzzleError> {
        if index >= self.board.len() {
            return Err(PuzzleError::PositionOutOfRange {
                position: index,
                board_size: self.board.len(),
            });
        }
        Ok(())
    }

    fn evaluate(&mut self, mut triple: Triple, now: Instant) -> SelectionOutcome {
        triple.sort_unstable();
        let [i, j, k] = triple;
        if !is_valid_set(&self.board[i], &self.board[j], &self.board[k]) {
            return SelectionOutcome::NotASet { triple };
        }
        if self.found.contains(&triple) {
            return SelectionOutcome::AlreadyFound { triple };
        }
        self.found.push(triple);
        let label = self
            .all_sets
            .iter()
            .position(|t| *t == triple)
            .map(set_label)
            .unwrap_or_default();

        if self.is_complete() {
            self.timer.stop(now);
            let elapsed = self.timer.elapsed(now);
            self.completion_time = Some(elapsed);
            SelectionOutcome::Completed {
                triple,
                label,
                elapsed,
            }
        } else {
            SelectionOutcome::Found {
                triple,
                label,
                found: self.found.len(),
                remaining: self.remaining(),
            }
        }
    }
}

/// Saved state of an unfinished daily puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleProgress {
    pub date: PuzzleDate,
    pub elapsed_seconds: u64,
    pub found_set_keys: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl PuzzleProgress {
    /// Progress from an earlier day can no longer be resumed.
    pub fn is_stale(&self, today: PuzzleDate) -> bool {
        self.date != today
    }
}

/// `"Xm Ys"`, or `"Ys"` under a minute.
pub fn format_elapsed(seconds: u64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::daily_puzzle_for;

    // 2025-01-01 / 4 sets: [0,2,7] [4,6,11] [6,8,9] [7,10,11]
    fn session() -> PuzzleSession {
        PuzzleSession::new(daily_puzzle_for("2025-01-01", 4, 12).unwrap().board)
    }

    #[test]
    fn third_pick_evaluates_and_clears() {
        let mut s = session();
        let t0 = Instant::now();
        s.start(t0);
        assert_eq!(s.select(7, t0).unwrap(), SelectionOutcome::Selected { selected: 1 });
        assert_eq!(s.select(0, t0).unwrap(), SelectionOutcome::Selected { selected: 2 });
        let outcome = s.select(2, t0).unwrap();
        assert_eq!(
            outcome,
            SelectionOutcome::Found {
                triple: [0, 2, 7],
                label: "A".into(),
                found: 1,
                remaining: 3,
            }
        );
        assert!(s.selected().is_empty());
    }

    #[test]
    fn reselecting_releases_a_card() {
        let mut s = session();
        let t0 = Instant::now();
        s.select(3, t0).unwrap();
        assert_eq!(s.select(3, t0).unwrap(), SelectionOutcome::Deselected { selected: 0 });
    }

    #[test]
    fn duplicate_and_invalid_triples() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit([11, 4, 6], t0).unwrap();
        assert_eq!(
            s.submit([6, 11, 4], t0).unwrap(),
            SelectionOutcome::AlreadyFound { triple: [4, 6, 11] }
        );
        assert_eq!(
            s.submit([0, 1, 2], t0).unwrap(),
            SelectionOutcome::NotASet { triple: [0, 1, 2] }
        );
        assert_eq!(
            s.submit([1, 1, 2], t0).unwrap(),
            SelectionOutcome::NotASet { triple: [1, 1, 2] }
        );
        assert_eq!(s.found_sets().len(), 1);
    }

    #[test]
    fn out_of_range_position_is_rejected() {
        let mut s = session();
        assert_eq!(
            s.select(12, Instant::now()),
            Err(PuzzleError::PositionOutOfRange {
                position: 12,
                board_size: 12
            })
        );
    }

    #[test]
    fn finding_every_set_completes_with_elapsed_time() {
        let mut s = session();
        let t0 = Instant::now();
        s.start(t0);
        s.pause(t0 + Duration::from_secs(10));
        s.resume(t0 + Duration::from_secs(100));
        let t1 = t0 + Duration::from_secs(130);
        for t in [[0, 2, 7], [4, 6, 11], [6, 8, 9]] {
            s.submit(t, t1).unwrap();
        }
        let done = s.submit([7, 10, 11], t1).unwrap();
        assert_eq!(
            done,
            SelectionOutcome::Completed {
                triple: [7, 10, 11],
                label: "D".into(),
                elapsed: Duration::from_secs(40),
            }
        );
        assert!(s.is_ranked());
        assert!(!s.is_running());
        assert_eq!(s.completion_time(), Some(Duration::from_secs(40)));
        assert_eq!(s.select(0, t1), Err(PuzzleError::SessionFinished));
    }

    #[test]
    fn revealing_makes_completion_unranked() {
        let mut s = session();
        let sets = s.reveal_all();
        assert_eq!(sets.len(), 4);
        assert_eq!(sets[3], ("D".to_string(), [7, 10, 11]));
        assert!(s.showed_all_sets());
        let t0 = Instant::now();
        for (_, t) in sets {
            s.submit(t, t0).unwrap();
        }
        assert!(s.is_complete());
        assert!(!s.is_ranked());
    }

    #[test]
    fn progress_round_trips_through_restore() {
        let mut s = session();
        let t0 = Instant::now();
        s.start(t0);
        s.submit([6, 8, 9], t0).unwrap();
        let date: PuzzleDate = "2025-01-01".parse().unwrap();
        let progress = s.progress(date, t0 + Duration::from_secs(75), Utc::now());
        assert_eq!(progress.elapsed_seconds, 75);
        assert_eq!(progress.found_set_keys, vec!["6-8-9".to_string()]);

        let json = serde_json::to_string(&progress).unwrap();
        assert!(json.contains("\"foundSetKeys\""));
        let loaded: PuzzleProgress = serde_json::from_str(&json).unwrap();

        let restored = PuzzleSession::restore(s.board().to_vec(), &loaded);
        assert_eq!(restored.found_sets(), &[[6, 8, 9]]);
        assert_eq!(restored.elapsed(Instant::now()), Duration::from_secs(75));
        assert!(!restored.is_running());
    }

    #[test]
    fn restore_skips_unknown_keys() {
        let board = session().board().to_vec();
        let progress = PuzzleProgress {
            date: "2025-01-01".parse().unwrap(),
            elapsed_seconds: 3,
            found_set_keys: vec!["0-1-2".into(), "junk".into(), "0-2-7".into()],
            last_updated: Utc::now(),
        };
        let restored = PuzzleSession::restore(board, &progress);
        assert_eq!(restored.found_sets(), &[[0, 2, 7]]);
    }

    #[test]
    fn stale_progress_detection() {
        let progress = PuzzleProgress {
            date: "2025-01-01".parse().unwrap(),
            elapsed_seconds: 0,
            found_set_keys: vec![],
            last_updated: Utc::now(),
        };
        assert!(!progress.is_stale("2025-01-01".parse().unwrap()));
        assert!(progress.is_stale("2025-01-02".parse().unwrap()));
    }

    #[test]
    fn board_without_sets_is_already_complete() {
        let board = daily_puzzle_for("2025-01-01", 0, 12).unwrap().board;
        let s = PuzzleSession::new(board);
        assert_eq!(s.goal(), 0);
        assert!(s.is_complete());
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(0), "0s");
        assert_eq!(format_elapsed(59), "59s");
        assert_eq!(format_elapsed(61), "1m 1s");
        assert_eq!(format_elapsed(3600), "60m 0s");
    }
}
