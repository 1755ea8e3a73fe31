use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, read_to_string, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::date::PuzzleDate;
use crate::session::PuzzleSession;

/// Outcome of one player's daily puzzle, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Puzzle day (YYYY-MM-DD)
    pub date: PuzzleDate,
    /// Seconds spent on the puzzle; `None` when abandoned before any play
    #[serde(default)]
    pub completion_secs: Option<u64>,
    /// The player revealed every Set; such results are not ranked
    #[serde(default)]
    pub showed_all_sets: bool,
    /// The puzzle was left unfinished
    #[serde(default)]
    pub incomplete: bool,
    /// Number of Sets found
    #[serde(default)]
    pub found: usize,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl CompletionRecord {
    pub fn from_session(date: PuzzleDate, session: &PuzzleSession, elapsed_secs: u64) -> Self {
        Self {
            date,
            completion_secs: Some(elapsed_secs),
            showed_all_sets: session.showed_all_sets(),
            incomplete: !session.is_complete(),
            found: session.found_sets().len(),
            ts: None,
        }
    }

    /// Eligible for the daily leaderboard.
    pub fn is_ranked(&self) -> bool {
        !self.incomplete && !self.showed_all_sets && self.completion_secs.is_some()
    }
}

pub struct CompletionLogger {
    writer: Option<BufWriter<File>>,
}

impl CompletionLogger {
    /// Opens `path` for appending, creating parent directories as needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
        })
    }

    /// A logger that accepts records and writes nothing.
    pub fn disabled() -> Self {
        Self { writer: None }
    }

    pub fn write(&mut self, record: &CompletionRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

/// A completion log read back from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionLog {
    pub records: Vec<CompletionRecord>,
    /// Lines that are not valid records
    pub corrupted: usize,
    /// The last line has no trailing newline and does not parse, usually a
    /// write still in progress
    pub truncated: bool,
}

impl CompletionLog {
    /// Parses JSONL content, skipping blank and unparsable lines.
    pub fn parse(content: &str) -> Self {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        let mut log = CompletionLog::default();
        for (i, line) in lines.iter().enumerate() {
            match serde_json::from_str::<CompletionRecord>(line) {
                Ok(rec) => log.records.push(rec),
                Err(_) if i == lines.len() - 1 && !has_trailing_nl => log.truncated = true,
                Err(_) => log.corrupted += 1,
            }
        }
        log
    }

    /// Records logged for `date`, oldest first.
    pub fn for_date(&self, date: PuzzleDate) -> impl Iterator<Item = &CompletionRecord> {
        self.records.iter().filter(move |r| r.date == date)
    }

    /// The day was finished or revealed and cannot be played again.
    pub fn is_closed(&self, date: PuzzleDate) -> bool {
        self.for_date(date).any(|r| r.is_ranked() || r.showed_all_sets)
    }
}

/// Reads a JSONL completion log. Only I/O failures are errors; bad lines are
/// reported through [`CompletionLog`].
pub fn read_completions<P: AsRef<Path>>(path: P) -> std::io::Result<CompletionLog> {
    let content = read_to_string(path)?;
    Ok(CompletionLog::parse(&content))
}
