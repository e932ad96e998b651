use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};

use crate::game::ActionRecord;

/// Log severity for engine events.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(s)
    }
}

/// The logging capability the engine writes human-readable events to: one
/// entry per ante, deal, action, street transition, and pot award. Each
/// engine carries its own handle; there is no global registry.
pub trait GameLogger {
    fn log(&mut self, level: LogLevel, message: &str);

    fn debug(&mut self, message: &str) {
        self.log(LogLevel::Debug, message);
    }
    fn info(&mut self, message: &str) {
        self.log(LogLevel::Info, message);
    }
    fn warn(&mut self, message: &str) {
        self.log(LogLevel::Warn, message);
    }
    fn error(&mut self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Discards everything. The default when a caller has no use for hand logs.
#[derive(Debug, Default)]
pub struct NullLogger;

impl GameLogger for NullLogger {
    fn log(&mut self, _level: LogLevel, _message: &str) {}
}

/// Writes one line per event to any [`Write`] sink. Write errors are
/// swallowed; logging must never abort a hand.
#[derive(Debug)]
pub struct WriterLogger<W: Write> {
    out: W,
}

impl<W: Write> WriterLogger<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> GameLogger for WriterLogger<W> {
    fn log(&mut self, level: LogLevel, message: &str) {
        let _ = writeln!(self.out, "[{}] {}", level, message);
    }
}

/// A seat's winnings from one hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Winner {
    pub seat: usize,
    pub amount: u32,
}

/// Complete record of one stud hand: every chip-moving action, the final
/// pot, and who won what. Serialized to JSONL for hand-history storage and
/// replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// RNG seed for the deck (enables deterministic replay)
    pub seed: Option<u64>,
    /// Chronological list of every logged action
    pub actions: Vec<ActionRecord>,
    /// Final pot size distributed at hand end
    pub pot: u32,
    /// Who won which share of the pot
    pub winners: Vec<Winner>,
    /// Whether the hand reached showdown
    pub showdown: bool,
    /// Timestamp when the hand was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`HandRecord`]s to a JSONL file, one record per line.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
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
