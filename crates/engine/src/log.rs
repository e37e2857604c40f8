//! JSON-lines event log.
//!
//! One object per line:
//!
//! ```text
//! {"event":"start","title":"mines","frame":0,"value":1234}
//! {"event":"status","title":"mines","frame":812,"value":"won"}
//! ```
//!
//! A failed write turns the log off; gameplay never stops for logging.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::Result;
use serde::Serialize;

use crate::types::{Status, TitleKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Start,
    Status,
    Score,
    Restart,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventValue {
    Number(u64),
    Text(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub event: EventKind,
    pub title: &'static str,
    pub frame: u64,
    pub value: EventValue,
}

enum Target {
    Off,
    File(BufWriter<File>),
    Memory(Vec<u8>),
}

pub struct EventLog {
    target: Target,
    line: Vec<u8>,
}

impl EventLog {
    /// A log that drops everything
    pub fn disabled() -> Self {
        Self {
            target: Target::Off,
            line: Vec::new(),
        }
    }

    /// Append to `path`, creating it if needed
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            target: Target::File(BufWriter::new(file)),
            line: Vec::with_capacity(128),
        })
    }

    /// Keep lines in memory; read them back with [`EventLog::contents`]
    pub fn in_memory() -> Self {
        Self {
            target: Target::Memory(Vec::new()),
            line: Vec::with_capacity(128),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.target, Target::Off)
    }

    /// Lines captured by an in-memory log
    pub fn contents(&self) -> &str {
        match &self.target {
            Target::Memory(buf) => std::str::from_utf8(buf).unwrap_or(""),
            _ => "",
        }
    }

    pub fn record(&mut self, record: &LogRecord) {
        if !self.is_enabled() {
            return;
        }
        self.line.clear();
        if serde_json::to_writer(&mut self.line, record).is_err() {
            return;
        }
        self.line.push(b'\n');

        let ok = match &mut self.target {
            Target::Off => true,
            Target::File(w) => w.write_all(&self.line).is_ok(),
            Target::Memory(buf) => {
                buf.extend_from_slice(&self.line);
                true
            }
        };
        if !ok {
            self.target = Target::Off;
        }
    }

    pub fn event(&mut self, event: EventKind, title: TitleKind, frame: u64, value: EventValue) {
        self.record(&LogRecord {
            event,
            title: title.as_str(),
            frame,
            value,
        });
    }

    pub fn status(&mut self, title: TitleKind, frame: u64, status: Status) {
        self.event(EventKind::Status, title, frame, EventValue::Text(status.as_str()));
    }

    pub fn score(&mut self, title: TitleKind, frame: u64, score: u32) {
        self.event(EventKind::Score, title, frame, EventValue::Number(score as u64));
    }

    /// Flush buffered lines to disk
    pub fn finish(&mut self) {
        if let Target::File(w) = &mut self.target {
            if w.flush().is_err() {
                self.target = Target::Off;
            }
        }
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::disabled()
    }
}
