//! Bounded in-memory message history.
//!
//! The history is for display, search, statistics and export only. Response
//! selection never looks at it.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Once the history holds more than this many entries it is truncated.
pub const HISTORY_CAPACITY: usize = 100;

/// Number of most recent entries kept after truncation.
pub const HISTORY_RETAIN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One recorded message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub session: Uuid,
}

impl HistoryEntry {
    pub fn new(sender: Sender, content: impl Into<String>, session: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            content: content.into(),
            timestamp: Utc::now(),
            session,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown export format '{0}' (expected 'json' or 'text')")]
pub struct ExportFormatError(String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for ExportFormat {
    type Err = ExportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            other => Err(ExportFormatError(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// Append-only message log with a hard cap.
#[derive(Debug, Clone, Default)]
pub struct MessageHistory {
    entries: Vec<HistoryEntry>,
}

impl MessageHistory {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry. Returns `true` if the history was truncated.
    pub fn push(&mut self, entry: HistoryEntry) -> bool {
        self.entries.push(entry);

        if self.entries.len() > HISTORY_CAPACITY {
            let excess = self.entries.len() - HISTORY_RETAIN;
            self.entries.drain(..excess);
            debug!(retained = HISTORY_RETAIN, "Truncated message history");
            return true;
        }
        false
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns up to `limit` of the most recent entries, oldest first.
    pub fn recent(&self, limit: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    /// Case-insensitive substring search over message content.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&HistoryEntry> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| entry.content.to_lowercase().contains(&term))
            .collect()
    }

    /// Serializes the history.
    ///
    /// `bot_name` labels bot lines in the text format; user lines read `You`.
    pub fn export(&self, format: ExportFormat, bot_name: &str) -> serde_json::Result<String> {
        match format {
            ExportFormat::Json => serde_json::to_string_pretty(&self.entries),
            ExportFormat::Text => Ok(self
                .entries
                .iter()
                .map(|entry| format_text_line(entry, bot_name))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }
}

fn format_text_line(entry: &HistoryEntry, bot_name: &str) -> String {
    let time = entry.timestamp.with_timezone(&Local).format("%H:%M:%S");
    let sender = match entry.sender {
        Sender::User => "You",
        Sender::Bot => bot_name,
    };
    format!("[{time}] {sender}: {}", entry.content)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(sender: Sender, content: &str) -> HistoryEntry {
        HistoryEntry::new(sender, content, Uuid::nil())
    }

    fn filled(count: usize) -> MessageHistory {
        let mut history = MessageHistory::new();
        for i in 0..count {
            history.push(entry(Sender::User, &format!("message {i}")));
        }
        history
    }

    #[test]
    fn test_push_below_capacity_keeps_everything() {
        let history = filled(HISTORY_CAPACITY);
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.first().unwrap().content, "message 0");
    }

    #[test]
    fn test_push_over_capacity_keeps_newest() {
        let mut history = filled(HISTORY_CAPACITY);
        let truncated = history.push(entry(Sender::Bot, "overflow"));

        assert!(truncated);
        assert_eq!(history.len(), HISTORY_RETAIN);
        assert_eq!(history.entries().last().unwrap().content, "overflow");
        assert_eq!(history.first().unwrap().content, "message 51");
    }

    #[test]
    fn test_recent_returns_tail_in_order() {
        let history = filled(5);
        let recent: Vec<_> = history.recent(2).iter().map(|e| e.content.as_str()).collect();
        assert_eq!(recent, vec!["message 3", "message 4"]);
        assert_eq!(history.recent(10).len(), 5);
        assert!(history.recent(0).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut history = MessageHistory::new();
        history.push(entry(Sender::User, "Show me SKILLS"));
        history.push(entry(Sender::Bot, "My skills are..."));
        history.push(entry(Sender::User, "contact"));

        assert_eq!(history.search("skills").len(), 2);
        assert_eq!(history.search("  Contact ").len(), 1);
        assert!(history.search("   ").is_empty());
        assert!(history.search("resume").is_empty());
    }

    #[test]
    fn test_export_json_round_trips() {
        let mut history = MessageHistory::new();
        history.push(entry(Sender::User, "help"));

        let json = history.export(ExportFormat::Json, "Ada").unwrap();
        let parsed: Vec<HistoryEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, history.entries());
        assert!(json.contains("\"sender\": \"user\""));
    }

    #[test]
    fn test_export_text_labels_senders() {
        let mut history = MessageHistory::new();
        history.push(entry(Sender::User, "hi"));
        history.push(entry(Sender::Bot, "hello"));

        let text = history.export(ExportFormat::Text, "Ada").unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] You: hi"));
        assert!(lines[1].ends_with("] Ada: hello"));
    }

    #[test]
    fn test_export_empty_history() {
        let history = MessageHistory::new();
        assert_eq!(history.export(ExportFormat::Json, "Ada").unwrap(), "[]");
        assert_eq!(history.export(ExportFormat::Text, "Ada").unwrap(), "");
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!("json".parse(), Ok(ExportFormat::Json));
        assert_eq!("TEXT".parse(), Ok(ExportFormat::Text));
        assert_eq!("txt".parse(), Ok(ExportFormat::Text));
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
