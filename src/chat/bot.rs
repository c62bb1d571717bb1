//! Conversation state and keyword dispatch.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use super::history::{ExportFormat, HistoryEntry, MessageHistory, Sender};
use crate::command::{Command, Responder};
use crate::profile::Profile;

/// Pause between wiping the conversation and re-introducing.
pub const CLEAR_PAUSE: Duration = Duration::from_millis(500);

/// Number of history entries included in a debug snapshot.
const SNAPSHOT_HISTORY: usize = 50;

/// What the front end should do in response to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show a bot message.
    Message(String),
    /// Wipe everything on screen.
    Clear,
    /// Wait before continuing.
    Pause(Duration),
}

/// Name recorded for a dispatch; unmatched input uses `default`.
fn dispatch_name(command: Option<Command>) -> &'static str {
    command.map_or("default", Command::name)
}

/// Conversation statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationStats {
    pub total_messages: usize,
    pub user_messages: usize,
    pub bot_messages: usize,
    pub conversation_started: bool,
    pub last_command: Option<&'static str>,
    /// Per-command counts over user messages; misses count as `unknown`.
    pub command_usage: BTreeMap<String, usize>,
    pub session_id: Uuid,
    pub session_start_time: Option<DateTime<Utc>>,
}

/// Point-in-time dump of the chatbot for debugging.
#[derive(Debug, Clone, Serialize)]
pub struct DebugSnapshot<'a> {
    pub timestamp: DateTime<Utc>,
    pub uptime_secs: i64,
    pub stats: ConversationStats,
    pub history: &'a [HistoryEntry],
}

/// The chatbot: a profile plus per-session conversation state.
pub struct Chatbot {
    profile: Profile,
    history: MessageHistory,
    session_id: Uuid,
    last_command: Option<&'static str>,
    conversation_started: bool,
    created_at: DateTime<Utc>,
}

impl Chatbot {
    pub fn new(profile: Profile) -> Self {
        let session_id = Uuid::new_v4();
        info!(%session_id, "Chatbot initialized");
        Self {
            profile,
            history: MessageHistory::new(),
            session_id,
            last_command: None,
            conversation_started: false,
            created_at: Utc::now(),
        }
    }

    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    pub const fn history(&self) -> &MessageHistory {
        &self.history
    }

    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub const fn last_command(&self) -> Option<&'static str> {
        self.last_command
    }

    pub const fn conversation_started(&self) -> bool {
        self.conversation_started
    }

    /// Processes one visitor message and returns what to show.
    ///
    /// Blank input is ignored and leaves no trace in the history.
    pub fn process_message(&mut self, message: &str) -> Vec<Reply> {
        if message.trim().is_empty() {
            return Vec::new();
        }

        self.record(Sender::User, message);

        let command = self.profile.commands.find_command(message);
        info!(
            command = dispatch_name(command),
            input = message,
            "Processing message"
        );

        let replies = self.execute(command);
        self.last_command = Some(dispatch_name(command));
        replies
    }

    fn execute(&mut self, command: Option<Command>) -> Vec<Reply> {
        let mut replies = Vec::new();

        if command == Some(Command::Clear) {
            self.history.clear();
            self.conversation_started = false;
            replies.push(Reply::Clear);
            replies.push(Reply::Pause(CLEAR_PAUSE));
        }

        let response = Responder::new(&self.profile).render(command);
        self.record(Sender::Bot, &response.history_text);
        replies.push(Reply::Message(response.text));

        if matches!(command, Some(Command::Intro | Command::Clear)) {
            self.conversation_started = true;
        }

        replies
    }

    fn record(&mut self, sender: Sender, content: &str) {
        let entry = HistoryEntry::new(sender, content, self.session_id);
        self.history.push(entry);
    }

    /// Returns up to `limit` of the most recent entries.
    pub fn get_history(&self, limit: usize) -> &[HistoryEntry] {
        self.history.recent(limit)
    }

    pub fn search_history(&self, query: &str) -> Vec<&HistoryEntry> {
        self.history.search(query)
    }

    pub fn get_stats(&self) -> ConversationStats {
        let entries = self.history.entries();
        let mut command_usage = BTreeMap::new();
        let mut user_messages = 0;

        for entry in entries.iter().filter(|e| e.sender == Sender::User) {
            user_messages += 1;
            let name = self
                .profile
                .commands
                .find_command(&entry.content)
                .map_or("unknown", Command::name);
            *command_usage.entry(name.to_string()).or_insert(0) += 1;
        }

        ConversationStats {
            total_messages: entries.len(),
            user_messages,
            bot_messages: entries.len() - user_messages,
            conversation_started: self.conversation_started,
            last_command: self.last_command,
            command_usage,
            session_id: self.session_id,
            session_start_time: self.history.first().map(|e| e.timestamp),
        }
    }

    pub fn export_history(&self, format: ExportFormat) -> serde_json::Result<String> {
        self.history.export(format, &self.profile.personal.name)
    }

    /// Drops all conversation state and starts a fresh session.
    pub fn reset(&mut self) {
        self.history.clear();
        self.session_id = Uuid::new_v4();
        self.last_command = None;
        self.conversation_started = false;
        info!(session_id = %self.session_id, "Chatbot state reset");
    }

    pub fn snapshot(&self) -> DebugSnapshot<'_> {
        let now = Utc::now();
        DebugSnapshot {
            timestamp: now,
            uptime_secs: (now - self.created_at).num_seconds(),
            stats: self.get_stats(),
            history: self.get_history(SNAPSHOT_HISTORY),
        }
    }

    /// Processes messages in order, handing each message's replies to `emit`.
    ///
    /// Waits `delay` after every message. A non-zero delay also honors the
    /// pauses inside a reply, such as the one after `clear`.
    pub async fn process_batch<I, S, F>(
        &mut self,
        messages: I,
        delay: Duration,
        mut emit: F,
    ) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&str, &[Reply]) -> anyhow::Result<()>,
    {
        for message in messages {
            let message = message.as_ref();
            let replies = self.process_message(message);
            emit(message, &replies)?;

            if !delay.is_zero() {
                let pause: Duration = replies
                    .iter()
                    .filter_map(|reply| match reply {
                        Reply::Pause(duration) => Some(*duration),
                        Reply::Message(_) | Reply::Clear => None,
                    })
                    .sum();
                debug!(
                    delay_ms = delay.as_millis(),
                    pause_ms = pause.as_millis(),
                    "Waiting before next message"
                );
                tokio::time::sleep(delay + pause).await;
            }
        }
        Ok(())
    }
}

/// Context suggestions for the visitor's next message.
pub fn suggested_responses(last_message: &str) -> Vec<&'static str> {
    let normalized = last_message.trim().to_lowercase();
    let mut suggestions = Vec::new();

    if normalized.contains("skill") || normalized.contains("tech") {
        suggestions.push("Tell me more about your projects");
    }
    if normalized.contains("education") || normalized.contains("study") {
        suggestions.push("Show me your resume");
    }
    if normalized.contains("contact") || normalized.contains("reach") {
        suggestions.push("What's your location?");
    }

    suggestions.push("help");
    suggestions
}
