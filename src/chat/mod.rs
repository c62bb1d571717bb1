//! Conversation with the portfolio bot.
//!
//! [`Chatbot`] owns the conversation state and dispatches keywords;
//! [`ChatSession`] is the interactive REPL on top of it.

/// Conversation state and keyword dispatch.
pub mod bot;
/// Slash command parsing and autocomplete.
pub mod command;
/// Bounded message history and export.
pub mod history;
mod session;
mod ui;

pub use bot::{Chatbot, ConversationStats, Reply, suggested_responses};
pub use history::{ExportFormat, HistoryEntry, MessageHistory, Sender};
pub use session::{ChatSession, SessionConfig};
