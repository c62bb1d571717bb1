//! Chat mode UI components.

use chrono::{DateTime, Local, Utc};

use super::bot::ConversationStats;
use super::command::SLASH_COMMANDS;
use super::history::{HistoryEntry, Sender};
use crate::command::Command;
use crate::profile::Profile;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current local time as `HH:MM`.
pub fn current_time() -> String {
    Local::now().format("%H:%M").to_string()
}

pub fn last_seen_text() -> String {
    format!("last seen today at {}", current_time())
}

fn local_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

pub fn print_header(profile: &Profile) {
    println!(
        "{} {} · {}",
        Style::header(&profile.personal.name),
        Style::secondary(&profile.personal.title),
        Style::version(format!("folio v{VERSION}"))
    );
    println!("{}", Style::hint(last_seen_text()));
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

/// Prints a bot message, prefixed with the bot's name and optional time.
pub fn print_bot_message(name: &str, text: &str, show_timestamp: bool) {
    if show_timestamp {
        println!(
            "{} {}",
            Style::bot(name),
            Style::timestamp(current_time())
        );
    } else {
        println!("{}", Style::bot(name));
    }
    for line in text.lines() {
        println!("  {line}");
    }
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Keywords"));
    for cmd in Command::ALL {
        println!(
            "  {}  {}",
            Style::command(format!("{:10}", cmd.name())),
            Style::secondary(cmd.description())
        );
    }
    println!();
    println!("{}", Style::header("Slash commands"));
    for (cmd, desc) in SLASH_COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{cmd:10}")),
            Style::secondary(desc)
        );
    }
    println!();
}

pub fn print_stats(stats: &ConversationStats) {
    println!("{}", Style::header("Statistics"));
    println!(
        "  {}         {}",
        Style::label("session"),
        Style::value(stats.session_id)
    );
    println!(
        "  {}        {}",
        Style::label("messages"),
        Style::value(format!(
            "{} ({} from you, {} from me)",
            stats.total_messages, stats.user_messages, stats.bot_messages
        ))
    );
    println!(
        "  {}         {}",
        Style::label("started"),
        Style::value(stats.session_start_time.map_or_else(|| "-".to_string(), local_time))
    );
    println!(
        "  {}    {}",
        Style::label("last command"),
        Style::value(stats.last_command.unwrap_or("-"))
    );
    if !stats.command_usage.is_empty() {
        println!("  {}", Style::label("usage"));
        for (name, count) in &stats.command_usage {
            println!("    {}  {}", Style::command(format!("{name:10}")), count);
        }
    }
    println!();
}

pub fn print_entries(entries: &[&HistoryEntry], bot_name: &str) {
    if entries.is_empty() {
        println!("{}", Style::hint("No messages."));
        println!();
        return;
    }

    for entry in entries {
        let sender = match entry.sender {
            Sender::User => Style::value("You"),
            Sender::Bot => Style::bot(bot_name),
        };
        let first_line = entry.content.lines().next().unwrap_or_default();
        println!(
            "  {} {}: {}",
            Style::timestamp(local_time(entry.timestamp)),
            sender,
            first_line
        );
    }
    println!();
}

pub fn print_suggestions(suggestions: &[&str]) {
    println!("{}", Style::header("You could ask"));
    for suggestion in suggestions {
        println!("  {}", Style::command(suggestion));
    }
    println!();
}

pub fn print_success(message: &str) {
    println!("{} {message}", Style::success("✓"));
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
