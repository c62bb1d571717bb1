use anyhow::{Context, Result};
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use super::bot::{Chatbot, Reply, suggested_responses};
use super::command::{Input, InputCompleter, SlashCommand, parse_input};
use super::history::{ExportFormat, HistoryEntry, Sender};
use super::ui;
use crate::fs::atomic_write;
use crate::output;
use crate::profile::Settings;
use crate::ui::{Spinner, Style, bell, clear_screen};

/// Number of history entries `/history` shows by default.
const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Presentation settings for a chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long the typing indicator shows before each reply.
    pub typing_delay: Duration,
    /// Ring the bell when a reply arrives.
    pub sound: bool,
    pub show_timestamps: bool,
}

impl SessionConfig {
    /// Creates a session configuration from profile settings.
    pub const fn from_settings(settings: &Settings) -> Self {
        Self {
            typing_delay: Duration::from_millis(settings.typing_delay_ms),
            sound: settings.sound_enabled,
            show_timestamps: settings.show_timestamps,
        }
    }

    /// Disables the typing delay.
    #[must_use]
    pub const fn fast(mut self) -> Self {
        self.typing_delay = Duration::ZERO;
        self
    }

    /// Disables the bell.
    #[must_use]
    pub const fn muted(mut self) -> Self {
        self.sound = false;
        self
    }
}

/// An interactive chat session with the portfolio bot.
///
/// Provides a REPL-style interface: keywords go to the bot, slash commands
/// inspect and manage the conversation.
pub struct ChatSession {
    config: SessionConfig,
    bot: Chatbot,
}

impl ChatSession {
    pub const fn new(config: SessionConfig, bot: Chatbot) -> Self {
        Self { config, bot }
    }

    pub async fn run(&mut self) -> Result<()> {
        info!(session_id = %self.bot.session_id(), "Chat session started");
        ui::print_header(self.bot.profile());
        self.respond("intro").await?;

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let help_message = self.help_message();
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(InputCompleter)
                .with_help_message(&help_message)
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await? {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.respond(&text).await?;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!(stats = ?self.bot.get_stats(), "Chat session ended");
        ui::print_goodbye();
        Ok(())
    }

    fn last_user_message(&self) -> &str {
        self.bot
            .history()
            .entries()
            .iter()
            .rev()
            .find(|e| e.sender == Sender::User)
            .map_or("", |e| e.content.as_str())
    }

    fn help_message(&self) -> String {
        let suggestions = suggested_responses(self.last_user_message());
        format!(
            "Try: {} · /help for commands, Ctrl+C to quit",
            suggestions.join(" · ")
        )
    }

    async fn respond(&mut self, text: &str) -> Result<()> {
        let replies = self.bot.process_message(text);
        let name = self.bot.profile().personal.name.clone();

        for reply in replies {
            match reply {
                Reply::Message(message) => {
                    self.simulate_typing(&name).await;
                    ui::print_bot_message(&name, &message, self.config.show_timestamps);
                    if self.config.sound {
                        bell();
                    }
                }
                Reply::Clear => {
                    clear_screen()?;
                    ui::print_header(self.bot.profile());
                }
                Reply::Pause(duration) => tokio::time::sleep(duration).await,
            }
        }
        Ok(())
    }

    async fn simulate_typing(&self, name: &str) {
        if self.config.typing_delay.is_zero() {
            return;
        }

        let spinner = (!output::is_quiet()).then(|| Spinner::new(&format!("{name} is typing...")));
        tokio::time::sleep(self.config.typing_delay).await;
        if let Some(spinner) = spinner {
            spinner.stop();
        }
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> Result<bool> {
        debug!(?cmd, "Handling slash command");
        let bot_name = self.bot.profile().personal.name.clone();

        match cmd {
            SlashCommand::Help => ui::print_help(),
            SlashCommand::History(limit) => {
                let limit = match limit.as_deref().map(str::parse::<usize>) {
                    None => DEFAULT_HISTORY_LIMIT,
                    Some(Ok(n)) => n,
                    Some(Err(_)) => {
                        ui::print_error("Usage: /history [count]");
                        return Ok(true);
                    }
                };
                let entries: Vec<&HistoryEntry> = self.bot.get_history(limit).iter().collect();
                ui::print_entries(&entries, &bot_name);
            }
            SlashCommand::Search(query) => {
                if query.trim().is_empty() {
                    ui::print_error("Usage: /search <query>");
                } else {
                    ui::print_entries(&self.bot.search_history(&query), &bot_name);
                }
            }
            SlashCommand::Stats => ui::print_stats(&self.bot.get_stats()),
            SlashCommand::Export { format, path } => {
                self.export(format.as_deref(), path.as_deref())?;
            }
            SlashCommand::Suggest => {
                ui::print_suggestions(&suggested_responses(self.last_user_message()));
            }
            SlashCommand::Reset => {
                self.bot.reset();
                clear_screen()?;
                ui::print_header(self.bot.profile());
                self.respond("intro").await?;
            }
            SlashCommand::State => {
                let snapshot = serde_json::to_string_pretty(&self.bot.snapshot())
                    .context("Failed to serialize state")?;
                println!("{snapshot}");
                println!();
            }
            SlashCommand::Quit => return Ok(false),
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        Ok(true)
    }

    fn export(&self, format: Option<&str>, path: Option<&str>) -> Result<()> {
        let format = match format.map(str::parse::<ExportFormat>).transpose() {
            Ok(format) => format.unwrap_or_default(),
            Err(e) => {
                ui::print_error(&e.to_string());
                return Ok(());
            }
        };

        let exported = self
            .bot
            .export_history(format)
            .context("Failed to export history")?;

        match path {
            Some(path) => {
                let written = atomic_write(Path::new(path), &exported)
                    .with_context(|| format!("Failed to write export: {path}"));
                if let Err(e) = written {
                    ui::print_error(&format!("{e:#}"));
                    return Ok(());
                }
                ui::print_success(&format!(
                    "Exported {} messages as {} to {}",
                    self.bot.history().len(),
                    Style::value(format),
                    Style::value(path)
                ));
            }
            None => {
                println!("{exported}");
                println!();
            }
        }
        Ok(())
    }
}
