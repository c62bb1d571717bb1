use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

use super::ask::message_texts;
use crate::chat::{Chatbot, ExportFormat};
use crate::input::InputReader;
use crate::profile::resolve_profile;
use crate::status;
use crate::ui::Style;

pub struct ReplayOptions<'a> {
    pub profile: Option<&'a Path>,
    pub file: Option<String>,
    pub delay: Option<u64>,
    pub paced: bool,
    pub export: Option<ExportFormat>,
}

/// Feeds a script through the bot.
///
/// Prints the conversation, or only the exported transcript when an
/// export format is given.
pub async fn run_replay(options: ReplayOptions<'_>) -> Result<()> {
    let (profile, _) = resolve_profile(options.profile)?;
    let messages = InputReader::read_messages(options.file.as_deref())?;

    if messages.is_empty() {
        status!("{}", Style::warning("No messages to replay"));
        return Ok(());
    }

    let delay = if options.paced {
        Duration::from_millis(profile.settings.message_delay_ms)
    } else {
        Duration::from_millis(options.delay.unwrap_or(0))
    };

    let mut bot = Chatbot::new(profile);
    let echo = options.export.is_none();
    let bot_name = bot.profile().personal.name.clone();

    bot.process_batch(&messages, delay, |message, replies| {
        if echo {
            println!("{} {message}", Style::value("You:"));
            for text in message_texts(replies) {
                println!("{}", Style::bot(format!("{bot_name}:")));
                println!("{text}");
            }
            println!();
        }
        Ok(())
    })
    .await?;

    if let Some(format) = options.export {
        let exported = bot
            .export_history(format)
            .context("Failed to export history")?;
        println!("{exported}");
    }

    status!("Replayed {} messages", messages.len());
    Ok(())
}
