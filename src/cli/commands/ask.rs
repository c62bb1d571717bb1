use anyhow::Result;
use std::path::Path;

use crate::chat::{Chatbot, Reply};
use crate::profile::resolve_profile;

/// Sends one message to the bot and prints the reply to stdout.
pub fn run_ask(profile: Option<&Path>, words: &[String]) -> Result<()> {
    let (profile, _) = resolve_profile(profile)?;
    let mut bot = Chatbot::new(profile);

    for text in message_texts(&bot.process_message(&words.join(" "))) {
        println!("{text}");
    }
    Ok(())
}

/// Extracts the messages from a reply list, dropping screen effects.
pub fn message_texts(replies: &[Reply]) -> impl Iterator<Item = &str> {
    replies.iter().filter_map(|reply| match reply {
        Reply::Message(text) => Some(text.as_str()),
        Reply::Clear | Reply::Pause(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_message_texts_skips_effects() {
        let replies = vec![
            Reply::Clear,
            Reply::Pause(Duration::from_millis(1)),
            Reply::Message("hello".to_string()),
        ];
        assert_eq!(message_texts(&replies).collect::<Vec<_>>(), vec!["hello"]);
    }
}
