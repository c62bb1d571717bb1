use anyhow::Result;
use std::path::Path;

use crate::chat::{ChatSession, Chatbot, SessionConfig};
use crate::profile::resolve_profile;

pub struct ChatOptions<'a> {
    pub profile: Option<&'a Path>,
    pub fast: bool,
    pub mute: bool,
}

pub async fn run_chat(options: ChatOptions<'_>) -> Result<()> {
    let (profile, source) = resolve_profile(options.profile)?;
    tracing::info!(%source, "Using profile");

    let mut config = SessionConfig::from_settings(&profile.settings);
    if options.fast {
        config = config.fast();
    }
    if options.mute {
        config = config.muted();
    }

    let mut session = ChatSession::new(config, Chatbot::new(profile));
    session.run().await
}
