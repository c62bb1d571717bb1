//! Keyword commands and their responses.

mod format;
mod responder;

pub use format::{EducationSummary, format_education, format_skills};
pub use responder::{Responder, Response};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A canonical keyword with a fixed response handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Intro,
    Help,
    Skills,
    Education,
    Resume,
    Contact,
    Address,
    Projects,
    About,
    Clear,
}

impl Command {
    /// All commands, in alias lookup order.
    pub const ALL: [Self; 10] = [
        Self::Intro,
        Self::Help,
        Self::Skills,
        Self::Education,
        Self::Resume,
        Self::Contact,
        Self::Address,
        Self::Projects,
        Self::About,
        Self::Clear,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Help => "help",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Resume => "resume",
            Self::Contact => "contact",
            Self::Address => "address",
            Self::Projects => "projects",
            Self::About => "about",
            Self::Clear => "clear",
        }
    }

    /// One-line description used by `folio commands`.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Intro => "Introduce myself",
            Self::Help => "List available keywords",
            Self::Skills => "Languages, frameworks, tools and databases",
            Self::Education => "Current and previous education",
            Self::Resume => "Where to get my resume",
            Self::Contact => "Ways to connect with me",
            Self::Address => "Where I am",
            Self::Projects => "What I have built",
            Self::About => "About this chatbot",
            Self::Clear => "Clear the conversation and start over",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or_else(|| format!("Unknown command: {s}"))
    }
}
