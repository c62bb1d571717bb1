use inquire::autocompletion::{Autocomplete, Replacement};

use crate::command::Command;

// Available slash commands: (command, description)
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/export", "Export the conversation (json or text)"),
    ("/help", "Show available commands"),
    ("/history", "Show recent messages"),
    ("/quit", "Exit chat mode"),
    ("/reset", "Start a fresh session"),
    ("/search", "Search the conversation"),
    ("/state", "Show a debug snapshot"),
    ("/stats", "Show conversation statistics"),
    ("/suggest", "Suggest what to ask next"),
];

/// Autocompleter for slash commands and keywords.
#[derive(Clone, Default)]
pub struct InputCompleter;

impl Autocomplete for InputCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if input.starts_with('/') {
            let suggestions = SLASH_COMMANDS
                .iter()
                .filter(|(cmd, _)| cmd.starts_with(input))
                .map(|(cmd, desc)| format!("{cmd}  {desc}"))
                .collect();
            return Ok(suggestions);
        }

        let prefix = input.trim().to_lowercase();
        if prefix.is_empty() {
            return Ok(vec![]);
        }

        let suggestions = Command::ALL
            .iter()
            .filter(|cmd| cmd.name().starts_with(&prefix))
            .map(|cmd| format!("{}  {}", cmd.name(), cmd.description()))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Help,
    History(Option<String>),
    Search(String),
    Stats,
    Export {
        format: Option<String>,
        path: Option<String>,
    },
    Suggest,
    Reset,
    State,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    let arg = |i: usize| parts.get(i).map(|s| (*s).to_string());

    let command = match parts.first().copied() {
        Some("help") => SlashCommand::Help,
        Some("history") => SlashCommand::History(arg(1)),
        Some("search") => SlashCommand::Search(parts.get(1..).unwrap_or_default().join(" ")),
        Some("stats") => SlashCommand::Stats,
        Some("export") => SlashCommand::Export {
            format: arg(1),
            path: arg(2),
        },
        Some("suggest") => SlashCommand::Suggest,
        Some("reset") => SlashCommand::Reset,
        Some("state" | "debug") => SlashCommand::State,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(parts.join(" ")),
    };

    Input::Command(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn command(input: &str) -> SlashCommand {
        match parse_input(input) {
            Input::Command(cmd) => cmd,
            other => panic!("Expected Input::Command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_input(""), Input::Empty));
        assert!(matches!(parse_input("   "), Input::Empty));
    }

    #[test]
    fn test_parse_text_input() {
        match parse_input("  Skills ") {
            Input::Text(text) => assert_eq!(text, "Skills"),
            _ => panic!("Expected Input::Text"),
        }
    }

    #[test]
    fn test_parse_help_command() {
        assert_eq!(command("/help"), SlashCommand::Help);
    }

    #[test]
    fn test_parse_history_command() {
        assert_eq!(command("/history"), SlashCommand::History(None));
        assert_eq!(
            command("/history 5"),
            SlashCommand::History(Some("5".to_string()))
        );
    }

    #[test]
    fn test_parse_search_joins_words() {
        assert_eq!(
            command("/search  my   skills"),
            SlashCommand::Search("my skills".to_string())
        );
        assert_eq!(command("/search"), SlashCommand::Search(String::new()));
    }

    #[test]
    fn test_parse_export_command() {
        assert_eq!(
            command("/export"),
            SlashCommand::Export {
                format: None,
                path: None
            }
        );
        assert_eq!(
            command("/export text chat.txt"),
            SlashCommand::Export {
                format: Some("text".to_string()),
                path: Some("chat.txt".to_string())
            }
        );
    }

    #[test]
    fn test_parse_quit_commands() {
        assert_eq!(command("/quit"), SlashCommand::Quit);
        assert_eq!(command("/exit"), SlashCommand::Quit);
        assert_eq!(command("/q"), SlashCommand::Quit);
    }

    #[test]
    fn test_parse_state_alias() {
        assert_eq!(command("/debug"), SlashCommand::State);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            command("/dance now"),
            SlashCommand::Unknown("dance now".to_string())
        );
    }

    // InputCompleter tests

    #[test]
    fn test_completer_no_suggestions_for_empty_text() {
        let mut completer = InputCompleter;
        assert!(completer.get_suggestions("").unwrap().is_empty());
        assert!(completer.get_suggestions("zzz").unwrap().is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = InputCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_slash_filter_by_prefix() {
        let mut completer = InputCompleter;

        let suggestions = completer.get_suggestions("/st").unwrap();
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].starts_with("/state"));
        assert!(suggestions[1].starts_with("/stats"));

        let suggestions = completer.get_suggestions("/q").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/quit"));
    }

    #[test]
    fn test_completer_keyword_suggestions() {
        let mut completer = InputCompleter;
        let suggestions = completer.get_suggestions("Ed").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("education"));

        let suggestions = completer.get_suggestions("a").unwrap();
        assert_eq!(suggestions.len(), 2); // address, about
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = InputCompleter;
        let suggestion = "/stats  Show conversation statistics".to_string();
        let completion = completer.get_completion("/st", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/stats".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = InputCompleter;
        let completion = completer.get_completion("/x", None).unwrap();
        assert!(completion.is_none());
    }
}
