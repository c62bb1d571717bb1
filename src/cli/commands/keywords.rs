use anyhow::Result;
use std::path::Path;

use crate::command::Command;
use crate::profile::resolve_profile;
use crate::ui::Style;

/// Prints every keyword with its description and aliases.
pub fn print_keywords(profile: Option<&Path>) -> Result<()> {
    let (profile, _) = resolve_profile(profile)?;

    println!("{}", Style::header("Keywords"));
    for (command, aliases) in profile.commands.iter() {
        println!(
            "  {}  {}",
            Style::command(format!("{:10}", command.name())),
            Style::secondary(command.description())
        );
        let others: Vec<&str> = aliases
            .iter()
            .map(String::as_str)
            .filter(|alias| *alias != command.name())
            .collect();
        if !others.is_empty() {
            println!(
                "  {:10}  {} {}",
                "",
                Style::label("aliases:"),
                others.join(", ")
            );
        }
    }

    let total: usize = Command::ALL
        .iter()
        .map(|&cmd| profile.commands.aliases(cmd).len())
        .sum();
    println!();
    println!(
        "{}",
        Style::hint(format!("{} keywords, {total} aliases", Command::ALL.len()))
    );
    Ok(())
}
