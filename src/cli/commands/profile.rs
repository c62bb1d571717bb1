//! Profile command handler: create, show and validate `profile.toml`.

use anyhow::{Context, Result, bail};
use inquire::Confirm;
use std::path::Path;

use crate::profile::{Profile, ProfileManager, resolve_profile};
use crate::status;
use crate::ui::{Style, handle_prompt_cancellation};

fn manager_for(path: Option<&Path>) -> Result<ProfileManager> {
    path.map_or_else(ProfileManager::new, |p| Ok(ProfileManager::with_path(p)))
}

/// Writes the built-in profile as a starting point for editing.
pub fn init_profile(path: Option<&Path>, force: bool) -> Result<()> {
    handle_prompt_cancellation(|| init_profile_inner(path, force))
}

fn init_profile_inner(path: Option<&Path>, force: bool) -> Result<()> {
    let manager = manager_for(path)?;
    let target = manager.profile_path().display().to_string();

    if manager.exists() && !force {
        let overwrite = Confirm::new(&format!("{target} already exists. Overwrite?"))
            .with_default(false)
            .prompt()?;
        if !overwrite {
            status!("Cancelled");
            return Ok(());
        }
    }

    manager.save(&Profile::builtin())?;
    status!(
        "{} Wrote profile to {}",
        Style::success("✓"),
        Style::value(&target)
    );
    Ok(())
}

/// Prints the active profile as TOML.
pub fn show_profile(path: Option<&Path>) -> Result<()> {
    let (profile, source) = resolve_profile(path)?;
    let contents = toml::to_string_pretty(&profile).context("Failed to serialize profile")?;

    status!("{} {}", Style::label("# source:"), source);
    print!("{contents}");
    Ok(())
}

/// Validates the active profile; fails if any problem is found.
pub fn check_profile(path: Option<&Path>) -> Result<()> {
    let (profile, source) = resolve_profile(path)?;
    let errors = profile.validate();

    if errors.is_empty() {
        println!("{} Profile {} is valid", Style::success("✓"), source);
        return Ok(());
    }

    for error in &errors {
        eprintln!("{} {error}", Style::error("✗"));
    }
    bail!("Profile {source} has {} problem(s)", errors.len());
}
