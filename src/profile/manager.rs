use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::Profile;
use crate::fs::atomic_write;
use crate::paths;

/// Where the active profile came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// Loaded from a file given on the command line or found in the config dir.
    File(PathBuf),
    /// No file found; using the compiled-in profile.
    Builtin,
}

impl std::fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin => f.write_str("(built-in)"),
        }
    }
}

/// Loads and saves `profile.toml`.
pub struct ProfileManager {
    profile_path: PathBuf,
}

impl ProfileManager {
    /// Creates a manager for the default location.
    ///
    /// The profile lives at `$XDG_CONFIG_HOME/folio/profile.toml`
    /// or `~/.config/folio/profile.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            profile_path: paths::config_dir()?.join("profile.toml"),
        })
    }

    /// Creates a manager for an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            profile_path: path.into(),
        }
    }

    pub const fn profile_path(&self) -> &PathBuf {
        &self.profile_path
    }

    pub fn load(&self) -> Result<Profile> {
        let contents = fs::read_to_string(&self.profile_path).with_context(|| {
            format!(
                "Failed to read profile file: {}",
                self.profile_path.display()
            )
        })?;

        let profile: Profile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse profile file: {}",
                self.profile_path.display()
            )
        })?;

        debug!(path = %self.profile_path.display(), "Loaded profile");
        Ok(profile)
    }

    pub fn save(&self, profile: &Profile) -> Result<()> {
        if let Some(parent) = self.profile_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create profile directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(profile).context("Failed to serialize profile")?;

        atomic_write(&self.profile_path, &contents).with_context(|| {
            format!(
                "Failed to write profile file: {}",
                self.profile_path.display()
            )
        })?;

        info!(path = %self.profile_path.display(), "Saved profile");
        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.profile_path.is_file()
    }
}

/// Resolves the active profile.
///
/// Priority (highest to lowest):
/// 1. `explicit` path from `--profile` (must exist)
/// 2. `profile.toml` in the config directory, if present
/// 3. The built-in profile
pub fn resolve_profile(explicit: Option<&Path>) -> Result<(Profile, ProfileSource)> {
    if let Some(path) = explicit {
        let manager = ProfileManager::with_path(path);
        if !manager.exists() {
            bail!(
                "Profile file not found: {}\n\n\
                 Create one with:\n  \
                 folio --profile {} profile init",
                path.display(),
                path.display()
            );
        }
        let profile = manager.load()?;
        return Ok((profile, ProfileSource::File(path.to_path_buf())));
    }

    let manager = ProfileManager::new()?;
    if manager.exists() {
        let profile = manager.load()?;
        return Ok((profile, ProfileSource::File(manager.profile_path().clone())));
    }

    debug!("No profile file found, using built-in profile");
    Ok((Profile::builtin(), ProfileSource::Builtin))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_profile() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ProfileManager::with_path(temp_dir.path().join("profile.toml"));

        let mut profile = Profile::builtin();
        profile.personal.name = "Grace Hopper".to_string();
        profile.settings.typing_delay_ms = 10;

        manager.save(&profile).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.personal.name, "Grace Hopper");
        assert_eq!(loaded.settings.typing_delay_ms, 10);
        assert_eq!(loaded.education.len(), profile.education.len());
        assert_eq!(loaded.commands.help, profile.commands.help);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("profile.toml");
        let manager = ProfileManager::with_path(&path);

        manager.save(&Profile::builtin()).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_load_nonexistent_profile() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ProfileManager::with_path(temp_dir.path().join("missing.toml"));

        assert!(!manager.exists());
        assert!(manager.load().is_err());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.toml");
        fs::write(&path, "personal = [").unwrap();

        let err = ProfileManager::with_path(&path).load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse profile file"));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("me.toml");
        fs::write(&path, "[personal]\nname = \"Ada\"\n").unwrap();

        let (profile, source) = resolve_profile(Some(&path)).unwrap();
        assert_eq!(profile.personal.name, "Ada");
        assert_eq!(source, ProfileSource::File(path));
    }

    #[test]
    fn test_resolve_explicit_path_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let err = resolve_profile(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Profile file not found"));
    }

    #[test]
    fn test_profile_source_display() {
        assert_eq!(ProfileSource::Builtin.to_string(), "(built-in)");
        assert_eq!(
            ProfileSource::File(PathBuf::from("/tmp/p.toml")).to_string(),
            "/tmp/p.toml"
        );
    }
}
