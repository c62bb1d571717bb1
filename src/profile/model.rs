//! Profile data: who the chatbot talks about and how it answers.
//!
//! Every section is optional in `profile.toml`. Missing sections, and
//! missing fields inside a present section, fall back to the built-in
//! defaults below.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

use crate::command::Command;

#[allow(clippy::unwrap_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[allow(clippy::unwrap_used)]
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap());

/// Errors found while validating a profile.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("personal.name must not be empty")]
    EmptyName,

    #[error("personal.email is not a valid email address: {0}")]
    InvalidEmail(String),

    #[error("personal.phone is not a valid phone number: {0}")]
    InvalidPhone(String),

    #[error("alias '{alias}' is claimed by both '{first}' and '{second}'")]
    DuplicateAlias {
        alias: String,
        first: Command,
        second: Command,
    },

    #[error("alias '{alias}' for '{command}' must be lowercase without surrounding spaces")]
    AliasNotNormalized { alias: String, command: Command },

    #[error("command '{0}' has no aliases and can never be triggered")]
    NoAliases(Command),
}

/// The complete profile, corresponding to `profile.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub personal: Personal,
    pub social: Social,
    pub files: Files,
    pub settings: Settings,
    pub skills: Skills,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub map: MapLink,
    pub responses: Responses,
    pub commands: CommandAliases,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub university: String,
    pub email: String,
    pub phone: String,
    pub phone_display: String,
    pub location: String,
    pub address: Address,
}

impl Default for Personal {
    fn default() -> Self {
        Self {
            name: "Jian Azul".to_string(),
            title: "Computer Engineering Student".to_string(),
            university: "UW TACOMA".to_string(),
            email: "your.email@gmail.com".to_string(),
            phone: "+1234567890".to_string(),
            phone_display: "123-456-7890".to_string(),
            location: "Your City, State, Country".to_string(),
            address: Address::default(),
        }
    }
}

/// Postal address. Optional lines are skipped when rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip: Option<String>,
}

impl Default for Address {
    fn default() -> Self {
        Self {
            line1: None,
            line2: None,
            city: "TACOMA/SEATTLE".to_string(),
            state: "WA".to_string(),
            country: "USA".to_string(),
            zip: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub github: String,
    pub linkedin: String,
    pub instagram: String,
    /// A `mailto:` link.
    pub email: String,
    pub whatsapp: Option<String>,
    pub telegram: Option<String>,
}

impl Default for Social {
    fn default() -> Self {
        Self {
            github: "https://github.com/jianazul".to_string(),
            linkedin: "https://linkedin.com/in/jianazul".to_string(),
            instagram: "https://instagram.com/nuke.seattle".to_string(),
            email: "mailto:jijoazul@gmail.com".to_string(),
            whatsapp: None,
            telegram: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Files {
    pub resume_pdf: String,
    pub resume_thumbnail: String,
    pub profile_image: String,
}

impl Default for Files {
    fn default() -> Self {
        Self {
            resume_pdf: "assets/Jian_Resume.pdf".to_string(),
            resume_thumbnail: "images/resumeThumbnail.png".to_string(),
            profile_image: "images/squareDp.jpg".to_string(),
        }
    }
}

/// Presentation settings for the chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ring the terminal bell when a reply arrives.
    pub sound_enabled: bool,
    /// How long the "typing" indicator shows before each reply.
    pub typing_delay_ms: u64,
    /// Pause between messages in batch replay.
    pub message_delay_ms: u64,
    pub show_timestamps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            typing_delay_ms: 1500,
            message_delay_ms: 2000,
            show_timestamps: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
    pub databases: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            languages: strings(&[
                "Java",
                "C++",
                "C",
                "PHP",
                "Kotlin",
                "Dart",
                "Python",
                "CSS",
                "HTML",
                "JavaScript",
            ]),
            frameworks: strings(&["Android", "Flutter", "ReactJs", "GTK", "Node.js", "Express"]),
            tools: strings(&["VSCode", "Git", "Docker", "Linux", "Firebase"]),
            databases: strings(&["MySQL", "MongoDB", "SQLite"]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationStatus {
    Current,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub year: Option<String>,
    pub status: EducationStatus,
    #[serde(default)]
    pub result: Option<String>,
}

impl Education {
    fn new(
        degree: &str,
        institution: &str,
        year: &str,
        status: EducationStatus,
        result: &str,
    ) -> Self {
        Self {
            degree: degree.to_string(),
            institution: institution.to_string(),
            year: Some(year.to_string()),
            status,
            result: Some(result.to_string()),
        }
    }
}

/// Built-in education entries.
pub fn default_education() -> Vec<Education> {
    vec![
        Education::new(
            "B.Tech in Computer Science Engineering",
            "Your University",
            "2020-2024",
            EducationStatus::Current,
            "Expected 2024",
        ),
        Education::new(
            "Diploma in Computer Engineering",
            "Your College",
            "2017-2020",
            EducationStatus::Completed,
            "86.06%",
        ),
        Education::new(
            "Secondary School Certificate",
            "Your School",
            "2016",
            EducationStatus::Completed,
            "First Class",
        ),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

/// Built-in project list.
pub fn default_projects() -> Vec<Project> {
    vec![Project {
        name: "Portfolio Chatbot".to_string(),
        description: "Interactive chatbot-style portfolio for the terminal".to_string(),
        technologies: strings(&["Rust"]),
        github: Some("https://github.com/yourusername/portfolio".to_string()),
        demo: None,
    }]
}

/// Link to a map of the address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapLink {
    pub url: String,
}

impl Default for MapLink {
    fn default() -> Self {
        Self {
            url: "https://www.google.com/maps/search/?api=1&query=Tacoma%2C+WA".to_string(),
        }
    }
}

/// Response templates. `{placeholder}` values are filled in by the responder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Responses {
    pub intro: String,
    pub help: String,
    pub skills: String,
    pub education: String,
    pub about: String,
    pub projects: String,
    pub default: String,
}

impl Default for Responses {
    fn default() -> Self {
        Self {
            intro: "Hello there 👋🏻,\n\n\
                    My name is {name}.\n\n\
                    I am a {title} at {university} 👨🏻‍💻📚\n\n\
                    I am eager to hear about potential career opportunities, so I would be \
                    pleased to chat about job openings in the engineering sphere.\n\n\
                    Send 'help' to know more about me."
                .to_string(),
            help: "Send a keyword to get what you want to know about me...\n\n\
                   Available commands:\n\n\
                   'skills'    - to know my skills\n\
                   'resume'    - to get my resume\n\
                   'education' - to get my education details\n\
                   'address'   - to get my address\n\
                   'contact'   - to get ways to connect with me\n\
                   'projects'  - to get details of my projects\n\
                   'clear'     - to clear conversation\n\
                   'about'     - to know about this site"
                .to_string(),
            skills: "I am currently pursuing a degree in Computer Science Engineering.\n\n\
                     Programming Languages:\n{languages}\n\n\
                     Frameworks & Technologies:\n{frameworks}\n\n\
                     Tools & Environment:\n{tools}\n\n\
                     Databases:\n{databases}"
                .to_string(),
            education: "Current Education:\n{currentEducation}\n\n\
                        Previous Education:\n{previousEducation}"
                .to_string(),
            about: "🛠️💻 This portfolio is a chatbot built from SCRATCH!\n\n\
                    👨🏻‍💻 Designed and Developed by {name} ({githubLink}) with ❤️\n\n\
                    The chatbot interface provides an interactive way to explore my \
                    professional background and skills."
                .to_string(),
            projects: "You want to check my projects? Then just jump into my Github Account \
                       to see my latest work!\n\n\
                       GitHub Profile: {githubLink}\n\n{projectList}"
                .to_string(),
            default: "Hey I couldn't catch you...😢\n\
                      Send 'help' to know more about usage.\n\n\
                      You can also try:\n\
                      • skills\n• education\n• contact\n• resume\n• projects"
                .to_string(),
        }
    }
}

/// Alias lists per command. Lookup walks commands in [`Command::ALL`] order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandAliases {
    pub intro: Vec<String>,
    pub help: Vec<String>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub resume: Vec<String>,
    pub contact: Vec<String>,
    pub address: Vec<String>,
    pub projects: Vec<String>,
    pub about: Vec<String>,
    pub clear: Vec<String>,
}

impl Default for CommandAliases {
    fn default() -> Self {
        Self {
            intro: strings(&["intro", "start", "begin"]),
            help: strings(&["help", "?", "commands", "menu"]),
            skills: strings(&["skills", "skill", "technology", "tech", "programming"]),
            education: strings(&["education", "study", "academic", "degree", "college"]),
            resume: strings(&["resume", "cv", "download"]),
            contact: strings(&["contact", "social", "reach", "connect"]),
            address: strings(&["address", "location", "map", "where"]),
            projects: strings(&["projects", "work", "portfolio", "github"]),
            about: strings(&["about", "site", "website", "info"]),
            clear: strings(&["clear", "reset", "new", "refresh"]),
        }
    }
}

impl CommandAliases {
    /// Returns the alias list for a command.
    pub fn aliases(&self, command: Command) -> &[String] {
        match command {
            Command::Intro => &self.intro,
            Command::Help => &self.help,
            Command::Skills => &self.skills,
            Command::Education => &self.education,
            Command::Resume => &self.resume,
            Command::Contact => &self.contact,
            Command::Address => &self.address,
            Command::Projects => &self.projects,
            Command::About => &self.about,
            Command::Clear => &self.clear,
        }
    }

    /// Iterates `(command, aliases)` pairs in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = (Command, &[String])> {
        Command::ALL.iter().map(|&cmd| (cmd, self.aliases(cmd)))
    }

    /// Finds the first command whose aliases contain the normalized input.
    ///
    /// Input is trimmed and lower-cased; the comparison is exact.
    pub fn find_command(&self, input: &str) -> Option<Command> {
        let normalized = input.trim().to_lowercase();
        self.iter()
            .find(|(_, aliases)| aliases.iter().any(|alias| *alias == normalized))
            .map(|(cmd, _)| cmd)
    }
}

/// Returns `true` if the email address looks valid.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns `true` if the phone number looks valid. Whitespace is ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            personal: Personal::default(),
            social: Social::default(),
            files: Files::default(),
            settings: Settings::default(),
            skills: Skills::default(),
            education: default_education(),
            projects: default_projects(),
            map: MapLink::default(),
            responses: Responses::default(),
            commands: CommandAliases::default(),
        }
    }
}

impl Profile {
    /// Builds the built-in profile.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Checks the profile for problems that would confuse visitors.
    ///
    /// Returns every problem found, not just the first.
    pub fn validate(&self) -> Vec<ProfileError> {
        let mut errors = Vec::new();

        if self.personal.name.trim().is_empty() {
            errors.push(ProfileError::EmptyName);
        }
        if !is_valid_email(&self.personal.email) {
            errors.push(ProfileError::InvalidEmail(self.personal.email.clone()));
        }
        if !is_valid_phone(&self.personal.phone) {
            errors.push(ProfileError::InvalidPhone(self.personal.phone.clone()));
        }

        let mut claimed: HashMap<&str, Command> = HashMap::new();
        for (command, aliases) in self.commands.iter() {
            if aliases.is_empty() {
                errors.push(ProfileError::NoAliases(command));
            }
            for alias in aliases {
                if *alias != alias.trim().to_lowercase() {
                    errors.push(ProfileError::AliasNotNormalized {
                        alias: alias.clone(),
                        command,
                    });
                }
                match claimed.get(alias.as_str()) {
                    Some(&first) if first != command => {
                        errors.push(ProfileError::DuplicateAlias {
                            alias: alias.clone(),
                            first,
                            second: command,
                        });
                    }
                    Some(_) => {}
                    None => {
                        claimed.insert(alias.as_str(), command);
                    }
                }
            }
        }

        errors
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profile_is_valid() {
        assert!(Profile::builtin().validate().is_empty());
    }

    #[test]
    fn test_builtin_has_education_and_projects() {
        let profile = Profile::builtin();
        assert_eq!(profile.education.len(), 3);
        assert_eq!(profile.education[0].status, EducationStatus::Current);
        assert_eq!(profile.projects.len(), 1);
    }

    #[test]
    fn test_find_command_exact_alias() {
        let aliases = CommandAliases::default();
        assert_eq!(aliases.find_command("cv"), Some(Command::Resume));
        assert_eq!(aliases.find_command("?"), Some(Command::Help));
        assert_eq!(aliases.find_command("github"), Some(Command::Projects));
    }

    #[test]
    fn test_find_command_normalizes_input() {
        let aliases = CommandAliases::default();
        assert_eq!(aliases.find_command("  SKILLS \n"), Some(Command::Skills));
        assert_eq!(aliases.find_command("Where"), Some(Command::Address));
    }

    #[test]
    fn test_find_command_no_partial_match() {
        let aliases = CommandAliases::default();
        assert_eq!(aliases.find_command("skills please"), None);
        assert_eq!(aliases.find_command("ski"), None);
        assert_eq!(aliases.find_command(""), None);
    }

    #[test]
    fn test_find_command_first_claim_wins() {
        let mut aliases = CommandAliases::default();
        aliases.clear.push("help".to_string());
        assert_eq!(aliases.find_command("help"), Some(Command::Help));
    }

    #[test]
    fn test_validate_duplicate_alias() {
        let mut profile = Profile::builtin();
        profile.commands.clear.push("cv".to_string());

        let errors = profile.validate();
        assert_eq!(
            errors,
            vec![ProfileError::DuplicateAlias {
                alias: "cv".to_string(),
                first: Command::Resume,
                second: Command::Clear,
            }]
        );
    }

    #[test]
    fn test_validate_alias_not_normalized() {
        let mut profile = Profile::builtin();
        profile.commands.about.push("About ".to_string());

        let errors = profile.validate();
        assert!(matches!(
            errors.as_slice(),
            [ProfileError::AliasNotNormalized { command: Command::About, .. }]
        ));
    }

    #[test]
    fn test_validate_empty_aliases() {
        let mut profile = Profile::builtin();
        profile.commands.address.clear();
        assert_eq!(profile.validate(), vec![ProfileError::NoAliases(Command::Address)]);
    }

    #[test]
    fn test_validate_reports_all_personal_errors() {
        let mut profile = Profile::builtin();
        profile.personal.name = "  ".to_string();
        profile.personal.email = "nope".to_string();
        profile.personal.phone = "0123".to_string();
        assert_eq!(profile.validate().len(), 3);
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+1234567890"));
        assert!(is_valid_phone("+1 234 567 890"));
        assert!(!is_valid_phone("0123"));
        assert!(!is_valid_phone("+1٢٣٤٥٦٧٨٩"));
        assert!(!is_valid_phone("123-456"));
        assert!(!is_valid_phone("+12345678901234567"));
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let profile: Profile = toml::from_str(
            r#"
            [personal]
            name = "Grace Hopper"

            [settings]
            typing_delay_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(profile.personal.name, "Grace Hopper");
        assert_eq!(profile.personal.title, "Computer Engineering Student");
        assert_eq!(profile.settings.typing_delay_ms, 0);
        assert!(profile.settings.sound_enabled);
        assert_eq!(profile.commands.resume, vec!["resume", "cv", "download"]);
    }

    #[test]
    fn test_education_status_from_toml() {
        let profile: Profile = toml::from_str(
            r#"
            [[education]]
            degree = "BSc"
            institution = "MIT"
            status = "Completed"
            "#,
        )
        .unwrap();

        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].status, EducationStatus::Completed);
        assert!(profile.education[0].year.is_none());
    }
}
