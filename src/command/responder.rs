use super::Command;
use super::format::{
    format_address, format_contact, format_education, format_projects, format_resume,
    format_skills,
};
use crate::profile::Profile;
use crate::template::{TemplateValues, process_template};

/// A rendered bot response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Text shown to the visitor.
    pub text: String,
    /// Text recorded in the message history. Long, link-heavy responses
    /// are recorded as a short summary instead.
    pub history_text: String,
}

impl Response {
    fn full(text: String) -> Self {
        Self {
            history_text: text.clone(),
            text,
        }
    }

    fn summarized(text: String, summary: &str) -> Self {
        Self {
            text,
            history_text: summary.to_string(),
        }
    }
}

/// Renders command responses from a profile.
pub struct Responder<'a> {
    profile: &'a Profile,
}

impl<'a> Responder<'a> {
    pub const fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    /// Renders the response for `command`, or the fallback when `None`.
    ///
    /// `Clear` renders the intro; wiping the screen is up to the caller.
    pub fn render(&self, command: Option<Command>) -> Response {
        let Some(command) = command else {
            return Response::full(self.profile.responses.default.clone());
        };

        match command {
            Command::Intro | Command::Clear => Response::full(self.intro()),
            Command::Help => Response::full(self.profile.responses.help.clone()),
            Command::Skills => Response::full(self.skills()),
            Command::Education => Response::full(self.education()),
            Command::Resume => {
                Response::summarized(format_resume(self.profile), "Resume preview and download")
            }
            Command::Contact => {
                Response::summarized(format_contact(self.profile), "Contact information")
            }
            Command::Address => {
                Response::summarized(format_address(self.profile), "Address and location")
            }
            Command::Projects => Response::full(self.projects()),
            Command::About => Response::full(self.about()),
        }
    }

    fn intro(&self) -> String {
        let personal = &self.profile.personal;
        let values = TemplateValues::from([
            ("name", personal.name.clone()),
            ("title", personal.title.clone()),
            ("university", personal.university.clone()),
        ]);
        process_template(&self.profile.responses.intro, &values)
    }

    fn skills(&self) -> String {
        let skills = &self.profile.skills;
        let values = TemplateValues::from([
            ("languages", format_skills(&skills.languages)),
            ("frameworks", format_skills(&skills.frameworks)),
            ("tools", format_skills(&skills.tools)),
            ("databases", format_skills(&skills.databases)),
        ]);
        process_template(&self.profile.responses.skills, &values)
    }

    fn education(&self) -> String {
        let summary = format_education(&self.profile.education);
        let values = TemplateValues::from([
            ("currentEducation", summary.current),
            ("previousEducation", summary.previous),
        ]);
        process_template(&self.profile.responses.education, &values)
    }

    fn projects(&self) -> String {
        let values = TemplateValues::from([
            ("githubLink", self.profile.social.github.clone()),
            ("name", self.profile.personal.name.clone()),
            ("projectList", format_projects(self.profile)),
        ]);
        process_template(&self.profile.responses.projects, &values)
            .trim_end()
            .to_string()
    }

    fn about(&self) -> String {
        let values = TemplateValues::from([
            ("githubLink", self.profile.social.github.clone()),
            ("name", self.profile.personal.name.clone()),
        ]);
        process_template(&self.profile.responses.about, &values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_interpolates_personal_data() {
        let profile = Profile::builtin();
        let response = Responder::new(&profile).render(Some(Command::Intro));
        assert!(response.text.contains("My name is Jian Azul."));
        assert!(response.text.contains("Computer Engineering Student at UW TACOMA"));
        assert_eq!(response.text, response.history_text);
    }

    #[test]
    fn test_clear_renders_intro() {
        let profile = Profile::builtin();
        let responder = Responder::new(&profile);
        assert_eq!(
            responder.render(Some(Command::Clear)),
            responder.render(Some(Command::Intro))
        );
    }

    #[test]
    fn test_default_response() {
        let profile = Profile::builtin();
        let response = Responder::new(&profile).render(None);
        assert!(response.text.starts_with("Hey I couldn't catch you"));
    }

    #[test]
    fn test_skills_lists_each_category() {
        let profile = Profile::builtin();
        let text = Responder::new(&profile).render(Some(Command::Skills)).text;
        assert!(text.contains("Java, C++, C, PHP"));
        assert!(text.contains("MySQL, MongoDB, SQLite"));
        assert!(!text.contains('{'));
    }

    #[test]
    fn test_education_splits_current_and_previous() {
        let profile = Profile::builtin();
        let text = Responder::new(&profile).render(Some(Command::Education)).text;
        assert!(text.contains("Current Education:\nB.Tech in Computer Science Engineering"));
        assert!(text.contains("Result: 86.06%"));
        assert!(!text.contains("Expected 2024"));
    }

    #[test]
    fn test_link_heavy_responses_are_summarized_in_history() {
        let profile = Profile::builtin();
        let responder = Responder::new(&profile);

        let resume = responder.render(Some(Command::Resume));
        assert!(resume.text.contains("assets/Jian_Resume.pdf"));
        assert_eq!(resume.history_text, "Resume preview and download");

        assert_eq!(
            responder.render(Some(Command::Contact)).history_text,
            "Contact information"
        );
        assert_eq!(
            responder.render(Some(Command::Address)).history_text,
            "Address and location"
        );
    }

    #[test]
    fn test_custom_template_keeps_unknown_placeholders() {
        let mut profile = Profile::builtin();
        profile.responses.about = "{name} / {mystery}".to_string();
        let text = Responder::new(&profile).render(Some(Command::About)).text;
        assert_eq!(text, "Jian Azul / {mystery}");
    }

    #[test]
    fn test_every_command_renders_something() {
        let profile = Profile::builtin();
        let responder = Responder::new(&profile);
        for cmd in Command::ALL {
            assert!(!responder.render(Some(cmd)).text.is_empty(), "{cmd}");
        }
    }
}
