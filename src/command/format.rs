//! Plain-text formatting of profile sections.

use crate::profile::{Address, Education, EducationStatus, Profile};

/// Joins a skill list with commas.
pub fn format_skills(skills: &[String]) -> String {
    skills.join(", ")
}

/// Rendered education, split into the current and previous entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationSummary {
    pub current: String,
    pub previous: String,
}

fn format_education_item(edu: &Education) -> String {
    let mut lines = vec![edu.degree.clone(), edu.institution.clone()];
    if let Some(year) = &edu.year {
        lines.push(format!("Year: {year}"));
    }
    if edu.status == EducationStatus::Completed
        && let Some(result) = &edu.result
    {
        lines.push(format!("Result: {result}"));
    }
    lines.join("\n")
}

/// Formats education entries. The first `Current` entry is the current one;
/// all `Completed` entries are previous, separated by blank lines.
pub fn format_education(education: &[Education]) -> EducationSummary {
    if education.is_empty() {
        return EducationSummary {
            current: "No education data available".to_string(),
            previous: String::new(),
        };
    }

    let current = education
        .iter()
        .find(|edu| edu.status == EducationStatus::Current)
        .map_or_else(
            || "No current education found".to_string(),
            format_education_item,
        );

    let previous = education
        .iter()
        .filter(|edu| edu.status == EducationStatus::Completed)
        .map(format_education_item)
        .collect::<Vec<_>>()
        .join("\n\n");

    EducationSummary { current, previous }
}

/// Contact lines: phone first, then each configured link.
pub fn format_contact(profile: &Profile) -> String {
    let social = &profile.social;
    let links = [
        (
            "Phone",
            Some(format!(
                "{} (tel:{})",
                profile.personal.phone_display, profile.personal.phone
            )),
        ),
        ("Email", Some(social.email.clone())),
        ("GitHub", Some(social.github.clone())),
        ("WhatsApp", social.whatsapp.clone()),
        ("Telegram", social.telegram.clone()),
        ("Instagram", Some(social.instagram.clone())),
        ("LinkedIn", Some(social.linkedin.clone())),
    ];

    let lines: Vec<String> = links
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|v| format!("{label:<10} {v}"))
        })
        .collect();

    format!("You can reach me here:\n\n{}", lines.join("\n"))
}

pub fn format_resume(profile: &Profile) -> String {
    let name = &profile.personal.name;
    format!(
        "📄 {name} Resume.pdf\n\nDownload: {}\nPreview:  {}",
        profile.files.resume_pdf, profile.files.resume_thumbnail
    )
}

fn format_address_lines(address: &Address) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(line1) = &address.line1 {
        lines.push(line1.clone());
    }
    if let Some(line2) = &address.line2 {
        lines.push(line2.clone());
    }
    lines.push(format!("{}, {}", address.city, address.state));
    match &address.zip {
        Some(zip) => lines.push(format!("{} {zip}", address.country)),
        None => lines.push(address.country.clone()),
    }
    lines
}

pub fn format_address(profile: &Profile) -> String {
    format!(
        "📍 {}\n\nMap: {}",
        format_address_lines(&profile.personal.address).join("\n"),
        profile.map.url
    )
}

/// Bulleted project list, one block per project.
pub fn format_projects(profile: &Profile) -> String {
    profile
        .projects
        .iter()
        .map(|project| {
            let mut block = format!("• {}\n  {}", project.name, project.description);
            if !project.technologies.is_empty() {
                block.push_str(&format!("\n  Built with: {}", project.technologies.join(", ")));
            }
            if let Some(github) = &project.github {
                block.push_str(&format!("\n  Code: {github}"));
            }
            if let Some(demo) = &project.demo {
                block.push_str(&format!("\n  Demo: {demo}"));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
