//! Portfolio profile: personal data, response templates and command aliases.

mod manager;
mod model;

pub use manager::{ProfileManager, ProfileSource, resolve_profile};
pub use model::{
    Address, CommandAliases, Education, EducationStatus, Files, MapLink, Personal, Profile,
    ProfileError, Project, Responses, Settings, Skills, Social, is_valid_email, is_valid_phone,
};
