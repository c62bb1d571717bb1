//! `{placeholder}` substitution for response templates.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

// unwrap is safe: pattern is a compile-time constant
#[allow(clippy::unwrap_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap());

/// Values available to a template, keyed by placeholder name.
pub type TemplateValues<'a> = HashMap<&'a str, String>;

/// Replaces every `{key}` in `template` with the matching value.
///
/// Placeholders without a value are left as-is, braces included.
pub fn process_template(template: &str, values: &TemplateValues<'_>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            values
                .get(&caps[1])
                .map_or_else(|| caps[0].to_string(), Clone::clone)
        })
        .into_owned()
}
