//! Skill normalization — flattens heterogeneous skill entries into lower-case text.
//!
//! Profiles and job documents store skills either as bare strings or as
//! `{ "name": ... }` objects. Anything else is kept as `Unknown` so that
//! deserialization never fails; normalization then drops it silently.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw skill entry as it appears in upstream documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillInput {
    Plain(String),
    Named { name: String },
    Unknown(Value),
}

impl SkillInput {
    /// Narrows the entry to its text, if it carries any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SkillInput::Plain(text) => Some(text),
            SkillInput::Named { name } => Some(name),
            SkillInput::Unknown(_) => None,
        }
    }

    /// Reads a JSON value as a list of skill entries.
    /// Non-array values yield an empty list.
    pub fn list_from_value(value: &Value) -> Vec<SkillInput> {
        match value {
            Value::Array(items) => items.iter().map(SkillInput::from_value).collect(),
            _ => Vec::new(),
        }
    }

    fn from_value(value: &Value) -> SkillInput {
        match value {
            Value::String(text) => SkillInput::Plain(text.clone()),
            Value::Object(map) => match map.get("name") {
                Some(Value::String(name)) => SkillInput::Named { name: name.clone() },
                _ => SkillInput::Unknown(value.clone()),
            },
            other => SkillInput::Unknown(other.clone()),
        }
    }
}

impl From<&str> for SkillInput {
    fn from(text: &str) -> Self {
        SkillInput::Plain(text.to_string())
    }
}

/// Lower-cases and trims every entry, dropping empty and unknown ones.
/// Order and duplicates are preserved.
pub fn normalize_skills(skills: &[SkillInput]) -> Vec<String> {
    skills
        .iter()
        .filter_map(SkillInput::as_text)
        .filter_map(normalize_one)
        .collect()
}

/// Same as [`normalize_skills`] for lists that are already plain text.
#[cfg(test)]
pub fn normalize_strings<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    skills
        .iter()
        .filter_map(|s| normalize_one(s.as_ref()))
        .collect()
}

fn normalize_one(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
