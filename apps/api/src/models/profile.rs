use serde::{Deserialize, Serialize};

fn default_experience_level() -> String {
    "entry".to_string()
}

/// Self-reported student attributes. Every field is free text; missing fields
/// deserialize to empty strings, except `experience_level` which defaults to "entry".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub degree: String,
    /// Comma-separated, e.g. "Python, React, Git".
    #[serde(default)]
    pub skills: String,
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
    #[serde(default)]
    pub career_goals: String,
    #[serde(default)]
    pub interests: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            degree: String::new(),
            skills: String::new(),
            experience_level: default_experience_level(),
            career_goals: String::new(),
            interests: String::new(),
        }
    }
}

impl UserProfile {
    /// Lowercased, trimmed skill tokens, one per comma-separated piece.
    /// Blank pieces are kept: an empty token is contained in every skill.
    pub fn skill_tokens(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .collect()
    }

    /// "Label: value" lines for every non-empty field, used as prompt context.
    pub fn context_lines(&self) -> Vec<String> {
        [
            ("Name", &self.name),
            ("Degree", &self.degree),
            ("Skills", &self.skills),
            ("Experience Level", &self.experience_level),
            ("Career Goals", &self.career_goals),
            ("Interests", &self.interests),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(label, value)| format!("{label}: {}", value.trim()))
        .collect()
    }
}

/// Prompt context block for an optional profile.
pub fn profile_context(profile: Option<&UserProfile>) -> String {
    let Some(profile) = profile else {
        return "No profile information available".to_string();
    };
    let lines = profile.context_lines();
    if lines.is_empty() {
        "Limited profile information available".to_string()
    } else {
        lines.join("\n")
    }
}
