use std::fmt;

use serde::{Deserialize, Serialize};

/// Seniority a posting asks for. Ordered: a higher level satisfies a lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    /// Case-insensitive parse of a self-reported level. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "entry" => Some(ExperienceLevel::Entry),
            "intermediate" => Some(ExperienceLevel::Intermediate),
            "advanced" => Some(ExperienceLevel::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single fixed internship opportunity. Catalog entries live for the whole process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternshipPosting {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub required_skills: &'static [&'static str],
    pub preferred_degree: &'static [&'static str],
    pub experience_level: ExperienceLevel,
    pub duration: &'static str,
    pub stipend: &'static str,
}
