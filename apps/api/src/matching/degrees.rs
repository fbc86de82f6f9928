//! Degree-path suggestions: a fixed table of further-study options per field.

use serde::Serialize;

use crate::models::profile::UserProfile;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeSuggestion {
    pub degree: &'static str,
    pub reason: &'static str,
}

pub struct Field {
    pub name: &'static str,
    /// Career-goal keywords that route to this field when the degree gives no hint.
    pub goal_keywords: &'static [&'static str],
    pub suggestions: &'static [DegreeSuggestion],
}

/// Checked in order; the first field that matches wins.
pub static FIELDS: &[Field] = &[
    Field {
        name: "Software Engineering",
        goal_keywords: &["tech", "software", "programming"],
        suggestions: &[
            DegreeSuggestion {
                degree: "Master's in Computer Science",
                reason: "Advanced programming skills and system design knowledge",
            },
            DegreeSuggestion {
                degree: "Certification in Cloud Computing",
                reason: "High demand for cloud expertise in tech companies",
            },
            DegreeSuggestion {
                degree: "Data Structures and Algorithms Bootcamp",
                reason: "Essential for technical interviews at top tech companies",
            },
        ],
    },
    Field {
        name: "Data Science",
        goal_keywords: &["data", "analytics"],
        suggestions: &[
            DegreeSuggestion {
                degree: "Master's in Data Science",
                reason: "Deep expertise in advanced analytics and machine learning",
            },
            DegreeSuggestion {
                degree: "Statistics and Probability Certification",
                reason: "Strong foundation for data interpretation and model validation",
            },
            DegreeSuggestion {
                degree: "Big Data Technologies Course",
                reason: "Skills in Hadoop, Spark, and distributed computing",
            },
        ],
    },
    Field {
        name: "Marketing",
        goal_keywords: &["marketing", "business"],
        suggestions: &[
            DegreeSuggestion {
                degree: "Digital Marketing Certification",
                reason: "Modern marketing requires digital expertise",
            },
            DegreeSuggestion {
                degree: "Master's in Business Administration (MBA)",
                reason: "Leadership skills and strategic thinking for senior roles",
            },
            DegreeSuggestion {
                degree: "Data Analytics for Marketing Certificate",
                reason: "Data-driven decision making is crucial in modern marketing",
            },
        ],
    },
    Field {
        name: "Design",
        goal_keywords: &["design", "ui", "ux"],
        suggestions: &[
            DegreeSuggestion {
                degree: "Master's in Human-Computer Interaction",
                reason: "Advanced understanding of user behavior and interface design",
            },
            DegreeSuggestion {
                degree: "Frontend Development Bootcamp",
                reason: "Technical skills to implement your designs",
            },
            DegreeSuggestion {
                degree: "Design Thinking Certification",
                reason: "Structured approach to problem-solving and innovation",
            },
        ],
    },
    Field {
        name: "Cybersecurity",
        goal_keywords: &["security", "cyber"],
        suggestions: &[
            DegreeSuggestion {
                degree: "Master's in Cybersecurity",
                reason: "Advanced knowledge of security protocols and threat analysis",
            },
            DegreeSuggestion {
                degree: "Certified Information Security Manager (CISM)",
                reason: "Industry-recognized certification for security management",
            },
            DegreeSuggestion {
                degree: "Ethical Hacking Certification",
                reason: "Hands-on skills in identifying and preventing security vulnerabilities",
            },
        ],
    },
    Field {
        name: "Finance",
        goal_keywords: &["finance", "investment"],
        suggestions: &[
            DegreeSuggestion {
                degree: "Master's in Finance (MFin)",
                reason: "Advanced financial modeling and investment strategies",
            },
            DegreeSuggestion {
                degree: "Chartered Financial Analyst (CFA)",
                reason: "Gold standard certification for investment professionals",
            },
            DegreeSuggestion {
                degree: "Financial Technology (FinTech) Certificate",
                reason: "Skills in emerging financial technologies and blockchain",
            },
        ],
    },
];

/// Suggestions for the first field named by the degree (whole name or any
/// single word of it), else the first field whose goal keywords appear in the
/// career goals, else nothing.
pub fn suggest_degrees(profile: &UserProfile) -> &'static [DegreeSuggestion] {
    let degree = profile.degree.to_lowercase();
    let by_degree = FIELDS.iter().find(|field| {
        let name = field.name.to_lowercase();
        degree.contains(&name) || name.split_whitespace().any(|word| degree.contains(word))
    });
    if let Some(field) = by_degree {
        return field.suggestions;
    }

    let goals = profile.career_goals.to_lowercase();
    FIELDS
        .iter()
        .find(|field| field.goal_keywords.iter().any(|k| goals.contains(k)))
        .map(|field| field.suggestions)
        .unwrap_or(&[])
}
