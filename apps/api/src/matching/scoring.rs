//! Match scoring: pluggable, trait-based scorer that measures a student profile
//! against one internship posting.
//!
//! Default: `WeightedMatchScorer` (pure-Rust, deterministic, no oracle call).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`.

use serde::Serialize;

use crate::models::internship::{ExperienceLevel, InternshipPosting};
use crate::models::profile::UserProfile;

pub const DEGREE_WEIGHT: u32 = 30;
pub const DEGREE_KEYWORD_CREDIT: u32 = 15;
pub const SKILLS_WEIGHT: f64 = 40.0;
pub const EXPERIENCE_WEIGHT: u32 = 20;
pub const OVERQUALIFIED_CREDIT: u32 = 15;
pub const INTEREST_WEIGHT: u32 = 10;
pub const MAX_SCORE: u32 = 100;

/// STEM keywords that earn partial degree credit when both sides mention one.
const DEGREE_KEYWORDS: &[&str] = &["computer", "engineering", "science"];

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Per-factor contributions. `total` is the rounded sum, clamped to 0 – 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchBreakdown {
    pub degree: u32,     // 0 – 30
    pub skills: f64,     // 0 – 40
    pub experience: u32, // 0 – 20
    pub interest: u32,   // 0 – 10
    pub total: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the ranking or
/// handler code. Implementations must be pure: same inputs, same output.
pub trait MatchScorer: Send + Sync {
    fn breakdown(&self, profile: &UserProfile, posting: &InternshipPosting) -> MatchBreakdown;

    fn score(&self, profile: &UserProfile, posting: &InternshipPosting) -> u32 {
        self.breakdown(profile, posting).total
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Additive four-factor model.
///
/// 1. degree:     exact preferred-degree match → 30, shared STEM keyword → 15
/// 2. skills:     fraction of required skills covered (bidirectional substring) × 40
/// 3. experience: same level → 20, overqualified → 15, underqualified → 0
/// 4. interest:   career goals mention any title word → 10
pub struct WeightedMatchScorer;

impl MatchScorer for WeightedMatchScorer {
    fn breakdown(&self, profile: &UserProfile, posting: &InternshipPosting) -> MatchBreakdown {
        let degree = degree_factor(&profile.degree, posting.preferred_degree);
        let skills = skills_factor(&profile.skill_tokens(), posting.required_skills);
        let experience = experience_factor(&profile.experience_level, posting.experience_level);
        let interest = interest_factor(&profile.career_goals, posting.title);

        let sum = (degree + experience + interest) as f64 + skills;
        let total = (sum.round() as u32).min(MAX_SCORE);

        MatchBreakdown {
            degree,
            skills,
            experience,
            interest,
            total,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Factors
// ────────────────────────────────────────────────────────────────────────────

fn degree_factor(degree: &str, preferred: &[&str]) -> u32 {
    let degree = degree.to_lowercase();

    if preferred.iter().any(|d| d.to_lowercase() == degree) {
        return DEGREE_WEIGHT;
    }

    let joined = preferred.join(" ").to_lowercase();
    let mentions_stem = |text: &str| DEGREE_KEYWORDS.iter().any(|k| text.contains(k));
    if mentions_stem(&degree) && mentions_stem(&joined) {
        DEGREE_KEYWORD_CREDIT
    } else {
        0
    }
}

/// A required skill counts as covered when it contains a user token or a user
/// token contains it, so "python" covers "Python Programming" and "java"
/// covers "JavaScript".
fn skills_factor(user_skills: &[String], required: &[&str]) -> f64 {
    if required.is_empty() {
        return 0.0;
    }

    let matched = required
        .iter()
        .map(|r| r.to_lowercase())
        .filter(|req| {
            user_skills
                .iter()
                .any(|skill| req.contains(skill.as_str()) || skill.contains(req.as_str()))
        })
        .count();

    (matched as f64 / required.len() as f64 * SKILLS_WEIGHT).min(SKILLS_WEIGHT)
}

fn experience_factor(user_level: &str, required: ExperienceLevel) -> u32 {
    match ExperienceLevel::parse(user_level) {
        Some(level) if level == required => EXPERIENCE_WEIGHT,
        Some(level) if level > required => OVERQUALIFIED_CREDIT,
        _ => 0,
    }
}

fn interest_factor(career_goals: &str, title: &str) -> u32 {
    let goals = career_goals.to_lowercase();
    let hit = title
        .to_lowercase()
        .split_whitespace()
        .any(|word| goals.contains(word));
    if hit {
        INTEREST_WEIGHT
    } else {
        0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::catalog::INTERNSHIPS;

    fn profile(degree: &str, skills: &str, level: &str, goals: &str) -> UserProfile {
        UserProfile {
            degree: degree.to_string(),
            skills: skills.to_string(),
            experience_level: level.to_string(),
            career_goals: goals.to_string(),
            ..Default::default()
        }
    }

    fn posting(id: u32) -> &'static InternshipPosting {
        INTERNSHIPS.iter().find(|p| p.id == id).unwrap()
    }

    #[test]
    fn test_software_engineering_worked_example_scores_90() {
        let p = profile(
            "Computer Science",
            "Python, React, Git",
            "entry",
            "software engineering",
        );
        let b = WeightedMatchScorer.breakdown(&p, posting(1));
        assert_eq!(b.degree, 30);
        assert!((b.skills - 30.0).abs() < f64::EPSILON);
        assert_eq!(b.experience, 20);
        assert_eq!(b.interest, 10);
        assert_eq!(b.total, 90);
    }

    #[test]
    fn test_exact_degree_is_case_insensitive_and_maximal() {
        assert_eq!(degree_factor("computer science", &["Computer Science"]), 30);
        assert_eq!(degree_factor("FINANCE", &["Finance", "Economics"]), 30);
    }

    #[test]
    fn test_exact_degree_wins_regardless_of_other_fields() {
        let p = profile("Finance", "", "nonsense", "");
        let b = WeightedMatchScorer.breakdown(&p, posting(6));
        assert_eq!(b.degree, DEGREE_WEIGHT);
    }

    #[test]
    fn test_stem_keyword_fallback_needs_both_sides() {
        // "engineering" on the user side, "computer"/"science" on the posting side
        assert_eq!(
            degree_factor("Electrical Engineering", &["Computer Science", "Software Engineering"]),
            15
        );
        // posting side has no STEM keyword
        assert_eq!(degree_factor("Computer Engineering", &["Marketing", "Business"]), 0);
        // user side has no STEM keyword
        assert_eq!(degree_factor("History", &["Computer Science"]), 0);
    }

    #[test]
    fn test_empty_degree_scores_zero() {
        assert_eq!(degree_factor("", &["Computer Science"]), 0);
    }

    #[test]
    fn test_skills_bidirectional_substring() {
        let user = vec!["python programming".to_string(), "sql".to_string()];
        // "python" ⊂ "python programming", "sql" == "sql"
        let f = skills_factor(&user, &["Python", "Machine Learning", "SQL", "Statistics"]);
        assert!((f - 20.0).abs() < f64::EPSILON, "got {f}");
    }

    #[test]
    fn test_skills_java_matches_javascript() {
        let user = vec!["java".to_string()];
        let f = skills_factor(&user, &["JavaScript"]);
        assert!((f - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_skills_empty_required_is_zero_not_panic() {
        let user = vec!["python".to_string()];
        assert_eq!(skills_factor(&user, &[]), 0.0);
    }

    #[test]
    fn test_skills_no_tokens_matches_nothing() {
        assert_eq!(skills_factor(&[], &["Python", "Git"]), 0.0);
    }

    #[test]
    fn test_skills_blank_token_covers_every_requirement() {
        // an empty token is a substring of every required skill
        let trailing_comma = profile("", "Python, ", "entry", "");
        let b = WeightedMatchScorer.breakdown(&trailing_comma, posting(1));
        assert!((b.skills - SKILLS_WEIGHT).abs() < f64::EPSILON, "got {}", b.skills);

        let blank = profile("", "", "entry", "");
        let b = WeightedMatchScorer.breakdown(&blank, posting(1));
        assert!((b.skills - SKILLS_WEIGHT).abs() < f64::EPSILON, "got {}", b.skills);
    }

    #[test]
    fn test_skills_capped_at_40() {
        let user = vec!["excel".to_string(), "communication".to_string(), "excel".to_string()];
        let f = skills_factor(&user, &["Excel", "Communication"]);
        assert!(f <= SKILLS_WEIGHT);
    }

    #[test]
    fn test_experience_same_level_full_credit() {
        assert_eq!(experience_factor("Intermediate", ExperienceLevel::Intermediate), 20);
    }

    #[test]
    fn test_experience_overqualified_partial_credit() {
        assert_eq!(experience_factor("intermediate", ExperienceLevel::Entry), 15);
        assert_eq!(experience_factor("advanced", ExperienceLevel::Entry), 15);
        assert_eq!(experience_factor("advanced", ExperienceLevel::Intermediate), 15);
    }

    #[test]
    fn test_experience_underqualified_or_unknown_zero() {
        assert_eq!(experience_factor("entry", ExperienceLevel::Intermediate), 0);
        assert_eq!(experience_factor("guru", ExperienceLevel::Entry), 0);
    }

    #[test]
    fn test_interest_matches_any_title_word() {
        assert_eq!(interest_factor("I love data and charts", "Data Science Intern"), 10);
        assert_eq!(interest_factor("FINANCE", "Finance Intern"), 10);
        assert_eq!(interest_factor("gardening", "Finance Intern"), 0);
        assert_eq!(interest_factor("", "Finance Intern"), 0);
    }

    #[test]
    fn test_score_always_within_bounds() {
        let profiles = [
            profile("", "", "", ""),
            profile(
                "Computer Science",
                "python, javascript, react, git, sql, excel",
                "advanced",
                "software engineering data science intern",
            ),
            profile("Finance", "Excel, Research, Communication, Financial Analysis", "entry", "finance intern"),
        ];
        for p in &profiles {
            for posting in INTERNSHIPS {
                let s = WeightedMatchScorer.score(p, posting);
                assert!(s <= MAX_SCORE, "score {s} out of range for {}", posting.title);
            }
        }
    }

    #[test]
    fn test_perfect_profile_reaches_100() {
        let p = profile(
            "Finance",
            "Financial Analysis, Excel, Research, Communication",
            "entry",
            "finance",
        );
        assert_eq!(WeightedMatchScorer.score(&p, posting(6)), 100);
    }

    #[test]
    fn test_score_is_deterministic() {
        let p = profile("Data Science", "Python, SQL", "intermediate", "data");
        let first = WeightedMatchScorer.breakdown(&p, posting(2));
        for _ in 0..5 {
            assert_eq!(WeightedMatchScorer.breakdown(&p, posting(2)), first);
        }
    }
}
