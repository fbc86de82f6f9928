//! The fixed internship catalog, loaded with the binary.

use crate::models::internship::{ExperienceLevel, InternshipPosting};

pub static INTERNSHIPS: &[InternshipPosting] = &[
    InternshipPosting {
        id: 1,
        title: "Software Engineering Intern",
        company: "TechCorp",
        location: "San Francisco, CA",
        description:
            "Work on full-stack web development projects using Python, JavaScript, and React",
        required_skills: &["Python", "JavaScript", "React", "Git"],
        preferred_degree: &["Computer Science", "Software Engineering"],
        experience_level: ExperienceLevel::Entry,
        duration: "3 months",
        stipend: "$2500/month",
    },
    InternshipPosting {
        id: 2,
        title: "Data Science Intern",
        company: "DataFlow Analytics",
        location: "New York, NY",
        description:
            "Analyze large datasets and build machine learning models for business insights",
        required_skills: &["Python", "Machine Learning", "SQL", "Statistics"],
        preferred_degree: &["Data Science", "Statistics", "Computer Science", "Mathematics"],
        experience_level: ExperienceLevel::Intermediate,
        duration: "4 months",
        stipend: "$3000/month",
    },
    InternshipPosting {
        id: 3,
        title: "Marketing Analytics Intern",
        company: "BrandBoost",
        location: "Chicago, IL",
        description: "Support marketing campaigns with data analysis and performance tracking",
        required_skills: &["Excel", "Analytics", "Communication", "Marketing"],
        preferred_degree: &["Marketing", "Business", "Economics"],
        experience_level: ExperienceLevel::Entry,
        duration: "3 months",
        stipend: "$2000/month",
    },
    InternshipPosting {
        id: 4,
        title: "UX Design Intern",
        company: "DesignStudio",
        location: "Austin, TX",
        description: "Create user-centered designs and conduct usability testing",
        required_skills: &["Design Thinking", "Figma", "User Research", "Prototyping"],
        preferred_degree: &["Design", "Psychology", "Human-Computer Interaction"],
        experience_level: ExperienceLevel::Entry,
        duration: "4 months",
        stipend: "$2200/month",
    },
    InternshipPosting {
        id: 5,
        title: "Cybersecurity Intern",
        company: "SecureNet",
        location: "Washington, DC",
        description: "Assist in threat analysis and security protocol implementation",
        required_skills: &["Network Security", "Python", "Risk Assessment", "Linux"],
        preferred_degree: &["Cybersecurity", "Computer Science", "Information Technology"],
        experience_level: ExperienceLevel::Intermediate,
        duration: "6 months",
        stipend: "$2800/month",
    },
    InternshipPosting {
        id: 6,
        title: "Finance Intern",
        company: "InvestPro",
        location: "Boston, MA",
        description: "Support financial analysis and investment research",
        required_skills: &["Financial Analysis", "Excel", "Research", "Communication"],
        preferred_degree: &["Finance", "Economics", "Business", "Accounting"],
        experience_level: ExperienceLevel::Entry,
        duration: "3 months",
        stipend: "$2600/month",
    },
];
