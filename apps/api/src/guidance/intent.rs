//! Chat intent routing by keyword. Checked in a fixed order; first hit wins.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewKind {
    Technical,
    Behavioral,
    General,
}

impl InterviewKind {
    pub fn label(&self) -> &'static str {
        match self {
            InterviewKind::Technical => "Technical Interview",
            InterviewKind::Behavioral => "Behavioral Interview",
            InterviewKind::General => "General Interview",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatIntent {
    AllInternships,
    InterviewPractice {
        kind: InterviewKind,
        /// First double-quoted span of the message, if any.
        answer: Option<String>,
    },
    Networking,
    Trajectory,
    General,
}

impl ChatIntent {
    pub fn classify(message: &str) -> Self {
        let m = message.to_lowercase();
        let has = |needle: &str| m.contains(needle);

        if has("more internships") || has("other opportunities") {
            ChatIntent::AllInternships
        } else if has("interview") && (has("practice") || has("mock") || has("feedback")) {
            let kind = if has("technical") {
                InterviewKind::Technical
            } else if has("behavioral") {
                InterviewKind::Behavioral
            } else {
                InterviewKind::General
            };
            ChatIntent::InterviewPractice {
                kind,
                answer: quoted_answer(message),
            }
        } else if has("network") || has("linkedin") || has("connect") {
            ChatIntent::Networking
        } else if has("career path") || has("trajectory") || has("career plan") {
            ChatIntent::Trajectory
        } else {
            ChatIntent::General
        }
    }
}

/// Text after the first '"' up to the next one (or the end of the message).
fn quoted_answer(message: &str) -> Option<String> {
    message
        .split('"')
        .nth(1)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
