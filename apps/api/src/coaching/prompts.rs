// All oracle prompt templates and fallback texts for the coaching module.
// Placeholders are replaced with `str::replace` before sending.

/// Opening prompt. Replace: {title}, {user_name}
pub const SCENARIO_INTRO_PROMPT: &str = r#"You are a professional communication coach running a '{title}' practice session.

Create an engaging introduction for {user_name} that:
1. Explains the scenario context
2. Sets up the roleplay situation
3. Provides the first prompt or question for the user to respond to

Keep it professional but encouraging. Make it feel like a real-world situation."#;

/// Used when the oracle cannot produce an opening. Replace: {title}
pub const SCENARIO_INTRO_FALLBACK: &str = "Welcome to the {title} practice session! \
    This is a great opportunity to improve your communication skills. \
    Let's begin with a simple question: How would you introduce yourself in this situation?";

/// Feedback prompt for one turn. Replace: {title}, {user_text}, {turn}, {max_turns}
pub const SCENARIO_FEEDBACK_PROMPT: &str = r#"You are a communication coach providing feedback in a '{title}' scenario.
This is exchange {turn} of {max_turns}.

User's latest response: "{user_text}"

Provide:
1. Brief, constructive feedback on their response
2. Specific suggestions for improvement
3. A follow-up question or next challenge

Keep feedback encouraging but specific. Help them improve their communication skills."#;

pub const SCENARIO_FEEDBACK_FALLBACK: &str = "I appreciate your response. \
    Let's continue practicing - can you try expressing that idea in a different way?";

/// Topic tip prompt. Replace: {topic}
pub const TOPIC_TIP_PROMPT: &str = r#"Provide a specific, actionable communication tip related to: {topic}

Make it practical and something someone can implement immediately.
Keep it to 1-2 sentences maximum."#;

/// Tone analysis prompt. Replace: {text}
pub const TONE_ANALYSIS_PROMPT: &str = r#"Analyze the tone and communication effectiveness of this text:

"{text}"

Provide analysis on:
1. Overall tone (professional, casual, confident, etc.)
2. Clarity and conciseness
3. Strengths in the communication
4. Areas for improvement
5. Suggested revisions if needed

Keep feedback constructive and specific."#;

pub const TONE_ANALYSIS_FALLBACK: &str = "I'm having trouble analyzing the tone right now. \
    Generally, aim for clarity, confidence, and appropriate formality for your audience.";

/// Canned tips. The first one doubles as the topic-tip fallback.
pub const QUICK_TIPS: [&str; 10] = [
    "Maintain eye contact to show confidence and engagement",
    "Use the STAR method (Situation, Task, Action, Result) when answering behavioral questions",
    "Practice active listening by paraphrasing what others say",
    "Start with a strong handshake and genuine smile",
    "Prepare 3-5 thoughtful questions to ask your interviewer",
    "Use specific examples to demonstrate your skills and achievements",
    "Match your communication style to your audience",
    "Take a pause before answering difficult questions",
    "End conversations with a clear next step or follow-up",
    "Practice your elevator pitch until it feels natural",
];
