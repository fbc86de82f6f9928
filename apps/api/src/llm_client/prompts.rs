// Shared prompt constants and prompt-building utilities.
// Each module that needs the oracle defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt sent with every oracle call.
pub const COACH_SYSTEM: &str = "You are MENTORA, a supportive career and communication coach \
    for students looking for internships. \
    Answer in plain prose. \
    Be specific, encouraging and concise. \
    Never invent facts about the student beyond what the prompt provides.";

/// Appended to prompts whose answer is shown inline in a chat bubble.
pub const CONCISE_INSTRUCTION: &str =
    "Keep the whole answer under 200 words. Use short paragraphs or a numbered list.";

/// Fills `{name}` placeholders in one pass. Substituted values are never
/// scanned again, so user text containing `{...}` comes through verbatim.
/// Unknown placeholders are left as they are.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let hit = tail.find('}').and_then(|close| {
            let name = &tail[1..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });
        match hit {
            Some((close, value)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
