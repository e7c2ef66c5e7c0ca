// src/reply/prompt.rs
// Context lookup tables and provider prompt construction

use super::types::ReplyRequest;

/// Marker that ends the prompt; the provider continues after it
pub const REPLY_MARKER: &str = "Reply:";

/// Phrase used when a relationship code is not in the table
pub const DEFAULT_RELATIONSHIP_CONTEXT: &str = "friend";

/// Phrase used when a mood code is not in the table
pub const DEFAULT_MOOD_CONTEXT: &str = "friendly";

const RELATIONSHIP_CONTEXTS: &[(&str, &str)] = &[
    ("friend", "close friend"),
    ("girlfriend", "girlfriend"),
    ("boyfriend", "boyfriend"),
    ("family", "family member"),
    ("colleague", "work colleague"),
    ("stranger", "acquaintance"),
];

const MOOD_CONTEXTS: &[(&str, &str)] = &[
    ("funny", "humorous and light-hearted"),
    ("witty", "clever and smart"),
    ("serious", "serious and thoughtful"),
    ("romantic", "romantic and affectionate"),
    ("flirty", "playful and flirty"),
    ("sarcastic", "sarcastic but not mean"),
];

fn lookup(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, phrase)| *phrase)
}

/// Descriptive phrase for a relationship code, defaulting on unknown codes
pub fn relationship_context(code: &str) -> &'static str {
    lookup(RELATIONSHIP_CONTEXTS, code).unwrap_or(DEFAULT_RELATIONSHIP_CONTEXT)
}

/// Descriptive phrase for a mood code, defaulting on unknown codes
pub fn mood_context(code: &str) -> &'static str {
    lookup(MOOD_CONTEXTS, code).unwrap_or(DEFAULT_MOOD_CONTEXT)
}

/// Build the provider prompt for a request.
///
/// The message is embedded verbatim and the prompt ends with [`REPLY_MARKER`]
/// so a completion model continues with the reply itself.
pub fn build_prompt(request: &ReplyRequest) -> String {
    let relationship = relationship_context(request.relationship.as_str());
    let mood = mood_context(request.mood.as_str());

    format!(
        "Generate a {mood} reply to this message from a {relationship}.\n\
         \n\
         Message: \"{message}\"\n\
         \n\
         Reply with a natural, appropriate response that matches the relationship and mood. \
         Keep it conversational and authentic. \
         Only return the reply text, no quotes or extra formatting.\n\
         \n\
         {marker}",
        mood = mood,
        relationship = relationship,
        message = request.message,
        marker = REPLY_MARKER,
    )
}
