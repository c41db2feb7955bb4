use serde_json::{Value, json};

/// Language code applied when synthesizing a query from plain text.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// The caller's query in validated form.
///
/// Callers may send either a structured Dialogflow `queryInput` object or a
/// plain `text` string. When both are present the structured form wins.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryPayload {
    /// Caller-supplied `queryInput`, forwarded untouched.
    Structured(Value),
    /// Plain text, wrapped into the minimal `queryInput` form on dispatch.
    Text(String),
}

impl QueryPayload {
    /// Build a payload from the two optional request fields. Empty text is
    /// treated as absent. Returns `None` when neither field carries a query.
    #[must_use]
    pub fn from_parts(query_input: Option<Value>, text: Option<String>) -> Option<Self> {
        query_input
            .map(Self::Structured)
            .or_else(|| text.filter(|t| !t.is_empty()).map(Self::Text))
    }

    /// The `detectIntent` request body. Structured input is always wrapped in
    /// an outer `queryInput` object; plain text gets the fixed English
    /// language code.
    #[must_use]
    pub fn into_body(self) -> Value {
        match self {
            Self::Structured(query_input) => json!({ "queryInput": query_input }),
            Self::Text(text) => json!({
                "queryInput": {
                    "text": {
                        "text": text,
                        "languageCode": DEFAULT_LANGUAGE_CODE,
                    }
                }
            }),
        }
    }
}

/// Relative `detectIntent` path for a session, with the session id
/// percent-encoded so reserved characters cannot alter the URL.
#[must_use]
pub fn session_path(project_id: &str, session_id: &str) -> String {
    format!(
        "v2/projects/{project_id}/agent/sessions/{}:detectIntent",
        urlencoding::encode(session_id)
    )
}
