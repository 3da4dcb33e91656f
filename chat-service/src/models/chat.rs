use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    /// Missing, null or non-string values read as an empty question.
    #[serde(default, deserialize_with = "lenient_string")]
    pub question: String,
}

impl ChatRequest {
    /// Parse a raw body, treating anything unreadable as an empty question.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "Unreadable chat body, using empty question");
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_question_field() {
        let request = ChatRequest::from_body(br#"{"question": "Hostel?"}"#);
        assert_eq!(request.question, "Hostel?");
    }

    #[test]
    fn tolerates_missing_and_non_string_question() {
        assert_eq!(ChatRequest::from_body(b"{}").question, "");
        assert_eq!(ChatRequest::from_body(br#"{"question": null}"#).question, "");
        assert_eq!(ChatRequest::from_body(br#"{"question": 42}"#).question, "");
        assert_eq!(ChatRequest::from_body(br#"{"question": ["a"]}"#).question, "");
    }

    #[test]
    fn tolerates_non_json_body() {
        assert_eq!(ChatRequest::from_body(b"").question, "");
        assert_eq!(ChatRequest::from_body(b"question=hi").question, "");
        assert_eq!(ChatRequest::from_body(b"[1, 2]").question, "");
    }
}
