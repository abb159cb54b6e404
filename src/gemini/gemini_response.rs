use crate::gemini::GeminiCandidate;
use serde::{Deserialize, Serialize};

/// Reply shape of `generateContent`. Every level is optional: an absent
/// or empty chain is not a wire error, only a missing-content case at
/// extraction time. Fields the service does not read (safety ratings,
/// usage metadata) are ignored by serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<GeminiCandidate>>,
    #[serde(rename = "modelVersion")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(rename = "responseId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
}

impl GeminiResponse {
    /// Walks candidates[0].content.parts[0].text; `None` when any link
    /// in the chain is absent or empty.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .first()?
            .text
            .as_deref()
    }
}
