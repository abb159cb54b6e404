use crate::gemini::{GeminiContent, GeminiPart};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

impl GeminiRequest {
    /// Wraps a single prompt into the `generateContent` body shape:
    /// `{"contents":[{"parts":[{"text": prompt}]}]}`.
    pub fn from_prompt(prompt: &str) -> Self {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: None,
                parts: Some(vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }]),
            }],
        }
    }
}
