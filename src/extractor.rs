use crate::gemini::GeminiResponse;
use tracing::debug;

pub const NO_CONTENT_MESSAGE: &str = "No content found in response";

/// Pulls the generated text out of a raw `generateContent` reply body.
///
/// Parse failures degrade to text instead of propagating: a malformed or
/// shape-mismatched body yields `"Error Parsing: <diagnostic>"`, and a
/// well-formed body with an empty candidate chain yields the fixed
/// no-content message. Callers always receive a string through the
/// success path; only transport failures surface as errors, and those
/// never reach this function.
pub fn extract_text(raw: &str) -> String {
    match serde_json::from_str::<GeminiResponse>(raw) {
        Ok(response) => match response.first_text() {
            Some(text) => text.to_string(),
            None => NO_CONTENT_MESSAGE.to_string(),
        },
        Err(e) => {
            debug!("Failed to parse model response: {}", e);
            format!("Error Parsing: {}", e)
        }
    }
}
