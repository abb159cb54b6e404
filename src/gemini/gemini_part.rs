use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    // Optional on the wire; a part without text is treated as missing
    // content at extraction time, not as a parse failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
