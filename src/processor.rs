use crate::extractor::extract_text;
use crate::llm_client::GeminiClient;
use crate::markdown::clean_markdown;
use crate::prompt::{build_prompt, UnknownOperation};
use std::fmt;
use tracing::{debug, info};

/// The two failure classes the pipeline can surface. Everything else
/// (parse failures, missing content) degrades to sentinel text and
/// travels through the success path.
#[derive(Debug)]
pub enum ProcessError {
    /// Unrecognized operation tag; a client input error, not retryable.
    InvalidOperation(UnknownOperation),
    /// The outbound call failed; propagated unmasked.
    Upstream(reqwest::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::InvalidOperation(e) => write!(f, "{}", e),
            ProcessError::Upstream(e) => write!(f, "Upstream request failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}

#[derive(Debug)]
pub struct ContentProcessor {
    llm_client: GeminiClient,
}

impl ContentProcessor {
    pub fn new(llm_client: GeminiClient) -> Self {
        Self { llm_client }
    }

    /// Runs the full pipeline: template dispatch, one model call,
    /// text extraction, markdown cleanup. Stateless; concurrent calls
    /// share nothing but the read-only client configuration.
    pub async fn process(&self, operation: &str, content: &str) -> Result<String, ProcessError> {
        let prompt = build_prompt(operation, content).map_err(ProcessError::InvalidOperation)?;
        info!("Processing '{}' request ({} chars of content)", operation, content.len());

        let raw = self
            .llm_client
            .generate(&prompt)
            .await
            .map_err(ProcessError::Upstream)?;
        debug!("received {} bytes from model", raw.len());

        // Extraction never fails; diagnostics come back as text and go
        // through the cleaner like any other reply.
        Ok(clean_markdown(&extract_text(&raw)))
    }
}
