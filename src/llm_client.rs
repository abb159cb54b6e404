use crate::config::GeminiSettings;
use crate::gemini::GeminiRequest;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug)]
pub struct GeminiClient {
    http_client: Arc<reqwest::Client>,
    api_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(http_client: Arc<reqwest::Client>, settings: &GeminiSettings) -> Self {
        Self {
            http_client,
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    fn build_target_url(&self) -> String {
        // Gemini takes the API key as a query param; no auth header required.
        if self.api_key.is_empty() {
            self.api_url.clone()
        } else {
            format!("{}?key={}", self.api_url, self.api_key)
        }
    }

    /// Issues one POST to the configured `generateContent` endpoint and
    /// buffers the full reply body. Network failures, timeouts, and
    /// non-success statuses are one undistinguished transport error; no
    /// retries, no streaming.
    pub async fn generate(&self, prompt: &str) -> Result<String, reqwest::Error> {
        let body = GeminiRequest::from_prompt(prompt);

        info!("Sending generate request to: {}", self.api_url);
        debug!("prompt length: {} chars", prompt.len());

        let response = self
            .http_client
            .post(self.build_target_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        response.text().await
    }
}
