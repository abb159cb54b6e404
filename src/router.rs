use crate::models::{ErrorDetail, ErrorResponse, ProcessRequest, ProcessResponse};
use crate::processor::{ContentProcessor, ProcessError};
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct AppState {
    pub processor: Arc<ContentProcessor>,
}

#[axum_macros::debug_handler]
pub async fn process_content(
    State(state): State<AppState>,
    Json(request): Json<ProcessRequest>,
) -> impl IntoResponse {
    info!("Received process request, operation: {}", request.operation);

    match state.processor.process(&request.operation, &request.content).await {
        Ok(result) => {
            debug!("Returning {} chars of cleaned text", result.len());
            (StatusCode::OK, Json(ProcessResponse { result })).into_response()
        }
        Err(ProcessError::InvalidOperation(e)) => {
            info!("Rejecting request: {}", e);
            let error_response = ErrorResponse {
                error: ErrorDetail {
                    message: e.to_string(),
                    r#type: "invalid_request_error".to_string(),
                    code: Some("unknown_operation".to_string()),
                },
            };
            (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
        }
        Err(ProcessError::Upstream(e)) => {
            info!("Upstream request failed: {}", e);
            let error_response = ErrorResponse {
                error: ErrorDetail {
                    message: format!("Upstream request failed: {}", e),
                    r#type: "api_error".to_string(),
                    code: Some("upstream_request_failed".to_string()),
                },
            };
            (StatusCode::BAD_GATEWAY, Json(error_response)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeminiSettings;
    use crate::llm_client::GeminiClient;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};

    fn make_state(api_url: String) -> AppState {
        let client = GeminiClient::new(
            Arc::new(reqwest::Client::new()),
            &GeminiSettings {
                api_url,
                api_key: "test-key".to_string(),
            },
        );
        AppState {
            processor: Arc::new(ContentProcessor::new(client)),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_process_content_ok() {
        let reply = json!({
            "candidates": [{
                "content": {"parts": [{"text": "Hello **World**"}], "role": "model"},
                "finishReason": "STOP",
                "index": 0
            }]
        });
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/generate")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply.to_string())
            .create_async()
            .await;

        let state = make_state(format!("{}/generate", server.url()));
        let request = ProcessRequest {
            operation: "summarize".to_string(),
            content: "an article".to_string(),
        };

        let response = process_content(State(state), Json(request)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let json_body = body_json(response).await;
        assert_eq!(json_body["result"], "Hello World");
    }

    #[tokio::test]
    async fn test_unknown_operation_returns_400() {
        let state = make_state("http://127.0.0.1:1/generate".to_string());
        let request = ProcessRequest {
            operation: "unknown".to_string(),
            content: "text".to_string(),
        };

        let response = process_content(State(state), Json(request)).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json_body = body_json(response).await;
        assert_eq!(json_body["error"]["message"], "Unknown Operation: unknown");
        assert_eq!(json_body["error"]["type"], "invalid_request_error");
        assert_eq!(json_body["error"]["code"], "unknown_operation");
    }

    #[tokio::test]
    async fn test_upstream_failure_returns_502() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/generate")
            .with_status(500)
            .create_async()
            .await;

        let state = make_state(format!("{}/generate", server.url()));
        let request = ProcessRequest {
            operation: "format".to_string(),
            content: "text".to_string(),
        };

        let response = process_content(State(state), Json(request)).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json_body = body_json(response).await;
        assert_eq!(json_body["error"]["type"], "api_error");
        assert_eq!(json_body["error"]["code"], "upstream_request_failed");
    }

    #[tokio::test]
    async fn test_parse_failure_is_not_an_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/generate")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("<html>definitely not json</html>")
            .create_async()
            .await;

        let state = make_state(format!("{}/generate", server.url()));
        let request = ProcessRequest {
            operation: "meetingNotes".to_string(),
            content: "standup".to_string(),
        };

        let response = process_content(State(state), Json(request)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let json_body = body_json(response).await;
        let result = json_body["result"].as_str().unwrap();
        assert!(result.starts_with("Error Parsing: "), "got: {}", result);
    }
}
