// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene generation endpoint.

use crate::error::ApiError;
use archprompt_layout::{generate_with, GenerateOptions};
use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

/// Request body: a prompt plus any extra keyword parameters.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(flatten)]
    pub options: GenerateOptions,
}

/// POST /api/v1/generate - Generate a scene document.
pub async fn generate(Json(request): Json<GenerateRequest>) -> Result<Response, ApiError> {
    if request.prompt.trim().is_empty() {
        return Err(ApiError::EmptyPrompt);
    }

    tracing::info!(prompt = %request.prompt, "Generating scene");

    // CPU-bound; keep it off the async workers
    let json = tokio::task::spawn_blocking(move || {
        generate_with(&request.prompt, &request.options)
    })
    .await??;

    Ok(([(header::CONTENT_TYPE, "application/json")], json).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_collects_extra_keys() {
        let request: GenerateRequest = serde_json::from_str(
            r#"{"prompt": "A kitchen", "budget": "low", "floors": 2}"#,
        )
        .unwrap();
        assert_eq!(request.prompt, "A kitchen");
        assert_eq!(request.options.extra.len(), 2);
        assert!(!request.options.extra.contains_key("prompt"));
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_prompt() {
        let request = GenerateRequest {
            prompt: "   ".to_string(),
            options: GenerateOptions::default(),
        };
        assert!(matches!(
            generate(Json(request)).await,
            Err(ApiError::EmptyPrompt)
        ));
    }

    #[tokio::test]
    async fn test_generate_returns_json() {
        let request = GenerateRequest {
            prompt: "A scandinavian apartment".to_string(),
            options: GenerateOptions::default(),
        };
        let response = generate(Json(request)).await.unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }
}
