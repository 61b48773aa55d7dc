//! HTTP client for the remote conversion service

use crate::constants::{CONVERT_PATH, DEBUG_PATH};
use crate::types::{ConvertRequest, DebugRequest, Language, ServiceReply};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("service returned HTTP {status}{}", reply_excerpt(.body))]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("unreadable reply: {0}")]
    Decode(#[source] reqwest::Error),
}

const EXCERPT_CHARS: usize = 200;

/// ": <first chars of body>" or nothing when the body is blank
fn reply_excerpt(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return String::new();
    }
    let mut excerpt: String = body.chars().take(EXCERPT_CHARS).collect();
    if body.chars().count() > EXCERPT_CHARS {
        excerpt.push_str("...");
    }
    format!(": {excerpt}")
}

/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ConverterClient {
    http: reqwest::Client,
    base_url: String,
}

impl ConverterClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn convert(
        &self,
        code: &str,
        from_language: Language,
        to_language: Language,
    ) -> Result<String, ApiError> {
        let body = ConvertRequest { code, from_language, to_language };
        self.post(CONVERT_PATH, &body).await
    }

    pub async fn debug(&self, code: &str, language: Language) -> Result<String, ApiError> {
        let body = DebugRequest { code, language };
        self.post(DEBUG_PATH, &body).await
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Sending request");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        debug!(url = %url, status = %status, "Response received");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let reply: ServiceReply = response.json().await.map_err(ApiError::Decode)?;
        Ok(reply.msg)
    }
}
