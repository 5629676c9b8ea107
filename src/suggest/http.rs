//! HTTP transport for the suggestion service.

use async_trait::async_trait;
use log::debug;

use super::{MoveSuggester, SuggestionRequest, SuggestionResponse};
use crate::error::SuggestionError;

/// POSTs the request JSON to `endpoint` and reads `{"move": n}` back.
///
/// Error bodies (`{"error": "..."}`) are accepted with any status code, since
/// the service reports a failed suggestion as a 400 with that body.
#[derive(Clone, Debug)]
pub struct HttpSuggester {
    client: reqwest::Client,
    endpoint: String,
    bearer_token: Option<String>,
}

impl HttpSuggester {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            bearer_token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

#[async_trait]
impl MoveSuggester for HttpSuggester {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<usize, SuggestionError> {
        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| SuggestionError::Transport(e.to_string()))?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| SuggestionError::Transport(e.to_string()))?;
        debug!("Suggestion service answered {status}: {text}");

        match SuggestionResponse::from_json(&text) {
            Ok(response) => response.into_hole(),
            Err(_) if !status.is_success() => {
                Err(SuggestionError::Service(format!("HTTP {status}")))
            }
            Err(e) => Err(e),
        }
    }
}
