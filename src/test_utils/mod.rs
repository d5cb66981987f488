use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::ExplainerError;
use crate::llm_client::GenerativeClient;
use crate::llm_request::GenerationRequest;
use crate::models::response::{Candidate, GenerateContentResponse};
use crate::models::{Content, Part, Role};

pub fn text_response(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content {
                role: Some(Role::Model),
                parts: vec![Part::text(text)],
            }),
            finish_reason: Some("STOP".to_string()),
            index: Some(0),
        }],
        ..Default::default()
    }
}

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedClient {
    models: Vec<String>,
    responses: Mutex<VecDeque<Result<GenerateContentResponse, ExplainerError>>>,
    calls: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_models(models: &[&str]) -> Self {
        Self {
            models: models.iter().map(|m| m.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn push_text(&self, text: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text_response(text)));
    }

    pub fn push_empty(&self) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(GenerateContentResponse::default()));
    }

    pub fn push_error(&self, error: ExplainerError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeClient for ScriptedClient {
    async fn list_models(&self) -> Result<Vec<String>, ExplainerError> {
        Ok(self.models.clone())
    }

    async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerateContentResponse, ExplainerError> {
        self.calls.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ExplainerError::ApiError("no scripted response".to_string())))
    }
}
