use std::sync::Mutex;

use async_trait::async_trait;

use code_explainer::errors::ExplainerError;
use code_explainer::llm_client::GenerativeClient;
use code_explainer::llm_request::GenerationRequest;
use code_explainer::models::response::{Candidate, GenerateContentResponse};
use code_explainer::models::{Content, Part, Role};

/// Deterministic in-memory client: answers every call with a digest of its request.
pub struct EchoClient {
    models: Vec<String>,
    calls: Mutex<Vec<GenerationRequest>>,
}

impl EchoClient {
    pub fn new(models: &[&str]) -> Self {
        Self {
            models: models.iter().map(|m| m.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeClient for EchoClient {
    async fn list_models(&self) -> Result<Vec<String>, ExplainerError> {
        Ok(self.models.clone())
    }

    async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerateContentResponse, ExplainerError> {
        self.calls.lock().unwrap().push(request.clone());

        let text = format!(
            "{} explained {} lines",
            request.model,
            request.code.lines().count()
        );
        Ok(GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some(Role::Model),
                    parts: vec![Part::text(text)],
                }),
                finish_reason: Some("STOP".to_string()),
                index: Some(0),
            }],
            ..Default::default()
        })
    }
}
