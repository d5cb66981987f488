use crate::config::{GenerationSettings, InstructionSource};
use crate::errors::ExplainerError;
use crate::models::request::GenerateContentRequest;
use crate::models::response::GenerateContentResponse;
use crate::prompts::{self, PromptStep};

const CODE_SEPARATOR: &str = "\n\nInput code:\n";

/// A single generation call: which model, which instruction, which code.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub instruction: String,
    pub code: String,
    pub settings: GenerationSettings,
}

impl GenerationRequest {
    pub fn prompt(&self) -> String {
        format!("{}{}{}", self.instruction, CODE_SEPARATOR, self.code)
    }

    pub fn to_wire(&self) -> GenerateContentRequest {
        GenerateContentRequest::single_turn(self.prompt(), self.settings)
    }
}

pub fn instruction_for(step: &PromptStep, source: InstructionSource) -> &'static str {
    match source {
        InstructionSource::PerStep => step.instruction,
        InstructionSource::Shared(index) => prompts::step(index)
            .map(|shared| shared.instruction)
            .unwrap_or(step.instruction),
    }
}

pub fn build_step_request(
    step: &PromptStep,
    source: InstructionSource,
    model: &str,
    code: &str,
    settings: GenerationSettings,
) -> GenerationRequest {
    GenerationRequest {
        model: model.to_string(),
        instruction: instruction_for(step, source).to_string(),
        code: code.to_string(),
        settings,
    }
}

pub fn validate_generation_request(request: &GenerationRequest) -> Result<(), ExplainerError> {
    if request.model.trim().is_empty() {
        return Err(ExplainerError::ValidationError(
            "error: empty model name".to_string(),
        ));
    }
    Ok(())
}

/// Resource path of a model, as used in `{base}/{path}:generateContent`.
pub fn model_path(model: &str) -> String {
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

/// Why the API refused to answer, when it says so.
pub fn block_reason(response: &GenerateContentResponse) -> Option<&str> {
    response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_deref())
}

/// Text of the first part of the first candidate.
///
/// `Ok(None)` when the API returned no candidate at all. A candidate without
/// any text part is a malformed answer and yields an error.
pub fn first_candidate_text(
    response: &GenerateContentResponse,
) -> Result<Option<String>, ExplainerError> {
    let Some(candidate) = response.candidates.first() else {
        return Ok(None);
    };

    candidate
        .content
        .as_ref()
        .and_then(|content| content.parts.first())
        .and_then(|part| part.text.clone())
        .map(Some)
        .ok_or_else(|| {
            ExplainerError::ParseError(format!(
                "candidate has no text part (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            ))
        })
}
