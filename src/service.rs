use std::fmt;
use std::sync::Arc;

use crate::config::{FailurePolicy, SequenceConfig};
use crate::errors::ExplainerError;
use crate::llm_client::GenerativeClient;
use crate::llm_request;
use crate::prompts::{self, PromptStep};

pub const ABORT_PREFIX: &str = "Generation failed: ";

/// What a single step produced.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Text(String),
    NoCandidate,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepBlock {
    pub step: usize,
    pub label: &'static str,
    pub outcome: StepOutcome,
}

impl fmt::Display for StepBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            StepOutcome::Text(text) => write!(
                f,
                "Step {} result ({}):\n```\n{}\n```\n\n",
                self.step, self.label, text
            ),
            StepOutcome::NoCandidate => {
                write!(f, "Step {}: no valid response received\n\n", self.step)
            }
            StepOutcome::Failed(error) => {
                write!(f, "Step {}: generation failed: {}\n\n", self.step, error)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// One block per step, in step order.
    Completed(Vec<StepBlock>),
    /// A step failed under `FailurePolicy::AbortSequence`.
    Aborted { step: usize, message: String },
}

impl Report {
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Report::Aborted { .. })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Completed(blocks) => {
                blocks.iter().try_for_each(|block| write!(f, "{block}"))
            }
            Report::Aborted { message, .. } => write!(f, "{ABORT_PREFIX}{message}"),
        }
    }
}

/// Runs the five-step explanation sequence against one model.
#[derive(Clone)]
pub struct ExplanationService {
    client: Arc<dyn GenerativeClient>,
    config: SequenceConfig,
}

impl ExplanationService {
    pub fn new(client: Arc<dyn GenerativeClient>, config: SequenceConfig) -> Self {
        Self { client, config }
    }

    pub async fn model_names(&self) -> Result<Vec<String>, ExplainerError> {
        self.client.list_models().await
    }

    async fn run_step(
        &self,
        step: &PromptStep,
        code: &str,
        model_name: &str,
    ) -> Result<StepOutcome, ExplainerError> {
        let request = llm_request::build_step_request(
            step,
            self.config.instruction_source,
            model_name,
            code,
            self.config.settings,
        );

        log::info!("step {}: generation call started ({})", step.index, step.label);
        let response = self.client.generate_content(&request).await?;
        log::info!("step {}: generation call completed", step.index);
        if let Some(usage) = &response.usage_metadata {
            log::debug!(
                "step {}: tokens prompt={} candidates={} total={}",
                step.index,
                usage.prompt_token_count,
                usage.candidates_token_count,
                usage.total_token_count
            );
        }

        match llm_request::first_candidate_text(&response)? {
            Some(text) => Ok(StepOutcome::Text(text)),
            None => {
                log::warn!(
                    "step {}: no valid response received (block reason: {})",
                    step.index,
                    llm_request::block_reason(&response).unwrap_or("none given")
                );
                Ok(StepOutcome::NoCandidate)
            }
        }
    }

    pub async fn explain(&self, code: &str, model_name: &str) -> Report {
        let mut blocks = Vec::with_capacity(prompts::STEPS.len());

        for step in &prompts::STEPS {
            let outcome = match self.run_step(step, code, model_name).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    log::error!("step {}: generation call failed: {}", step.index, e);
                    match self.config.failure_policy {
                        FailurePolicy::AbortSequence => {
                            return Report::Aborted {
                                step: step.index,
                                message: e.to_string(),
                            };
                        }
                        FailurePolicy::IsolateSteps => StepOutcome::Failed(e.to_string()),
                    }
                }
            };

            blocks.push(StepBlock {
                step: step.index,
                label: step.label,
                outcome,
            });
        }

        Report::Completed(blocks)
    }
}
