use serde::{self, Deserialize, Serialize};

use super::{Content, Part, Role};
use crate::config::GenerationSettings;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: i32,
}

impl From<GenerationSettings> for GenerationConfig {
    fn from(settings: GenerationSettings) -> Self {
        Self {
            temperature: settings.temperature,
            top_p: settings.top_p,
            max_output_tokens: settings.max_output_tokens,
        }
    }
}

/// Body of a `models/{model}:generateContent` call.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    pub fn single_turn(prompt: String, settings: GenerationSettings) -> Self {
        Self {
            contents: vec![Content {
                role: Some(Role::User),
                parts: vec![Part::text(prompt)],
            }],
            generation_config: settings.into(),
        }
    }
}
