#![allow(dead_code)]

use serde_json::{Value, json};

pub const SAMPLE_CODE: &str = "def add(a, b):\n    return a + b\n";

pub fn text_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{"text": text}],
                "role": "model"
            },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 42,
            "candidatesTokenCount": 17,
            "totalTokenCount": 59
        },
        "modelVersion": "test-model"
    })
}

pub fn step_responses() -> Vec<(u16, Value)> {
    (1..=5)
        .map(|i| (200, text_response(&format!("explanation part {i}"))))
        .collect()
}

pub fn blocked_response() -> Value {
    json!({
        "promptFeedback": {"blockReason": "SAFETY"},
        "usageMetadata": {"promptTokenCount": 42, "totalTokenCount": 42}
    })
}

pub fn candidate_without_content() -> Value {
    json!({
        "candidates": [{"finishReason": "RECITATION", "index": 0}]
    })
}

pub fn error_body(code: u16, message: &str, status: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message,
            "status": status
        }
    })
}

pub fn model_page(names: &[&str], next_page_token: Option<&str>) -> Value {
    let models: Vec<Value> = names
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "displayName": name.trim_start_matches("models/"),
                "supportedGenerationMethods": ["generateContent", "countTokens"]
            })
        })
        .collect();

    match next_page_token {
        Some(token) => json!({"models": models, "nextPageToken": token}),
        None => json!({"models": models}),
    }
}

pub fn catalog() -> Value {
    model_page(
        &[
            "models/gemini-2.0-flash",
            "gemini-2.0-pro-exp-02-05",
            "test-model",
        ],
        None,
    )
}
