use std::fmt;

#[derive(Debug, Clone)]
pub enum ExplainerError {
    ValidationError(String),
    ApiError(String),
    ParseError(String),
    ConfigError(String),
    NetworkError(String),
}

impl fmt::Display for ExplainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplainerError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ExplainerError::ApiError(msg) => write!(f, "API error: {}", msg),
            ExplainerError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ExplainerError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            ExplainerError::NetworkError(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for ExplainerError {}

impl From<reqwest::Error> for ExplainerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            ExplainerError::NetworkError(err.to_string())
        } else if err.is_decode() {
            ExplainerError::ParseError(err.to_string())
        } else {
            ExplainerError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ExplainerError {
    fn from(err: serde_json::Error) -> Self {
        ExplainerError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for ExplainerError {
    fn from(err: std::io::Error) -> Self {
        ExplainerError::ConfigError(err.to_string())
    }
}
