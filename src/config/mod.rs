use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::consts;
use crate::errors::ExplainerError;
use crate::prompts;

/// Sampling parameters sent with every generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: i32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: consts::DEFAULT_TEMPERATURE,
            top_p: consts::DEFAULT_TOP_P,
            max_output_tokens: consts::DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

/// What the sequencer does when a generation call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Drop everything produced so far and report only the error.
    #[default]
    AbortSequence,
    /// Record the failure in the step's own block and keep going.
    IsolateSteps,
}

impl FromStr for FailurePolicy {
    type Err = ExplainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::AbortSequence),
            "isolate" => Ok(FailurePolicy::IsolateSteps),
            other => Err(ExplainerError::ConfigError(format!(
                "unknown failure policy {other:?}, expected \"abort\" or \"isolate\""
            ))),
        }
    }
}

/// Which step's instruction text is combined with the code for each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionSource {
    /// Every step sends the instruction of the given step index.
    Shared(usize),
    /// Each step sends its own instruction.
    PerStep,
}

impl Default for InstructionSource {
    fn default() -> Self {
        InstructionSource::Shared(prompts::FINAL_STEP)
    }
}

impl FromStr for InstructionSource {
    type Err = ExplainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "final" => Ok(InstructionSource::Shared(prompts::FINAL_STEP)),
            "per-step" => Ok(InstructionSource::PerStep),
            other => Err(ExplainerError::ConfigError(format!(
                "unknown instruction source {other:?}, expected \"final\" or \"per-step\""
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SequenceConfig {
    pub settings: GenerationSettings,
    pub failure_policy: FailurePolicy,
    pub instruction_source: InstructionSource,
}

#[derive(Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub host: String,
    pub port: u16,
    pub default_model: String,
    pub read_timeout_secs: u64,
    pub sequence: SequenceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: consts::DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            host: consts::DEFAULT_HOST.to_string(),
            port: consts::DEFAULT_PORT,
            default_model: consts::DEFAULT_MODEL.to_string(),
            read_timeout_secs: consts::DEFAULT_READ_TIMEOUT_SECS,
            sequence: SequenceConfig::default(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("host", &self.host)
            .field("port", &self.port)
            .field("default_model", &self.default_model)
            .field("read_timeout_secs", &self.read_timeout_secs)
            .field("sequence", &self.sequence)
            .finish()
    }
}

pub trait CredentialLoader: Send + Sync {
    fn load_credential(&self) -> Option<String>;
}

/// Reads the API key from a file holding nothing but the bare secret.
pub struct FileCredentialLoader {
    path: PathBuf,
}

impl FileCredentialLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialLoader for FileCredentialLoader {
    fn load_credential(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let key = contents.trim();
                if key.is_empty() {
                    log::error!("API key file {} is empty", self.path.display());
                    None
                } else {
                    Some(key.to_string())
                }
            }
            Err(e) => {
                log::error!(
                    "could not read API key file {}: {}; set the API key there or in {}",
                    self.path.display(),
                    e,
                    consts::API_KEY_ENV
                );
                None
            }
        }
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, ExplainerError>;
}

type VarLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Builds the configuration from `CE_*` environment variables.
pub struct EnvConfigLoader {
    lookup: VarLookup,
}

impl EnvConfigLoader {
    pub fn new() -> Self {
        Self::with_lookup(|name| std::env::var(name).ok())
    }

    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    fn var(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|value| !value.trim().is_empty())
    }

    fn parsed<T>(&self, name: &str, default: T) -> Result<T, ExplainerError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.var(name) {
            Some(raw) => raw.trim().parse().map_err(|e| {
                ExplainerError::ConfigError(format!("invalid value {raw:?} for {name}: {e}"))
            }),
            None => Ok(default),
        }
    }

    fn api_key(&self) -> String {
        let key_file = self
            .var("CE_API_KEY_FILE")
            .unwrap_or(consts::DEFAULT_API_KEY_FILE.to_string());

        FileCredentialLoader::new(key_file)
            .load_credential()
            .filter(|key| !key.is_empty())
            .or_else(|| self.var(consts::API_KEY_ENV))
            .unwrap_or_default()
    }
}

impl Default for EnvConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for EnvConfigLoader {
    fn load_config(&self) -> Result<Config, ExplainerError> {
        let defaults = Config::default();

        let settings = GenerationSettings {
            temperature: self.parsed("CE_TEMPERATURE", defaults.sequence.settings.temperature)?,
            top_p: self.parsed("CE_TOP_P", defaults.sequence.settings.top_p)?,
            max_output_tokens: self.parsed(
                "CE_MAX_OUTPUT_TOKENS",
                defaults.sequence.settings.max_output_tokens,
            )?,
        };

        let instruction_source: InstructionSource =
            self.parsed("CE_INSTRUCTION_SOURCE", defaults.sequence.instruction_source)?;

        let config = Config {
            api_url: self
                .var("CE_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            api_key: self.api_key(),
            host: self.var("CE_HOST").unwrap_or(defaults.host),
            port: self.parsed("CE_PORT", defaults.port)?,
            default_model: self.var("CE_DEFAULT_MODEL").unwrap_or(defaults.default_model),
            read_timeout_secs: self.parsed("CE_READ_TIMEOUT_SECS", defaults.read_timeout_secs)?,
            sequence: SequenceConfig {
                settings,
                failure_policy: self.parsed("CE_FAILURE_POLICY", defaults.sequence.failure_policy)?,
                instruction_source,
            },
        };

        if config.api_key.is_empty() {
            log::warn!("no API key configured; requests to the generation API will be rejected");
        }

        Ok(config)
    }
}

pub fn load_config() -> Result<Config, ExplainerError> {
    let loader = EnvConfigLoader::new();
    loader.load_config()
}
