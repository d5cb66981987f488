pub const DEFAULT_MODEL: &str = "gemini-2.0-pro-exp-02-05";
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_API_KEY_FILE: &str = "./api_key.txt";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const API_KEY_HEADER: &str = "x-goog-api-key";

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TOP_P: f32 = 0.95;
pub const DEFAULT_MAX_OUTPUT_TOKENS: i32 = 8192;

pub const MODEL_LIST_PAGE_SIZE: u32 = 100;
pub const MAX_MODEL_LIST_PAGES: usize = 50;

pub const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 300;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
