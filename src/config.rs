use std::env;

/// Production endpoint of the recommendation API
const DEFAULT_API_URL: &str =
    "https://77ywt7l8yd.execute-api.us-east-1.amazonaws.com/prod/recommend";

/// The TUI owns the terminal, so log output goes to a file
const DEFAULT_LOG_FILE: &str = "rs-rag-ui.log";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub log_file: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("RAG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            log_file: env::var("RAG_UI_LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
