use crate::llm::Provider;
use crate::types::{AppError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LLMConfig,
    pub models: ModelsConfig,
}

#[derive(Debug, Clone)]
pub struct LLMConfig {
    /// Which provider to run against: "openai" (default) or "ollama".
    pub provider: String,
    pub openai_api_key: Option<String>,
    pub openai_api_base: String,
    pub ollama_url: String,
}

/// Per-stage model selection.
#[derive(Debug, Clone)]
pub struct ModelsConfig {
    pub planner: String,
    pub search: String,
    pub writer: String,
    pub verifier: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            llm: LLMConfig {
                provider: env::var("REPS_PROVIDER").unwrap_or_else(|_| "openai".to_string()),
                openai_api_key: env::var("OPENAI_API_KEY").ok(),
                openai_api_base: env::var("OPENAI_API_BASE")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                ollama_url: env::var("OLLAMA_URL")
                    .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            },
            models: ModelsConfig {
                planner: env::var("REPS_PLANNER_MODEL").unwrap_or_else(|_| "o3-mini".to_string()),
                search: env::var("REPS_SEARCH_MODEL")
                    .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
                writer: env::var("REPS_WRITER_MODEL").unwrap_or_else(|_| "o3-mini".to_string()),
                verifier: env::var("REPS_VERIFIER_MODEL")
                    .unwrap_or_else(|_| "o3-mini".to_string()),
            },
        })
    }

    /// Resolve the configured default provider.
    pub fn provider(&self) -> Result<Provider> {
        match self.llm.provider.as_str() {
            "openai" => {
                let api_key = self.llm.openai_api_key.clone().ok_or_else(|| {
                    AppError::Config(
                        "OPENAI_API_KEY is required for the openai provider".to_string(),
                    )
                })?;
                Ok(Provider::OpenAI {
                    api_key,
                    api_base: self.llm.openai_api_base.clone(),
                    model: self.models.search.clone(),
                })
            }
            "ollama" => Ok(Provider::Ollama {
                base_url: self.llm.ollama_url.clone(),
                model: self.models.search.clone(),
            }),
            other => Err(AppError::Config(format!(
                "Unknown provider '{}': expected 'openai' or 'ollama'",
                other
            ))),
        }
    }
}
