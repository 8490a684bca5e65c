//! LLM client abstraction and provider management
//!
//! Every model call in the pipeline goes through the [`LLMClient`] trait,
//! so the rest of the crate never touches a provider SDK directly. Two
//! providers are supported: OpenAI (and compatible APIs) and a local
//! Ollama server.

use crate::types::{Result, ToolCall, ToolDefinition};
use async_trait::async_trait;

/// Generic LLM client trait for provider abstraction.
///
/// All providers implement this trait, allowing the runner to swap
/// providers without changing pipeline code. Every method is a suspension
/// point for the calling stage.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a completion with a system prompt.
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String>;

    /// Generate in JSON mode. The expected shape is carried in the system
    /// prompt; this only switches the provider into a JSON output format.
    async fn generate_structured(&self, system: &str, prompt: &str) -> Result<String>;

    /// Generate with tool calling support.
    async fn generate_with_tools(
        &self,
        system: &str,
        prompt: &str,
        tools: &[ToolDefinition],
    ) -> Result<LLMResponse>;

    /// Stream a completion in JSON mode, yielding incremental text chunks.
    async fn stream_structured(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<Box<dyn futures::Stream<Item = Result<String>> + Send + Unpin>>;

    /// Get the model name/identifier.
    fn model_name(&self) -> &str;
}

/// Response from an LLM generation request.
#[derive(Debug, Clone)]
pub struct LLMResponse {
    /// The text content of the response.
    pub content: String,
    /// Any tool calls requested by the model.
    pub tool_calls: Vec<ToolCall>,
    /// The reason generation stopped (e.g., "stop", "tool_calls").
    pub finish_reason: String,
}

/// Provider enum for runtime selection.
#[derive(Debug, Clone)]
pub enum Provider {
    /// OpenAI API provider (including compatible APIs via `api_base`).
    OpenAI {
        api_key: String,
        api_base: String,
        model: String,
    },

    /// Ollama local LLM provider.
    Ollama { base_url: String, model: String },
}

impl Provider {
    /// Create a client instance for this provider.
    pub async fn create_client(&self) -> Result<Box<dyn LLMClient>> {
        match self {
            Provider::OpenAI {
                api_key,
                api_base,
                model,
            } => Ok(Box::new(super::openai::OpenAIClient::new(
                api_key.clone(),
                api_base.clone(),
                model.clone(),
            ))),

            Provider::Ollama { base_url, model } => Ok(Box::new(
                super::ollama::OllamaClient::new(base_url.clone(), model.clone()).await?,
            )),
        }
    }

    /// Copy this provider with a different model.
    ///
    /// The pipeline runs each stage against its own model while sharing
    /// the provider's connection settings.
    pub fn with_model(&self, model: &str) -> Provider {
        match self {
            Provider::OpenAI {
                api_key, api_base, ..
            } => Provider::OpenAI {
                api_key: api_key.clone(),
                api_base: api_base.clone(),
                model: model.to_string(),
            },
            Provider::Ollama { base_url, .. } => Provider::Ollama {
                base_url: base_url.clone(),
                model: model.to_string(),
            },
        }
    }

    /// Get a human-readable name for this provider.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAI { .. } => "OpenAI",
            Provider::Ollama { .. } => "Ollama",
        }
    }
}

/// Configuration-based client factory.
///
/// Holds the default provider and hands out per-model clients so each
/// pipeline stage can run against its own model.
pub struct LLMClientFactory {
    default_provider: Provider,
}

impl LLMClientFactory {
    /// Create a new factory with the specified default provider.
    pub fn new(default_provider: Provider) -> Self {
        Self { default_provider }
    }

    /// Create a client for the default provider with a model override.
    pub async fn create_for_model(&self, model: &str) -> Result<Box<dyn LLMClient>> {
        self.default_provider.with_model(model).create_client().await
    }

    /// Get a reference to the default provider.
    pub fn default_provider(&self) -> &Provider {
        &self.default_provider
    }
}
