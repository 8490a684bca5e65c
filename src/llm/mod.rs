//! LLM provider clients and abstractions
//!
//! A unified interface over the supported model providers. The pipeline
//! only sees [`LLMClient`]; provider selection happens once at startup
//! from configuration.
//!
//! # Supported providers
//!
//! - **OpenAI** (and compatible APIs) - full support including JSON mode,
//!   streaming, and tool calling
//! - **Ollama** - local inference with streaming; tool calling depends on
//!   model support
//!
//! # Streaming
//!
//! Streamed generations return a `Box<dyn Stream<Item = Result<String>>>`
//! of incremental content chunks.

/// Core LLM client trait, provider enum, and factory.
pub mod client;

pub mod ollama;
pub mod openai;

pub use client::{LLMClient, LLMClientFactory, LLMResponse, Provider};
