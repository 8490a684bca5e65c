//! # R.E.P.S. - Research Engine for Personalized Strength
//!
//! A CLI agent that turns a free-text fitness query into a researched,
//! verified markdown report through a fixed four-stage LLM pipeline:
//! plan, search, write, verify.
//!
//! ## Overview
//!
//! R.E.P.S. can be used in two ways:
//!
//! 1. **As a CLI** - run the `reps` binary and enter a query
//! 2. **As a library** - drive [`research::ResearchManager`] from your
//!    own code with any [`agents::Runner`] implementation
//!
//! ### Basic example
//!
//! ```rust,ignore
//! use reps::agents::LlmRunner;
//! use reps::cli::{Output, Printer};
//! use reps::llm::LLMClientFactory;
//! use reps::research::ResearchManager;
//! use reps::tools::ToolRegistry;
//! use reps::utils::config::Config;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> reps::types::Result<()> {
//!     let config = Config::from_env()?;
//!     let runner = Arc::new(LlmRunner::new(
//!         LLMClientFactory::new(config.provider()?),
//!         Arc::new(ToolRegistry::with_default_tools()),
//!     ));
//!     let printer = Arc::new(Printer::new(Output::new()));
//!
//!     ResearchManager::new(runner, printer, config.models)
//!         .run("Design a 12-week strength program for a 30-year-old, 80kg, 178cm male")
//!         .await
//! }
//! ```
//!
//! ## Modules
//!
//! - [`research`] - the pipeline core (orchestrator + search fan-out)
//! - [`agents`] - agent definitions and the runner that executes them
//! - [`llm`] - LLM provider clients (OpenAI, Ollama)
//! - [`tools`] - web search tool and registry
//! - [`cli`] - terminal surface and keyed progress reporting
//! - [`types`] - data model and error handling
//! - [`utils`] - environment configuration
//!
//! ## Failure model
//!
//! Individual web searches may fail and are silently dropped; a failure
//! in the plan, write, or verify stage aborts the run. Nothing is
//! retried and nothing is persisted across runs.

/// Agent definitions and the runner that executes them.
pub mod agents;
/// Terminal surface and keyed progress reporting.
pub mod cli;
/// LLM provider clients and abstractions.
pub mod llm;
/// The research pipeline core.
pub mod research;
/// Built-in tools (web search).
pub mod tools;
/// Core types (data model, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use agents::{Agent, LlmRunner, OutputFormat, RunResult, RunStream, Runner};
pub use cli::{Output, Printer, ProgressSink};
pub use llm::{LLMClient, LLMClientFactory, LLMResponse, Provider};
pub use research::{ResearchManager, SearchCoordinator};
pub use tools::ToolRegistry;
pub use types::{AppError, ReportData, Result, SearchItem, SearchPlan, VerificationResult};
