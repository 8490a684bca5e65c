//! Agent definitions and the runner that executes them
//!
//! An [`Agent`] is a declarative bundle of instructions, a model name, the
//! tools it may call, and the output shape it is expected to produce. The
//! [`Runner`] trait executes one agent invocation and hands back either a
//! completed [`runner::RunResult`] or a [`runner::RunStream`] of
//! incremental events.
//!
//! The four pipeline agents each live in their own module:
//! [`planner`], [`search`], [`writer`], [`verifier`].

pub mod planner;
pub mod runner;
pub mod search;
pub mod verifier;
pub mod writer;

pub use runner::{LlmRunner, RunResult, RunStream, Runner};

/// A declarative agent definition.
///
/// Agents are cheap value objects; the pipeline constructs them once per
/// run from configuration and passes them to a [`Runner`].
#[derive(Debug, Clone)]
pub struct Agent {
    /// Identifier used in logs and status lines.
    pub name: String,
    /// The agent's system prompt.
    pub instructions: String,
    /// Model this agent runs against.
    pub model: String,
    /// Names of registry tools this agent may call.
    pub tools: Vec<String>,
    /// Expected output shape.
    pub output: OutputFormat,
}

/// The output contract of an agent.
#[derive(Debug, Clone)]
pub enum OutputFormat {
    /// Freeform text.
    Text,
    /// A single JSON document matching the given schema.
    Json { schema: serde_json::Value },
}

impl Agent {
    /// The full system prompt sent to the model.
    ///
    /// For JSON agents the expected schema is appended as a contract block
    /// so every provider shares one decode path.
    pub fn system_prompt(&self) -> String {
        match &self.output {
            OutputFormat::Text => self.instructions.clone(),
            OutputFormat::Json { schema } => format!(
                "{}\n\nRespond with a single JSON object matching this JSON schema, \
                 with no surrounding prose:\n{}",
                self.instructions, schema
            ),
        }
    }

    /// Whether this agent is allowed to call tools.
    pub fn has_tools(&self) -> bool {
        !self.tools.is_empty()
    }
}
