//! Execution of agent definitions against an LLM provider
//!
//! [`Runner`] is the seam between the pipeline and the model transport:
//! the production [`LlmRunner`] drives real provider clients, while tests
//! substitute scripted runners. Both structured and streamed invocations
//! resolve their final output through the same JSON decode path.

use crate::agents::{Agent, OutputFormat};
use crate::llm::{LLMClient, LLMClientFactory};
use crate::tools::ToolRegistry;
use crate::types::{AppError, Result};
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// The completed output of a single agent invocation.
#[derive(Debug, Clone)]
pub struct RunResult {
    raw: String,
}

impl RunResult {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Decode the output into the agent's expected schema.
    pub fn final_output_as<T: DeserializeOwned>(&self) -> Result<T> {
        decode_json(&self.raw)
    }

    /// The raw output text, for text agents.
    pub fn into_text(self) -> String {
        self.raw
    }
}

/// Handle over a streamed agent invocation.
///
/// Events are incremental content chunks; they are accumulated internally
/// so that after the stream is exhausted the completed structured result
/// can be decoded with [`RunStream::final_output_as`].
pub struct RunStream {
    inner: Box<dyn Stream<Item = Result<String>> + Send + Unpin>,
    collected: String,
}

impl RunStream {
    pub fn new(inner: Box<dyn Stream<Item = Result<String>> + Send + Unpin>) -> Self {
        Self {
            inner,
            collected: String::new(),
        }
    }

    /// The next incremental event, or `None` once the stream is exhausted.
    pub async fn next_event(&mut self) -> Option<Result<String>> {
        let event = self.inner.next().await;
        if let Some(Ok(chunk)) = &event {
            self.collected.push_str(chunk);
        }
        event
    }

    /// Decode the accumulated output into the agent's expected schema.
    /// Only meaningful after the stream has been fully consumed.
    pub fn final_output_as<T: DeserializeOwned>(&self) -> Result<T> {
        decode_json(&self.collected)
    }
}

fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_str(strip_code_fences(raw))
        .map_err(|e| AppError::Validation(format!("Output did not match the expected schema: {}", e)))
}

/// Models sometimes wrap JSON output in a markdown code fence even when
/// told not to; tolerate that before decoding.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}

/// Executes a single agent invocation.
#[async_trait]
pub trait Runner: Send + Sync {
    /// Run the agent to completion and return its output.
    async fn run(&self, agent: &Agent, input: &str) -> Result<RunResult>;

    /// Run the agent as a stream of incremental events.
    async fn run_streamed(&self, agent: &Agent, input: &str) -> Result<RunStream>;
}

/// Production runner backed by an [`LLMClientFactory`] and a tool registry.
pub struct LlmRunner {
    factory: LLMClientFactory,
    tools: Arc<ToolRegistry>,
}

impl LlmRunner {
    pub fn new(factory: LLMClientFactory, tools: Arc<ToolRegistry>) -> Self {
        Self { factory, tools }
    }

    async fn client_for(&self, agent: &Agent) -> Result<Box<dyn LLMClient>> {
        self.factory.create_for_model(&agent.model).await
    }

    /// One tool round: the model requests calls, we execute them against
    /// the registry, then a follow-up generation produces the final answer
    /// from the tool results.
    async fn run_tool_round(
        &self,
        client: &dyn LLMClient,
        agent: &Agent,
        system: &str,
        input: &str,
    ) -> Result<String> {
        let definitions = self.tools.definitions_for(&agent.tools);
        let response = client.generate_with_tools(system, input, &definitions).await?;

        if response.tool_calls.is_empty() {
            return Ok(response.content);
        }

        let mut tool_outputs = Vec::with_capacity(response.tool_calls.len());
        for call in &response.tool_calls {
            tracing::debug!(agent = %agent.name, tool = %call.name, "executing tool call");
            let value = self.tools.execute(&call.name, call.arguments.clone()).await?;
            tool_outputs.push(format!("[{}] {}", call.name, value));
        }

        let followup = format!("{}\n\nTool results:\n{}", input, tool_outputs.join("\n"));
        client.generate_with_system(system, &followup).await
    }
}

#[async_trait]
impl Runner for LlmRunner {
    async fn run(&self, agent: &Agent, input: &str) -> Result<RunResult> {
        let client = self.client_for(agent).await?;
        let system = agent.system_prompt();
        tracing::debug!(agent = %agent.name, model = %client.model_name(), "running agent");

        let raw = if agent.has_tools() {
            self.run_tool_round(client.as_ref(), agent, &system, input)
                .await?
        } else {
            match &agent.output {
                OutputFormat::Json { .. } => client.generate_structured(&system, input).await?,
                OutputFormat::Text => client.generate_with_system(&system, input).await?,
            }
        };

        Ok(RunResult::new(raw))
    }

    async fn run_streamed(&self, agent: &Agent, input: &str) -> Result<RunStream> {
        let client = self.client_for(agent).await?;
        let system = agent.system_prompt();
        tracing::debug!(agent = %agent.name, model = %client.model_name(), "running agent (streamed)");

        let stream = client.stream_structured(&system, input).await?;
        Ok(RunStream::new(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReportData;
    use futures::stream;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_run_result_decodes_fenced_output() {
        let result = RunResult::new(
            "```json\n{\"short_summary\":\"s\",\"markdown_report\":\"# R\",\"follow_up_questions\":[\"q\"]}\n```",
        );
        let report: ReportData = result.final_output_as().unwrap();
        assert_eq!(report.short_summary, "s");
        assert_eq!(report.follow_up_questions.len(), 1);
    }

    #[test]
    fn test_run_result_decode_failure_is_validation_error() {
        let result = RunResult::new("not json at all");
        let err = result.final_output_as::<ReportData>().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_run_stream_accumulates_chunks() {
        let chunks: Vec<Result<String>> = vec![
            Ok("{\"verified\":".to_string()),
            Ok("true,\"issues\":\"\"}".to_string()),
        ];
        let mut stream = RunStream::new(Box::new(stream::iter(chunks)));

        let mut events = 0;
        while let Some(event) = stream.next_event().await {
            event.unwrap();
            events += 1;
        }
        assert_eq!(events, 2);

        let verification: crate::types::VerificationResult = stream.final_output_as().unwrap();
        assert!(verification.verified);
    }
}
