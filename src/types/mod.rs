use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============= Pipeline Data Model =============

/// A single planned web search with the planner's rationale for it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchItem {
    /// Why this search is relevant to the research query.
    pub reason: String,
    /// The search term to feed into web search.
    pub query: String,
}

/// The ordered set of searches produced by the planning stage.
///
/// The planner's contract is 5-15 items; the count is not validated
/// mechanically here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchPlan {
    pub searches: Vec<SearchItem>,
}

/// The writer stage's structured report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReportData {
    /// A concise executive summary highlighting key recommendations.
    pub short_summary: String,
    /// The full structured markdown report.
    pub markdown_report: String,
    /// Strategic questions for refining the plan in a follow-up run.
    pub follow_up_questions: Vec<String>,
}

/// The verifier stage's judgement of the report's markdown body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VerificationResult {
    /// Whether the report seems coherent, safe, and evidence-based.
    pub verified: bool,
    /// Main issues, safety concerns, or needed clarifications, if any.
    pub issues: String,
}

// ============= Tool Types =============

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: serde_json::Value,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("LLM error: {0}")]
    LLM(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
