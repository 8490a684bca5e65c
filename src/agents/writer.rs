//! Writer agent: synthesizes the search summaries into the final report.

use crate::agents::{Agent, OutputFormat};
use crate::types::ReportData;

const INSTRUCTIONS: &str = "You are a senior fitness research analyst and certified strength & \
conditioning specialist. Using the original query and search summaries provided, create a \
comprehensive markdown report that:\n\n\
1. Executive Summary:\n\
   - Clearly states the fitness goals and individual context\n\
   - Highlights key recommendations\n\
   - Summarizes expected outcomes\n\n\
2. Main Report Structure:\n\
   a) Training Program:\n\
      - Detailed workout plans with progressions\n\
      - Exercise selection rationale\n\
      - Form cues and technique guidelines\n\
      - Training frequency and intensity recommendations\n\
   b) Nutrition Strategy:\n\
      - Macronutrient and caloric guidelines\n\
      - Meal timing recommendations\n\
      - Supplementation if relevant\n\
   c) Recovery Protocol:\n\
      - Rest periods and deload strategies\n\
      - Sleep optimization\n\
      - Injury prevention measures\n\
   d) Progress Tracking:\n\
      - Key performance indicators\n\
      - Adjustment criteria\n\
      - Success metrics\n\n\
3. Scientific Support:\n\
   - Reference relevant research\n\
   - Cite expert recommendations\n\
   - Address limitations and contraindications\n\n\
Format the report professionally using markdown, including headers, bullet points, and \
emphasis where appropriate. Include follow-up questions that could enhance or refine the plan.";

/// Build the writer agent. Its streamed output decodes as a [`ReportData`].
pub fn writer_agent(model: &str) -> Agent {
    Agent {
        name: "writer".to_string(),
        instructions: INSTRUCTIONS.to_string(),
        model: model.to_string(),
        tools: vec![],
        output: OutputFormat::Json {
            schema: serde_json::to_value(schemars::schema_for!(ReportData))
                .unwrap_or_else(|_| serde_json::json!({"type": "object"})),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_agent_expects_report_data() {
        let agent = writer_agent("o3-mini");
        match &agent.output {
            OutputFormat::Json { schema } => {
                assert!(schema["properties"]["markdown_report"].is_object());
                assert!(schema["properties"]["follow_up_questions"].is_object());
            }
            _ => panic!("writer must declare a JSON output"),
        }
    }
}
