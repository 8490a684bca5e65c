//! Verifier agent: sanity-checks the synthesized report for consistency
//! and safety. Flags gaps and unsupported claims; it never rewrites.

use crate::agents::{Agent, OutputFormat};
use crate::types::VerificationResult;

const INSTRUCTIONS: &str = "You are a professional fitness trainer and exercise physiologist \
with extensive experience. You have been handed a fitness and training program analysis \
report. Your job is to verify that: \
1. The report is internally consistent and follows exercise science principles\n\
2. All training recommendations are safe and appropriate for the specified fitness level\n\
3. The workout progressions and recovery periods are well-balanced\n\
4. Nutritional advice aligns with the training intensity\n\
5. Claims about exercise benefits or outcomes are supported by evidence\n\
6. The program considers injury prevention and proper form\n\n\
Point out any issues, safety concerns, or unsupported claims that need addressing.";

/// Build the verifier agent. Its output decodes as a [`VerificationResult`].
pub fn verifier_agent(model: &str) -> Agent {
    Agent {
        name: "verifier".to_string(),
        instructions: INSTRUCTIONS.to_string(),
        model: model.to_string(),
        tools: vec![],
        output: OutputFormat::Json {
            schema: serde_json::to_value(schemars::schema_for!(VerificationResult))
                .unwrap_or_else(|_| serde_json::json!({"type": "object"})),
        },
    }
}
