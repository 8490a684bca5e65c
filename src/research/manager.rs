//! Pipeline orchestration
//!
//! [`ResearchManager`] sequences the four stages: plan, search, write,
//! verify. Each stage's output feeds the next; plan, write, and verify
//! failures are fatal, only individual searches are tolerated.

use crate::agents::Runner;
use crate::agents::planner::planner_agent;
use crate::agents::verifier::verifier_agent;
use crate::agents::writer::writer_agent;
use crate::cli::{Output, ProgressSink};
use crate::research::coordinator::SearchCoordinator;
use crate::types::{ReportData, Result, SearchPlan, VerificationResult};
use crate::utils::config::ModelsConfig;
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Status phrases cycled through while the writer streams. The index
/// advances at most once per [`WRITER_STATUS_INTERVAL`] and pins at the
/// last phrase if the stream outlasts the list.
const WRITER_STATUS: [&str; 7] = [
    "Thinking about report...",
    "Planning report structure...",
    "Writing outline...",
    "Creating sections...",
    "Cleaning up formatting...",
    "Finalizing report...",
    "Finishing report...",
];

const WRITER_STATUS_INTERVAL: Duration = Duration::from_secs(5);

/// Orchestrates the full flow from planning through searching, writing,
/// and verification.
pub struct ResearchManager {
    runner: Arc<dyn Runner>,
    sink: Arc<dyn ProgressSink>,
    models: ModelsConfig,
}

impl ResearchManager {
    pub fn new(runner: Arc<dyn Runner>, sink: Arc<dyn ProgressSink>, models: ModelsConfig) -> Self {
        Self {
            runner,
            sink,
            models,
        }
    }

    /// Run the pipeline for a query and render the final report to stdout.
    pub async fn run(&self, query: &str) -> Result<()> {
        let started = Local::now();
        let (report, verification) = self.run_pipeline(query).await?;
        self.sink.end();

        let generated = started.format("%Y-%m-%d %H:%M:%S").to_string();
        println!(
            "{}",
            Self::render_final(&Output::new(), &report, &verification, &generated)
        );

        Ok(())
    }

    /// Assemble the final output: the short summary line, then the
    /// `REPORT`, `FOLLOW UP QUESTIONS`, and `VERIFICATION` sections in
    /// that fixed order.
    pub fn render_final(
        output: &Output,
        report: &ReportData,
        verification: &VerificationResult,
        generated: &str,
    ) -> String {
        let mut text = String::new();
        text.push_str(&output.format_info(&report.short_summary));
        text.push('\n');

        text.push_str(&output.format_header("REPORT"));
        text.push_str(&format!("\n\n{}\n", report.markdown_report));

        text.push_str(&output.format_header("FOLLOW UP QUESTIONS"));
        text.push('\n');
        for question in &report.follow_up_questions {
            text.push_str(&output.format_list_item(question));
            text.push('\n');
        }

        text.push_str(&output.format_header("VERIFICATION"));
        text.push('\n');
        text.push_str(
            &output.format_kv("verified", if verification.verified { "yes" } else { "no" }),
        );
        text.push('\n');
        if !verification.issues.is_empty() {
            text.push_str(&output.format_kv("issues", &verification.issues));
            text.push('\n');
        }
        text.push_str(&output.format_kv("generated", generated));
        text.push('\n');
        text
    }

    /// The four stages, strictly in order. Split out from [`run`] so tests
    /// can assert the structural shape of the results without capturing
    /// stdout.
    pub async fn run_pipeline(&self, query: &str) -> Result<(ReportData, VerificationResult)> {
        let run_id = Uuid::new_v4();
        self.sink
            .update("run", &format!("Run id: {}", run_id), true);
        self.sink
            .update("start", "Starting fitness research...", true);

        async {
            let plan = self.plan_searches(query).await?;
            let summaries = SearchCoordinator::new(
                Arc::clone(&self.runner),
                Arc::clone(&self.sink),
                self.models.search.clone(),
            )
            .search_all(&plan)
            .await;
            let report = self.write_report(query, &summaries).await?;
            let verification = self.verify_report(&report.markdown_report).await?;
            Ok((report, verification))
        }
        .instrument(tracing::info_span!("research_run", %run_id))
        .await
    }

    async fn plan_searches(&self, query: &str) -> Result<SearchPlan> {
        self.sink.update("planning", "Planning searches...", false);

        let agent = planner_agent(&self.models.planner);
        let result = self.runner.run(&agent, &format!("Query: {}", query)).await?;
        let plan: SearchPlan = result.final_output_as()?;

        self.sink.update(
            "planning",
            &format!("{} searches planned", plan.searches.len()),
            true,
        );
        tracing::info!(count = plan.searches.len(), "search plan resolved");
        Ok(plan)
    }

    async fn write_report(&self, query: &str, summaries: &[String]) -> Result<ReportData> {
        self.sink.update("writing", WRITER_STATUS[0], false);

        let agent = writer_agent(&self.models.writer);
        let input = format!(
            "Original query: {}\nSummarized search results: {:?}",
            query, summaries
        );
        let mut stream = self.runner.run_streamed(&agent, &input).await?;

        let mut next_status = 1;
        let mut last_update = Instant::now();
        while let Some(event) = stream.next_event().await {
            // A stream error aborts the writer stage, and with it the run.
            event?;

            if next_status < WRITER_STATUS.len()
                && last_update.elapsed() >= WRITER_STATUS_INTERVAL
            {
                self.sink.update("writing", WRITER_STATUS[next_status], false);
                next_status += 1;
                last_update = Instant::now();
            }
        }

        self.sink.mark_done("writing");
        stream.final_output_as()
    }

    async fn verify_report(&self, markdown: &str) -> Result<VerificationResult> {
        self.sink.update("verifying", "Verifying report...", false);

        let agent = verifier_agent(&self.models.verifier);
        let result = self.runner.run(&agent, markdown).await?;
        let verification: VerificationResult = result.final_output_as()?;

        self.sink.mark_done("verifying");
        Ok(verification)
    }
}
