//! Concurrent search fan-out
//!
//! One task per planned search, all launched immediately, collected in
//! completion order. A failed search is logged and dropped; it never
//! aborts the stage.

use crate::agents::{Agent, Runner};
use crate::agents::search::search_agent;
use crate::cli::ProgressSink;
use crate::types::{SearchItem, SearchPlan};
use std::sync::Arc;
use tokio::task::JoinSet;

pub struct SearchCoordinator {
    runner: Arc<dyn Runner>,
    sink: Arc<dyn ProgressSink>,
    search_model: String,
}

impl SearchCoordinator {
    pub fn new(
        runner: Arc<dyn Runner>,
        sink: Arc<dyn ProgressSink>,
        search_model: impl Into<String>,
    ) -> Self {
        Self {
            runner,
            sink,
            search_model: search_model.into(),
        }
    }

    /// Run every planned search concurrently and return the summaries of
    /// the ones that succeeded, in completion order.
    pub async fn search_all(&self, plan: &SearchPlan) -> Vec<String> {
        let total = plan.searches.len();
        self.sink.update("searching", "Searching...", false);

        let agent = Arc::new(search_agent(&self.search_model));
        let mut set = JoinSet::new();
        for item in plan.searches.iter().cloned() {
            let runner = Arc::clone(&self.runner);
            let agent = Arc::clone(&agent);
            set.spawn(async move { run_single_search(runner, agent, item).await });
        }

        let mut summaries = Vec::with_capacity(total);
        let mut completed = 0usize;
        while let Some(joined) = set.join_next().await {
            completed += 1;
            match joined {
                Ok(Some(summary)) => summaries.push(summary),
                Ok(None) => {}
                Err(e) => tracing::warn!(error = %e, "search task join error"),
            }
            self.sink.update(
                "searching",
                &format!("Searching... {}/{} completed", completed, total),
                false,
            );
        }

        self.sink.mark_done("searching");
        tracing::info!(
            total,
            succeeded = summaries.len(),
            "search stage complete"
        );
        summaries
    }
}

/// One search invocation. Any failure resolves to `None` rather than
/// propagating; individual search errors are never surfaced to the user.
async fn run_single_search(
    runner: Arc<dyn Runner>,
    agent: Arc<Agent>,
    item: SearchItem,
) -> Option<String> {
    let input = format!("Search term: {}\nReason: {}", item.query, item.reason);
    match runner.run(&agent, &input).await {
        Ok(result) => Some(result.into_text()),
        Err(e) => {
            tracing::warn!(query = %item.query, error = %e, "search failed, dropping result");
            None
        }
    }
}
