//! Concurrent search stage behavior.

mod common;

use common::mocks::{MockOutcome, MockRunner, RecordingSink};
use reps::research::SearchCoordinator;
use reps::types::{SearchItem, SearchPlan};
use reps::{ProgressSink, Runner};
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;

fn plan(n: usize) -> SearchPlan {
    SearchPlan {
        searches: (0..n)
            .map(|i| SearchItem {
                reason: format!("reason {i}"),
                query: format!("q{i}"),
            })
            .collect(),
    }
}

#[tokio::test]
async fn all_searches_succeed() {
    let runner = Arc::new(MockRunner::new().script_many(
        "search",
        (0..4)
            .map(|i| MockOutcome::Ok(format!("summary {i}")))
            .collect(),
    ));
    let sink = Arc::new(RecordingSink::new());
    let coordinator = SearchCoordinator::new(runner, Arc::clone(&sink) as Arc<dyn ProgressSink>, "test-model");

    let summaries = coordinator.search_all(&plan(4)).await;

    assert_eq!(summaries.len(), 4);
    let updates = sink.updates_for("searching");
    assert_eq!(updates.first().map(String::as_str), Some("Searching..."));
    assert_eq!(
        updates.last().map(String::as_str),
        Some("Searching... 4/4 completed")
    );
    assert!(sink.is_marked_done("searching"));
}

#[rstest]
#[case(5, 2)]
#[case(3, 3)]
#[case(6, 1)]
#[tokio::test]
async fn failed_searches_are_dropped_but_still_counted(
    #[case] total: usize,
    #[case] failures: usize,
) {
    let outcomes = (0..total)
        .map(|i| {
            if i < failures {
                MockOutcome::Err(format!("search {i} timed out"))
            } else {
                MockOutcome::Ok(format!("sum-{i}"))
            }
        })
        .collect();
    let runner = Arc::new(MockRunner::new().script_many("search", outcomes));
    let sink = Arc::new(RecordingSink::new());
    let coordinator = SearchCoordinator::new(runner, Arc::clone(&sink) as Arc<dyn ProgressSink>, "test-model");

    let summaries = coordinator.search_all(&plan(total)).await;

    // Failures are excluded from the results but still count as completed.
    assert_eq!(summaries.len(), total - failures);
    assert_eq!(
        sink.updates_for("searching").last(),
        Some(&format!("Searching... {total}/{total} completed"))
    );
    assert!(sink.is_marked_done("searching"));
}

#[tokio::test]
async fn empty_plan_finishes_immediately() {
    let runner = Arc::new(MockRunner::new());
    let sink = Arc::new(RecordingSink::new());
    let coordinator = SearchCoordinator::new(
        Arc::clone(&runner) as Arc<dyn Runner>,
        Arc::clone(&sink) as Arc<dyn ProgressSink>,
        "m",
    );

    let summaries = coordinator.search_all(&plan(0)).await;

    assert!(summaries.is_empty());
    assert!(runner.calls().is_empty());
    assert!(sink
        .updates_for("searching")
        .iter()
        .all(|text| !text.contains("completed")));
    assert!(sink.is_marked_done("searching"));
}

#[tokio::test(start_paused = true)]
async fn results_arrive_in_completion_order() {
    // q2 resolves first, q0 last.
    let runner = Arc::new(
        MockRunner::new()
            .script_for_input(
                "search",
                "q0",
                MockOutcome::OkAfter(Duration::from_millis(30), "slow".to_string()),
            )
            .script_for_input(
                "search",
                "q1",
                MockOutcome::OkAfter(Duration::from_millis(20), "medium".to_string()),
            )
            .script_for_input(
                "search",
                "q2",
                MockOutcome::OkAfter(Duration::from_millis(10), "fast".to_string()),
            ),
    );
    let sink = Arc::new(RecordingSink::new());
    let coordinator = SearchCoordinator::new(runner, sink, "test-model");

    let summaries = coordinator.search_all(&plan(3)).await;

    assert_eq!(summaries, vec!["fast", "medium", "slow"]);
}

#[tokio::test(start_paused = true)]
async fn progress_counter_is_monotonic() {
    let runner = Arc::new(
        MockRunner::new()
            .script_for_input(
                "search",
                "q0",
                MockOutcome::OkAfter(Duration::from_millis(5), "a".to_string()),
            )
            .script_for_input(
                "search",
                "q1",
                MockOutcome::ErrAfter(Duration::from_millis(15), "boom".to_string()),
            )
            .script_for_input(
                "search",
                "q2",
                MockOutcome::OkAfter(Duration::from_millis(25), "b".to_string()),
            ),
    );
    let sink = Arc::new(RecordingSink::new());
    let coordinator = SearchCoordinator::new(runner, Arc::clone(&sink) as Arc<dyn ProgressSink>, "test-model");

    coordinator.search_all(&plan(3)).await;

    let counts: Vec<String> = sink
        .updates_for("searching")
        .into_iter()
        .filter(|text| text.contains("completed"))
        .collect();
    assert_eq!(
        counts,
        vec![
            "Searching... 1/3 completed",
            "Searching... 2/3 completed",
            "Searching... 3/3 completed",
        ]
    );
}

#[tokio::test]
async fn search_input_carries_query_and_reason() {
    let runner = Arc::new(MockRunner::new().script("search", MockOutcome::Ok("s".to_string())));
    let sink = Arc::new(RecordingSink::new());
    let coordinator = SearchCoordinator::new(Arc::clone(&runner) as Arc<dyn Runner>, sink, "test-model");

    coordinator.search_all(&plan(1)).await;

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].1.contains("Search term: q0"));
    assert!(calls[0].1.contains("Reason: reason 0"));
}
