//! Mock implementations for testing.
//!
//! Scripted [`Runner`] and recording [`ProgressSink`] implementations
//! shared across test files, so pipeline behavior can be exercised
//! without any network or model access.

use async_trait::async_trait;
use parking_lot::Mutex;
use reps::agents::{Agent, RunResult, RunStream, Runner};
use reps::cli::ProgressSink;
use reps::types::{AppError, Result};
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

/// One scripted outcome for a [`MockRunner::run`] call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Resolve immediately with this output.
    Ok(String),
    /// Fail immediately with an LLM error.
    Err(String),
    /// Resolve with this output after a delay (tokio time).
    OkAfter(Duration, String),
    /// Fail with an LLM error after a delay (tokio time).
    ErrAfter(Duration, String),
}

/// One scripted element of a [`MockRunner::run_streamed`] stream.
#[derive(Debug, Clone)]
pub enum StreamChunk {
    /// Yield an incremental content chunk.
    Chunk(String),
    /// Advance tokio time without yielding anything.
    Wait(Duration),
    /// Yield a stream error and stop.
    Err(String),
}

/// Scripted runner: outcomes are keyed by agent name, either matched by
/// an input substring or consumed from a per-agent queue. Every call is
/// recorded as `(agent_name, input)` in invocation order.
#[derive(Default)]
pub struct MockRunner {
    queues: Mutex<HashMap<String, VecDeque<MockOutcome>>>,
    input_scripts: Mutex<Vec<(String, String, MockOutcome)>>,
    streams: Mutex<HashMap<String, Vec<StreamChunk>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one outcome for the named agent.
    pub fn script(self, agent: &str, outcome: MockOutcome) -> Self {
        self.queues
            .lock()
            .entry(agent.to_string())
            .or_default()
            .push_back(outcome);
        self
    }

    /// Queue several outcomes for the named agent.
    pub fn script_many(self, agent: &str, outcomes: Vec<MockOutcome>) -> Self {
        self.queues
            .lock()
            .entry(agent.to_string())
            .or_default()
            .extend(outcomes);
        self
    }

    /// Script an outcome for calls to the named agent whose input contains
    /// the given substring. Matched before the queue, never consumed.
    pub fn script_for_input(self, agent: &str, needle: &str, outcome: MockOutcome) -> Self {
        self.input_scripts
            .lock()
            .push((agent.to_string(), needle.to_string(), outcome));
        self
    }

    /// Script the streamed response for the named agent.
    pub fn script_stream(self, agent: &str, chunks: Vec<StreamChunk>) -> Self {
        self.streams.lock().insert(agent.to_string(), chunks);
        self
    }

    /// All calls so far, as `(agent_name, input)` in invocation order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().clone()
    }

    /// The agent names invoked so far, in order.
    pub fn called_agents(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(name, _)| name.clone()).collect()
    }

    fn next_outcome(&self, agent: &Agent, input: &str) -> Option<MockOutcome> {
        {
            let scripts = self.input_scripts.lock();
            if let Some((_, _, outcome)) = scripts
                .iter()
                .find(|(name, needle, _)| name == &agent.name && input.contains(needle))
            {
                return Some(outcome.clone());
            }
        }
        self.queues.lock().get_mut(&agent.name)?.pop_front()
    }
}

#[async_trait]
impl Runner for MockRunner {
    async fn run(&self, agent: &Agent, input: &str) -> Result<RunResult> {
        self.calls
            .lock()
            .push((agent.name.clone(), input.to_string()));

        let outcome = self.next_outcome(agent, input).ok_or_else(|| {
            AppError::LLM(format!("no scripted response for agent '{}'", agent.name))
        })?;

        match outcome {
            MockOutcome::Ok(output) => Ok(RunResult::new(output)),
            MockOutcome::Err(message) => Err(AppError::LLM(message)),
            MockOutcome::OkAfter(delay, output) => {
                tokio::time::sleep(delay).await;
                Ok(RunResult::new(output))
            }
            MockOutcome::ErrAfter(delay, message) => {
                tokio::time::sleep(delay).await;
                Err(AppError::LLM(message))
            }
        }
    }

    async fn run_streamed(&self, agent: &Agent, input: &str) -> Result<RunStream> {
        self.calls
            .lock()
            .push((agent.name.clone(), input.to_string()));

        let chunks = self.streams.lock().remove(&agent.name).ok_or_else(|| {
            AppError::LLM(format!("no scripted stream for agent '{}'", agent.name))
        })?;

        let stream = async_stream::stream! {
            for chunk in chunks {
                match chunk {
                    StreamChunk::Chunk(text) => yield Ok(text),
                    StreamChunk::Wait(delay) => tokio::time::sleep(delay).await,
                    StreamChunk::Err(message) => {
                        yield Err(AppError::LLM(message));
                        return;
                    }
                }
            }
        };

        Ok(RunStream::new(Box::new(Box::pin(stream))))
    }
}

/// A recorded progress sink event.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Update {
        key: String,
        text: String,
        done: bool,
    },
    MarkDone {
        key: String,
    },
    End,
}

/// Progress sink that records every event for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().clone()
    }

    /// The texts written to one key, in order.
    pub fn updates_for(&self, key: &str) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Update { key: k, text, .. } if k == key => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether `mark_done` was called for the key.
    pub fn is_marked_done(&self, key: &str) -> bool {
        self.events.lock().iter().any(|event| {
            matches!(event, SinkEvent::MarkDone { key: k } if k == key)
        })
    }
}

impl ProgressSink for RecordingSink {
    fn update(&self, key: &str, text: &str, done: bool) {
        self.events.lock().push(SinkEvent::Update {
            key: key.to_string(),
            text: text.to_string(),
            done,
        });
    }

    fn mark_done(&self, key: &str) {
        self.events.lock().push(SinkEvent::MarkDone {
            key: key.to_string(),
        });
    }

    fn end(&self) {
        self.events.lock().push(SinkEvent::End);
    }
}

// ============= JSON fixtures =============

/// A plan with `n` items, queries `q0..qN`.
pub fn plan_json(n: usize) -> String {
    let items: Vec<String> = (0..n)
        .map(|i| format!(r#"{{"reason":"reason {i}","query":"q{i}"}}"#))
        .collect();
    format!(r#"{{"searches":[{}]}}"#, items.join(","))
}

pub fn report_json() -> String {
    r##"{"short_summary":"A 12-week linear progression plan.","markdown_report":"# 12-Week Strength Program\n\nSquat, bench, deadlift, press.","follow_up_questions":["What equipment is available?","Any injury history?"]}"##
        .to_string()
}

pub fn verification_json(verified: bool) -> String {
    format!(r#"{{"verified":{verified},"issues":""}}"#)
}
