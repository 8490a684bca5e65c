//! Multi-stage research pipeline
//!
//! The core of the crate: a fixed four-stage pipeline that plans web
//! searches, fans them out concurrently, synthesizes a structured report
//! from the summaries, and runs a verification pass over the result.
//!
//! # Architecture
//!
//! - [`manager::ResearchManager`] - sequences the stages and threads each
//!   stage's output into the next
//! - [`coordinator::SearchCoordinator`] - fan-out/fan-in of the search
//!   stage with partial-failure tolerance
//!
//! # Pipeline
//!
//! 1. **Plan** - one structured call producing 5-15 searches
//! 2. **Search** - one concurrent task per item, collected as completed
//! 3. **Write** - one streamed call consuming all search summaries
//! 4. **Verify** - one structured call over the report's markdown body
//!
//! There are no retries and no persistence; a plan, write, or verify
//! failure aborts the run.

/// Concurrent search fan-out with completion-order collection.
pub mod coordinator;
/// Stage sequencing and final report assembly.
pub mod manager;

pub use coordinator::SearchCoordinator;
pub use manager::ResearchManager;
