//! Built-in tools available to agents.

pub mod registry;
pub mod search;

pub use registry::{Tool, ToolRegistry};
