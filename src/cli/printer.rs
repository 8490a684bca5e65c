//! Keyed progress reporting
//!
//! The pipeline reports progress through [`ProgressSink`]: named status
//! lines that can be updated in place and marked done. [`Printer`] is the
//! terminal implementation; tests substitute a recording sink.
//!
//! The sink is the only shared mutable resource in the pipeline. Search
//! tasks update it concurrently, so all state and display writes happen
//! under one mutex: updates are atomic per key (last-writer-wins) and
//! lines never interleave, even if the tasks ever move to parallel
//! threads.

use crate::cli::output::Output;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Keyed, updatable status lines.
pub trait ProgressSink: Send + Sync {
    /// Set the text of a named status line, optionally marking it done.
    fn update(&self, key: &str, text: &str, done: bool);

    /// Mark a named status line as done, keeping its current text.
    fn mark_done(&self, key: &str);

    /// Finalize the display.
    fn end(&self);
}

struct ItemState {
    text: String,
    done: bool,
}

/// Terminal progress sink rendering through [`Output`].
pub struct Printer {
    output: Output,
    items: Mutex<HashMap<String, ItemState>>,
}

impl Printer {
    pub fn new(output: Output) -> Self {
        Self {
            output,
            items: Mutex::new(HashMap::new()),
        }
    }
}

impl ProgressSink for Printer {
    fn update(&self, key: &str, text: &str, done: bool) {
        // Printing happens inside the lock so concurrent updates cannot
        // interleave on the terminal.
        let mut items = self.items.lock();
        let entry = items.entry(key.to_string()).or_insert(ItemState {
            text: String::new(),
            done: false,
        });

        let changed = entry.text != text || entry.done != done;
        entry.text = text.to_string();
        entry.done = done;

        if changed {
            if done {
                self.output.success(text);
            } else {
                self.output.info(text);
            }
        }
    }

    fn mark_done(&self, key: &str) {
        let mut items = self.items.lock();
        if let Some(entry) = items.get_mut(key) {
            if !entry.done {
                entry.done = true;
                self.output.success(&entry.text);
            }
        }
    }

    fn end(&self) {
        self.output.newline();
    }
}
