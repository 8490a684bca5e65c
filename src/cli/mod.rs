//! CLI surface for R.E.P.S.
//!
//! The interface is a single interactive prompt: one freeform line of
//! text as the research query, no flags. Progress and the final report
//! are written to standard output.

pub mod output;
pub mod printer;

pub use output::Output;
pub use printer::{Printer, ProgressSink};

use crate::types::Result;
use std::io::{self, Write};

/// Read one freeform research query from standard input.
pub fn read_query() -> Result<String> {
    print!("Enter a fitness research query: ");
    io::stdout().flush()?;

    let mut query = String::new();
    io::stdin().read_line(&mut query)?;
    Ok(query.trim().to_string())
}
