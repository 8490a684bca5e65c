//! Colored output helpers for the CLI
//!
//! Provides consistent, colored terminal output for the R.E.P.S. CLI.

use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the R.E.P.S. banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                r#"
   {}
   {}
   {}
   {}
   {}
"#,
                r" ____  _____ ____  ____  ".bright_cyan().bold(),
                r"|  _ \| ____|  _ \/ ___| ".bright_cyan().bold(),
                r"| |_) |  _| | |_) \___ \ ".cyan().bold(),
                r"|  _ <| |___|  __/ ___) |".blue().bold(),
                r"|_| \_\_____|_|   |____/ ".blue().bold(),
            );
            println!(
                "   {} {}\n",
                "Research Engine for Personalized Strength"
                    .bright_white()
                    .bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!(
                r#"
 ____  _____ ____  ____
|  _ \| ____|  _ \/ ___|
| |_) |  _| | |_) \___ \
|  _ <| |___|  __/ ___) |
|_| \_\_____|_|   |____/

   Research Engine for Personalized Strength v{}
"#,
                env!("CARGO_PKG_VERSION")
            );
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Format an info message.
    pub fn format_info(&self, message: &str) -> String {
        if self.colored {
            format!("  {} {}", "•".blue(), message)
        } else {
            format!("  [INFO] {}", message)
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{}", self.format_info(message));
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Format a header for a section.
    pub fn format_header(&self, title: &str) -> String {
        if self.colored {
            format!("\n  {}", title.bright_white().bold().underline())
        } else {
            format!("\n  === {} ===", title)
        }
    }

    /// Print a header for a section
    pub fn header(&self, title: &str) {
        println!("{}", self.format_header(title));
    }

    /// Format a key-value pair.
    pub fn format_kv(&self, key: &str, value: &str) -> String {
        if self.colored {
            format!("    {}: {}", key.dimmed(), value.bright_white())
        } else {
            format!("    {}: {}", key, value)
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        println!("{}", self.format_kv(key, value));
    }

    /// Format a list item.
    pub fn format_list_item(&self, item: &str) -> String {
        if self.colored {
            format!("    {} {}", "•".blue(), item)
        } else {
            format!("    - {}", item)
        }
    }

    /// Print a list item
    pub fn list_item(&self, item: &str) {
        println!("{}", self.format_list_item(item));
    }

    /// Print newline
    pub fn newline(&self) {
        println!();
    }
}
