//! Styled terminal output helpers
//!
//! Progress goes to stdout, warnings to stderr. Warnings mark the two
//! non-fatal steps of the bundle pipeline (icon auto-discovery, disk-image
//! moves).

use console::Style;

/// Print a pipeline section header
pub fn section(title: &str) {
    println!("{}", Style::new().green().bold().apply_to(format!("----> {}", title)));
}

/// Print a non-fatal warning to stderr
pub fn warn(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("Warning:"),
        message
    );
}
