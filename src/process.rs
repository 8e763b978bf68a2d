//! Child process invocation
//!
//! Every external tool goes through [`run`]: the command line is echoed
//! first, the child is awaited to completion, and a non-zero exit becomes a
//! [`QtshipError::ToolFailed`] carrying the child's exit code so `main` can
//! forward it unchanged.

use std::process::Command;

use console::Style;

use crate::error::{QtshipError, Result};

/// Run a command to completion, echoing it first.
pub fn run(cmd: &mut Command, tool: &str) -> Result<()> {
    println!(
        "{} {}",
        Style::new().cyan().bold().apply_to("Running:"),
        render(cmd)
    );

    let status = cmd.status().map_err(|e| QtshipError::SpawnFailed {
        tool: tool.to_string(),
        reason: e.to_string(),
    })?;

    if !status.success() {
        // A signal-terminated child has no exit code
        return Err(QtshipError::ToolFailed {
            tool: tool.to_string(),
            code: status.code().unwrap_or(1),
        });
    }

    Ok(())
}

/// Render a command line for display, quoting arguments that need it.
fn render(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|arg| quote(&arg.to_string_lossy()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.contains([' ', '"', '\'']) {
        format!("'{}'", arg.replace('\'', "'\"'\"'"))
    } else {
        arg.to_string()
    }
}
