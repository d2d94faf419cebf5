//! Output formatting: JSON results on stdout, status lines on stderr.

use anyhow::Result;
use colored::Colorize;
use cpi_core::model::UpdateStatus;
use serde::Serialize;

/// Print a failure line.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print an error with its causes, skipping causes already quoted by their parent.
pub fn error_chain(err: &anyhow::Error) {
    error(&render_chain(err));
}

fn render_chain(err: &anyhow::Error) -> String {
    let mut rendered = String::new();
    for cause in err.chain() {
        let message = cause.to_string();
        if rendered.ends_with(&message) {
            continue;
        }
        if !rendered.is_empty() {
            rendered.push_str(": ");
        }
        rendered.push_str(&message);
    }
    rendered
}

/// Print a labeled summary value.
pub fn field(label: &str, value: impl std::fmt::Display) {
    eprintln!("{}: {}", label.dimmed(), value);
}

/// Print one batch status, marked by outcome.
pub fn status(status: &UpdateStatus) {
    if status.is_failure() {
        println!("{} {} {}", "✗".red(), status.id, status.message);
    } else {
        println!("{} {} {}", "✓".green(), status.id, status.status.as_str().dimmed());
    }
}

/// Print a value as JSON, one document per line unless `pretty`.
pub fn json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
