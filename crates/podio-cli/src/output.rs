//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a success message.
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as JSON, compact or pretty.
pub fn json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

/// Print a failed command, including the HTTP status and raw body when the
/// failure came from Podio.
pub fn report(err: &anyhow::Error) {
    error(&format!("{:#}", err));

    if let Some(podio_err) = err.downcast_ref::<podio::Error>() {
        if let Some(status) = podio_err.status_code() {
            eprintln!("{}: {}", "Status".dimmed(), status);
        }
        if let Some(raw) = podio_err.response_raw().filter(|r| !r.is_empty()) {
            eprintln!("{}: {}", "Response".dimmed(), raw);
        }
    }
}
