//! Auth command implementation.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use clap::Args;

use crate::config::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct AuthArgs {}

pub async fn run(connection: &ConnectionArgs, _args: AuthArgs) -> Result<()> {
    let client = connection.client()?;

    let status = client
        .authenticate()
        .await
        .context("Failed to authenticate")?;

    let expires_at = expiry_from(Utc::now(), status.remaining)?;

    output::success("Authenticated");
    output::field("App", &client.app_id().to_string());
    output::field("Expires in", &format!("{}s", status.expires_in));
    output::field(
        "Expires at",
        &expires_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    );

    Ok(())
}

/// Wall-clock expiry for a token with `remaining` lifetime left.
fn expiry_from(now: DateTime<Utc>, remaining: Duration) -> Result<DateTime<Utc>> {
    chrono::Duration::from_std(remaining)
        .ok()
        .and_then(|remaining| now.checked_add_signed(remaining))
        .context("Token lifetime out of range")
}
