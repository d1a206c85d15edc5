//! Add item command implementation.

use anyhow::{Context, Result};
use clap::Args;

use podio::PodioClient;

use crate::{input, output};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// JSON file with field values keyed by field id or external id (use - for stdin)
    #[arg(long)]
    pub json: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(client: &PodioClient, args: AddArgs) -> Result<()> {
    let fields = input::read_json_object(&args.json)?;

    let item = client
        .add_new_item(&fields)
        .await
        .context("Failed to create item")?;

    output::json(&item, args.pretty)?;
    if let Some(id) = item.item_id() {
        output::success(&format!("Created item {}", id));
    }

    Ok(())
}
