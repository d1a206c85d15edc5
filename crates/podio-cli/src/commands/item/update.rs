//! Update item command implementation.

use anyhow::{Context, Result};
use clap::Args;

use podio::{ItemId, PodioClient};

use crate::{input, output};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Item id
    pub item_id: u64,

    /// JSON file with the field values to set (use - for stdin)
    #[arg(long)]
    pub json: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(client: &PodioClient, args: UpdateArgs) -> Result<()> {
    let fields = input::read_json_object(&args.json)?;

    let result = client
        .update_item(ItemId::new(args.item_id), &fields)
        .await
        .with_context(|| format!("Failed to update item {}", args.item_id))?;

    output::json(&result, args.pretty)?;
    output::success(&format!("Updated item {}", args.item_id));

    Ok(())
}
