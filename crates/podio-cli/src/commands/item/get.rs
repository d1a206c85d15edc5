//! Get item command implementation.

use anyhow::{Context, Result};
use clap::Args;

use podio::{ItemId, PodioClient};

use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Item id
    pub item_id: u64,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(client: &PodioClient, args: GetArgs) -> Result<()> {
    let item = client
        .get_item(ItemId::new(args.item_id))
        .await
        .context("Failed to get item")?;

    output::json(&item, args.pretty)
}
