//! Get item by app item id command implementation.

use anyhow::{Context, Result};
use clap::Args;

use podio::{AppItemId, PodioClient};

use crate::output;

#[derive(Args, Debug)]
pub struct GetByAppItemIdArgs {
    /// App-local item id
    pub app_item_id: u64,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(client: &PodioClient, args: GetByAppItemIdArgs) -> Result<()> {
    let item = client
        .get_item_by_app_item_id(AppItemId::new(args.app_item_id))
        .await
        .with_context(|| {
            format!(
                "Failed to get item {} of app {}",
                args.app_item_id,
                client.app_id()
            )
        })?;

    output::json(&item, args.pretty)
}
