//! Item subcommand implementations.

mod add;
mod filter;
mod get;
mod get_by_app_item_id;
mod update;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::ConnectionArgs;

#[derive(Args, Debug)]
pub struct ItemCommand {
    #[command(subcommand)]
    pub command: ItemSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ItemSubcommand {
    /// Create a new item from a JSON map of field values
    Add(add::AddArgs),

    /// Fetch an item by its item id
    Get(get::GetArgs),

    /// Fetch an item by its app-local item id
    GetByAppItemId(get_by_app_item_id::GetByAppItemIdArgs),

    /// Filter the app's items
    Filter(filter::FilterArgs),

    /// Update field values on an item
    Update(update::UpdateArgs),
}

pub async fn handle(connection: &ConnectionArgs, cmd: ItemCommand) -> Result<()> {
    let client = connection.client()?;

    match cmd.command {
        ItemSubcommand::Add(args) => add::run(&client, args).await,
        ItemSubcommand::Get(args) => get::run(&client, args).await,
        ItemSubcommand::GetByAppItemId(args) => get_by_app_item_id::run(&client, args).await,
        ItemSubcommand::Filter(args) => filter::run(&client, args).await,
        ItemSubcommand::Update(args) => update::run(&client, args).await,
    }
}
