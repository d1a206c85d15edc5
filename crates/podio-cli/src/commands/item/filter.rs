//! Filter items command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use podio::{FilterOptions, PodioClient};

use crate::{input, output};

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// JSON file with filter options (use - for stdin)
    #[arg(long)]
    pub json: Option<String>,

    /// Maximum number of items to return
    #[arg(long)]
    pub limit: Option<u32>,

    /// Number of items to skip
    #[arg(long)]
    pub offset: Option<u32>,

    /// Print the full response instead of one item per line
    #[arg(long)]
    pub raw: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(client: &PodioClient, args: FilterArgs) -> Result<()> {
    let mut options = match &args.json {
        Some(path) => FilterOptions::from_value(input::read_json_object(path)?),
        None => FilterOptions::new(),
    };
    if let Some(limit) = args.limit {
        options = options.limit(limit);
    }
    if let Some(offset) = args.offset {
        options = options.offset(offset);
    }

    let result = client
        .filter_items(&options)
        .await
        .context("Failed to filter items")?;

    if args.raw {
        return output::json(&result, args.pretty);
    }

    let items = result.items();
    if items.is_empty() {
        eprintln!("{}", "No items found.".dimmed());
        return Ok(());
    }

    for item in &items {
        output::json(item, args.pretty)?;
    }

    if let (Some(filtered), Some(total)) = (result.filtered(), result.total()) {
        eprintln!();
        eprintln!("{}: {} of {}", "Matched".dimmed(), filtered, total);
    }

    Ok(())
}
