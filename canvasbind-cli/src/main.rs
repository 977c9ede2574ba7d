//! canvasbind fixture runner
//!
//! Applies one collection cell to the selected nodes of a canvas fixture and
//! prints the resulting canvas as JSON.
//!
//! Usage:
//!   canvasbind fixture.json --collection posts --slug hello --column Title

use anyhow::Result;
use canvasbind_cli::{load_fixture, run, Mode, RunOptions};
use canvasbind_host::PluginConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "canvasbind")]
#[command(about = "Bind CMS collection data to canvas nodes")]
struct Args {
    /// Canvas fixture (collections, node tree and selection) as JSON
    fixture: PathBuf,

    /// Collection id (defaults to the first collection)
    #[arg(long)]
    collection: Option<String>,

    /// Item slug (defaults to the first item)
    #[arg(long)]
    slug: Option<String>,

    /// Column name or index (defaults to the slug column)
    #[arg(long)]
    column: Option<String>,

    /// How nodes are matched (defaults to the config file's `mode`)
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Color style for --mode color-style
    #[arg(long)]
    style: Option<String>,

    /// Path to the plugin config file
    #[arg(short, long, default_value = "canvasbind.toml")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = PluginConfig::load_from(&args.config);
    let fixture = load_fixture(&args.fixture).await?;
    let options = RunOptions {
        collection: args.collection,
        slug: args.slug,
        column: args.column,
        mode: args.mode,
        style: args.style,
    };

    let report = run(fixture, config, &options).await?;
    match &report.summary {
        Some(summary) => info!(
            column = %report.column,
            value = %report.value,
            visited = summary.visited.len(),
            mutations = summary.mutations(),
            "Applied"
        ),
        None => warn!(column = %report.column, "Nothing applied"),
    }

    println!("{}", serde_json::to_string_pretty(&report.canvas)?);
    Ok(())
}
