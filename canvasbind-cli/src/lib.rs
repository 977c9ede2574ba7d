//! Fixture runner for canvasbind.
//!
//! Loads a canvas fixture (collections plus a node tree and a selection)
//! into an in-memory host, drives a plugin session through the usual
//! collection → item → column choices, applies the value and hands back the
//! resulting canvas.

use anyhow::{anyhow, Context, Result};
use canvasbind_host::mock::{CanvasFixture, MemoryCanvas, NodeSpec};
use canvasbind_host::{ApplySummary, DefaultMode, PluginConfig, PluginSession};
use canvasbind_types::CollectionId;
use clap::ValueEnum;
use std::sync::Arc;
use tracing::info;

/// Which apply handler to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Match nodes by name and frames by background color style name.
    #[default]
    Name,
    /// Write to every selected node and descendant by capability alone.
    Kind,
    /// Recolor frames using one color style.
    ColorStyle,
}

impl From<DefaultMode> for Mode {
    fn from(mode: DefaultMode) -> Self {
        match mode {
            DefaultMode::Name => Self::Name,
            DefaultMode::Kind => Self::Kind,
            DefaultMode::ColorStyle => Self::ColorStyle,
        }
    }
}

/// What to pick before applying. Unset choices fall back to the first
/// collection, the first item and column 0.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub collection: Option<String>,
    pub slug: Option<String>,
    /// Column name, or a numeric index into the projected header.
    pub column: Option<String>,
    /// Apply handler; falls back to the configured default mode.
    pub mode: Option<Mode>,
    /// Color style for [`Mode::ColorStyle`]; defaults to the first preset.
    pub style: Option<String>,
}

/// Outcome of one fixture run.
#[derive(Debug)]
pub struct RunReport {
    pub column: String,
    pub value: String,
    /// `None` when nothing was applied (empty selection or host failure).
    pub summary: Option<ApplySummary>,
    pub canvas: Vec<NodeSpec>,
}

/// Runs one apply against `fixture`.
pub async fn run(fixture: CanvasFixture, config: PluginConfig, options: &RunOptions) -> Result<RunReport> {
    let canvas = Arc::new(MemoryCanvas::from_fixture(fixture));
    let mut session = PluginSession::start(Arc::clone(&canvas), config).await?;

    let collection = match &options.collection {
        Some(id) => CollectionId::parse(id)?,
        None => session
            .collections()
            .first()
            .map(|c| c.id.clone())
            .ok_or_else(|| anyhow!("fixture has no collections"))?,
    };
    session.select_collection(&collection).await?;

    let slug = match &options.slug {
        Some(slug) => slug.clone(),
        None => session
            .items()
            .first()
            .map(|item| item.slug.clone())
            .ok_or_else(|| anyhow!("collection {collection} has no items"))?,
    };
    session.select_item(&slug).await?;

    if let Some(column) = &options.column {
        match column.parse::<usize>() {
            Ok(index) => session.select_column(index)?,
            Err(_) => session.select_column_named(column)?,
        }
    }

    let (column, value) = session
        .target()
        .map(|(c, v)| (c.to_owned(), v.to_owned()))
        .context("no column selected")?;
    let mode = options
        .mode
        .unwrap_or_else(|| Mode::from(session.config().mode));
    info!(
        collection = %collection,
        slug = %slug,
        column = %column,
        mode = ?mode,
        "{}",
        session.selection_summary()
    );

    let summary = match mode {
        Mode::Name => session.set_selected().await,
        Mode::Kind => session.set_content_by_kind().await,
        Mode::ColorStyle => {
            let style = options
                .style
                .clone()
                .or_else(|| session.config().color_styles.first().cloned())
                .context("no color style given and none configured")?;
            session.set_color_style(&style).await
        }
    };

    Ok(RunReport {
        column,
        value,
        summary,
        canvas: canvas.tree(),
    })
}

/// Reads and parses a fixture file.
pub async fn load_fixture(path: &std::path::Path) -> Result<CanvasFixture> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read fixture {}", path.display()))?;
    let fixture = CanvasFixture::from_json(&json)
        .with_context(|| format!("failed to parse fixture {}", path.display()))?;
    Ok(fixture)
}
