//! Plugin session: the user's collection, item and column choices plus the
//! apply handlers bound to them.
//!
//! Picking happens in order: collection, then item (by slug), then column.
//! Each apply handler reads the current selection once, walks it, and
//! reports failures through the log instead of returning them.

use crate::applier::{ApplyMode, ApplySummary, NodeApplier};
use crate::config::PluginConfig;
use crate::error::{SessionError, SessionResult};
use crate::host::CanvasHost;
use crate::selection::SelectionTracker;
use canvasbind_model::{project_item, Collection, CollectionItem, ProjectedItem};
use canvasbind_types::CollectionId;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct PluginSession<H: CanvasHost> {
    host: Arc<H>,
    config: PluginConfig,
    selection: SelectionTracker,
    collections: Vec<Collection>,
    collection: Option<CollectionId>,
    items: Vec<CollectionItem>,
    projected: Option<ProjectedItem>,
    column_index: usize,
}

impl<H: CanvasHost> PluginSession<H> {
    /// Shows the plugin UI, loads the collection list and subscribes to the
    /// canvas selection.
    pub async fn start(host: Arc<H>, config: PluginConfig) -> SessionResult<Self> {
        host.show_ui(&config.ui).await?;
        let collections = host.collections().await?;
        let selection = SelectionTracker::new(host.subscribe_to_selection());
        info!(collections = collections.len(), "Plugin session started");

        Ok(Self {
            host,
            config,
            selection,
            collections,
            collection: None,
            items: Vec::new(),
            projected: None,
            column_index: 0,
        })
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn selected_collection(&self) -> Option<&Collection> {
        let id = self.collection.as_ref()?;
        self.collections.iter().find(|c| &c.id == id)
    }

    /// Picks a collection and loads its items. Clears any item choice.
    pub async fn select_collection(&mut self, id: &CollectionId) -> SessionResult<()> {
        if !self.collections.iter().any(|c| &c.id == id) {
            return Err(SessionError::UnknownCollection(id.clone()));
        }

        self.items = self.host.items(id).await?;
        self.collection = Some(id.clone());
        self.projected = None;
        self.column_index = 0;
        info!(collection = %id, items = self.items.len(), "Collection selected");
        Ok(())
    }

    pub fn items(&self) -> &[CollectionItem] {
        &self.items
    }

    /// Picks an item by slug and projects it into columns and values.
    pub async fn select_item(&mut self, slug: &str) -> SessionResult<&ProjectedItem> {
        let collection = self.collection.as_ref().ok_or(SessionError::NoCollection)?;
        let item = self
            .items
            .iter()
            .find(|item| item.slug == slug)
            .ok_or_else(|| SessionError::UnknownSlug(slug.to_owned()))?;

        let fields = self.host.fields(collection).await?;
        let projected = project_item(&fields, item);
        if self.column_index >= projected.len() {
            self.column_index = 0;
        }
        info!(slug, columns = projected.len(), "Item selected");
        Ok(&*self.projected.insert(projected))
    }

    /// The projected columns and values of the selected item.
    pub fn projected(&self) -> Option<&ProjectedItem> {
        self.projected.as_ref()
    }

    /// Picks the column whose value will be applied.
    pub fn select_column(&mut self, index: usize) -> SessionResult<()> {
        let projected = self.projected.as_ref().ok_or(SessionError::NoItem)?;
        if index >= projected.len() {
            return Err(SessionError::ColumnOutOfRange {
                index,
                len: projected.len(),
            });
        }
        self.column_index = index;
        Ok(())
    }

    /// Picks the column by header name.
    pub fn select_column_named(&mut self, name: &str) -> SessionResult<()> {
        let projected = self.projected.as_ref().ok_or(SessionError::NoItem)?;
        let index = projected
            .position(name)
            .ok_or_else(|| SessionError::UnknownColumn(name.to_owned()))?;
        self.column_index = index;
        Ok(())
    }

    pub fn column_index(&self) -> usize {
        self.column_index
    }

    /// Selected column name and its value for the selected item.
    pub fn target(&self) -> Option<(&str, &str)> {
        self.projected.as_ref()?.cell(self.column_index)
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionTracker {
        &mut self.selection
    }

    /// "You have N layers selected."
    pub fn selection_summary(&self) -> String {
        self.selection.summary()
    }

    /// Applies the selected value to selected nodes named after the column
    /// and to frames whose background color style has the column's name.
    pub async fn set_selected(&self) -> Option<ApplySummary> {
        let (column, _) = self.target()?;
        self.apply(ApplyMode::match_name(column)).await
    }

    /// Applies the selected value to every selected node and descendant by
    /// capability alone.
    pub async fn set_content_by_kind(&self) -> Option<ApplySummary> {
        self.apply(ApplyMode::ByKind).await
    }

    /// Applies the selected value as background color to frames using the
    /// color style `style`.
    pub async fn set_color_style(&self, style: &str) -> Option<ApplySummary> {
        if !self.config.is_color_style(style) {
            warn!(style, "Color style is not one of the configured presets");
        }
        self.apply(ApplyMode::color_style(style)).await
    }

    /// Runs one walk. Empty selection and missing item are no-ops; host
    /// failures are logged and end the walk.
    pub async fn apply(&self, mode: ApplyMode) -> Option<ApplySummary> {
        let roots = self.selection.snapshot();
        if roots.is_empty() {
            warn!(mode = %mode, "No layers selected, nothing to apply");
            return None;
        }

        let Some((_, value)) = self.target() else {
            warn!(mode = %mode, "No collection item selected, nothing to apply");
            return None;
        };

        match NodeApplier::new(self.host.as_ref())
            .run(&roots, &mode, value)
            .await
        {
            Ok(summary) => {
                info!(
                    mode = %mode,
                    roots = roots.len(),
                    visited = summary.visited.len(),
                    mutations = summary.mutations(),
                    "Content applied"
                );
                Some(summary)
            }
            Err(e) => {
                error!(mode = %mode, error = %e, "Error setting content");
                None
            }
        }
    }
}
