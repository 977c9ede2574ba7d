//! The host environment as seen by the plugin.

use crate::config::UiOptions;
use crate::error::HostResult;
use crate::node::CanvasNode;
use async_trait::async_trait;
use canvasbind_model::{Collection, CollectionItem, Field};
use canvasbind_types::{CollectionId, NodeId};
use tokio::sync::watch;

/// Capabilities the design tool exposes to the plugin.
///
/// Every mutating call is a request the host may reject. Callers must await
/// each call before issuing the next: [`set_image`](Self::set_image) has no
/// node argument and acts on whatever the host considers selected at that
/// moment.
#[async_trait]
pub trait CanvasHost: Send + Sync {
    /// Positions and sizes the plugin's UI container.
    async fn show_ui(&self, options: &UiOptions) -> HostResult<()>;

    /// Lists the collections available in the project.
    async fn collections(&self) -> HostResult<Vec<Collection>>;

    /// Returns a collection's field schema, in display order.
    async fn fields(&self, collection: &CollectionId) -> HostResult<Vec<Field>>;

    /// Returns a collection's items.
    async fn items(&self, collection: &CollectionId) -> HostResult<Vec<CollectionItem>>;

    /// Subscribes to selection changes. The receiver always holds the full
    /// current selection.
    fn subscribe_to_selection(&self) -> watch::Receiver<Vec<CanvasNode>>;

    /// Returns the direct children of a node, in z-order.
    async fn children(&self, node: &NodeId) -> HostResult<Vec<CanvasNode>>;

    /// Replaces the text content of a text node.
    async fn set_text(&self, node: &NodeId, text: &str) -> HostResult<()>;

    /// Overwrites the background color of a frame.
    async fn set_background_color(&self, node: &NodeId, color: &str) -> HostResult<()>;

    /// Makes `nodes` the host's active selection.
    async fn set_selection(&self, nodes: &[NodeId]) -> HostResult<()>;

    /// Assigns an image (by URL) to the current active selection.
    async fn set_image(&self, image: &str) -> HostResult<()>;
}
