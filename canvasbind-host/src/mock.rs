//! In-memory canvas host for tests and fixture runs.
//!
//! [`MemoryCanvas`] keeps a node tree, a set of collections and the active
//! selection in memory, and records every host call in order so tests can
//! check exactly what was asked of the host.

use crate::config::UiOptions;
use crate::error::{HostError, HostResult};
use crate::host::CanvasHost;
use crate::node::{CanvasNode, NodeKind};
use async_trait::async_trait;
use canvasbind_model::{Collection, CollectionItem, Field};
use canvasbind_types::{CollectionId, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::debug;

/// A node together with its subtree, as written in fixture files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    #[serde(flatten)]
    pub node: CanvasNode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn leaf(node: CanvasNode) -> Self {
        Self {
            node,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<NodeSpec>) -> Self {
        self.children = children;
        self
    }
}

/// A collection with its schema and items, as written in fixture files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSpec {
    #[serde(flatten)]
    pub collection: Collection,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub items: Vec<CollectionItem>,
}

/// Full contents of a [`MemoryCanvas`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasFixture {
    #[serde(default)]
    pub collections: Vec<CollectionSpec>,
    #[serde(default)]
    pub canvas: Vec<NodeSpec>,
    /// Ids of the nodes the user has selected.
    #[serde(default)]
    pub selection: Vec<NodeId>,
}

impl CanvasFixture {
    /// Parses a fixture from JSON.
    pub fn from_json(json: &str) -> HostResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One call received by a [`MemoryCanvas`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Children(NodeId),
    SetText { node: NodeId, text: String },
    SetBackgroundColor { node: NodeId, color: String },
    SetSelection(Vec<NodeId>),
    /// `targets` is the active selection the image landed on.
    SetImage { image: String, targets: Vec<NodeId> },
}

#[derive(Default)]
struct CanvasState {
    nodes: HashMap<NodeId, CanvasNode>,
    children: HashMap<NodeId, Vec<NodeId>>,
    roots: Vec<NodeId>,
    active_selection: Vec<NodeId>,
    collections: Vec<CollectionSpec>,
    calls: Vec<HostCall>,
    failing: Option<NodeId>,
    ui: Option<UiOptions>,
}

impl CanvasState {
    fn insert(&mut self, spec: NodeSpec) -> NodeId {
        let id = spec.node.id.clone();
        let child_ids = spec
            .children
            .into_iter()
            .map(|child| self.insert(child))
            .collect();
        self.children.insert(id.clone(), child_ids);
        self.nodes.insert(id.clone(), spec.node);
        id
    }

    fn node_mut(&mut self, id: &NodeId) -> HostResult<&mut CanvasNode> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| HostError::NodeNotFound(id.clone()))
    }

    fn snapshot(&self, ids: &[NodeId]) -> Vec<CanvasNode> {
        ids.iter().filter_map(|id| self.nodes.get(id).cloned()).collect()
    }

    fn spec_of(&self, id: &NodeId) -> Option<NodeSpec> {
        let node = self.nodes.get(id)?.clone();
        let children = self
            .children
            .get(id)
            .map(|ids| ids.iter().filter_map(|c| self.spec_of(c)).collect())
            .unwrap_or_default();
        Some(NodeSpec { node, children })
    }

    fn check(&self, operation: &'static str, id: &NodeId) -> HostResult<()> {
        if self.failing.as_ref() == Some(id) {
            return Err(HostError::CallFailed {
                operation,
                message: format!("injected failure on node {id}"),
            });
        }
        Ok(())
    }

    fn collection(&self, id: &CollectionId) -> HostResult<&CollectionSpec> {
        self.collections
            .iter()
            .find(|c| &c.collection.id == id)
            .ok_or_else(|| HostError::CollectionNotFound(id.clone()))
    }
}

/// An in-memory [`CanvasHost`].
pub struct MemoryCanvas {
    state: Mutex<CanvasState>,
    selection_tx: watch::Sender<Vec<CanvasNode>>,
}

impl Default for MemoryCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCanvas {
    /// Creates an empty canvas with no collections.
    pub fn new() -> Self {
        let (selection_tx, _) = watch::channel(Vec::new());
        Self {
            state: Mutex::new(CanvasState::default()),
            selection_tx,
        }
    }

    /// Builds a canvas from fixture contents, publishing its selection.
    pub fn from_fixture(fixture: CanvasFixture) -> Self {
        let canvas = Self::new();
        {
            let mut state = canvas.state();
            state.collections = fixture.collections;
            for spec in fixture.canvas {
                let id = state.insert(spec);
                state.roots.push(id);
            }
        }
        canvas.select(&fixture.selection);
        canvas
    }

    /// Adds a root node with its subtree.
    pub fn add_root(&self, spec: NodeSpec) -> NodeId {
        let mut state = self.state();
        let id = state.insert(spec);
        state.roots.push(id.clone());
        id
    }

    /// Adds a collection with its schema and items.
    pub fn add_collection(&self, collection: CollectionSpec) {
        self.state().collections.push(collection);
    }

    /// Simulates the user selecting `ids` on the canvas.
    pub fn select(&self, ids: &[NodeId]) {
        let selected = {
            let mut state = self.state();
            state.active_selection = ids.to_vec();
            state.snapshot(ids)
        };
        self.selection_tx.send_replace(selected);
    }

    /// Makes every host call touching `node` fail.
    pub fn fail_on(&self, node: &NodeId) {
        self.state().failing = Some(node.clone());
    }

    /// Current snapshot of a node.
    pub fn node(&self, id: &NodeId) -> Option<CanvasNode> {
        self.state().nodes.get(id).cloned()
    }

    /// The whole canvas as nested specs, roots in insertion order.
    pub fn tree(&self) -> Vec<NodeSpec> {
        let state = self.state();
        state.roots.iter().filter_map(|id| state.spec_of(id)).collect()
    }

    /// The host's active selection.
    pub fn active_selection(&self) -> Vec<NodeId> {
        self.state().active_selection.clone()
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<HostCall> {
        self.state().calls.clone()
    }

    /// Only the mutating calls, in order.
    pub fn mutations(&self) -> Vec<HostCall> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, HostCall::Children(_)))
            .collect()
    }

    /// UI options from the last `show_ui` call.
    pub fn ui(&self) -> Option<UiOptions> {
        self.state().ui.clone()
    }

    fn state(&self) -> MutexGuard<'_, CanvasState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CanvasHost for MemoryCanvas {
    async fn show_ui(&self, options: &UiOptions) -> HostResult<()> {
        self.state().ui = Some(options.clone());
        Ok(())
    }

    async fn collections(&self) -> HostResult<Vec<Collection>> {
        Ok(self
            .state()
            .collections
            .iter()
            .map(|c| c.collection.clone())
            .collect())
    }

    async fn fields(&self, collection: &CollectionId) -> HostResult<Vec<Field>> {
        Ok(self.state().collection(collection)?.fields.clone())
    }

    async fn items(&self, collection: &CollectionId) -> HostResult<Vec<CollectionItem>> {
        Ok(self.state().collection(collection)?.items.clone())
    }

    fn subscribe_to_selection(&self) -> watch::Receiver<Vec<CanvasNode>> {
        self.selection_tx.subscribe()
    }

    async fn children(&self, node: &NodeId) -> HostResult<Vec<CanvasNode>> {
        let mut state = self.state();
        state.calls.push(HostCall::Children(node.clone()));
        state.check("children", node)?;
        let ids = state
            .children
            .get(node)
            .ok_or_else(|| HostError::NodeNotFound(node.clone()))?;
        Ok(state.snapshot(ids))
    }

    async fn set_text(&self, node: &NodeId, text: &str) -> HostResult<()> {
        let mut state = self.state();
        state.calls.push(HostCall::SetText {
            node: node.clone(),
            text: text.to_owned(),
        });
        state.check("set_text", node)?;
        match &mut state.node_mut(node)?.kind {
            NodeKind::Text { text: current } => {
                *current = Some(text.to_owned());
                Ok(())
            }
            _ => Err(HostError::CallFailed {
                operation: "set_text",
                message: format!("node {node} is not a text node"),
            }),
        }
    }

    async fn set_background_color(&self, node: &NodeId, color: &str) -> HostResult<()> {
        let mut state = self.state();
        state.calls.push(HostCall::SetBackgroundColor {
            node: node.clone(),
            color: color.to_owned(),
        });
        state.check("set_background_color", node)?;
        match &mut state.node_mut(node)?.kind {
            NodeKind::Frame {
                background_color, ..
            } => {
                *background_color = Some(color.into());
                Ok(())
            }
            _ => Err(HostError::CallFailed {
                operation: "set_background_color",
                message: format!("node {node} has no background"),
            }),
        }
    }

    async fn set_selection(&self, nodes: &[NodeId]) -> HostResult<()> {
        let selected = {
            let mut state = self.state();
            state.calls.push(HostCall::SetSelection(nodes.to_vec()));
            for id in nodes {
                state.check("set_selection", id)?;
                if !state.nodes.contains_key(id) {
                    return Err(HostError::NodeNotFound(id.clone()));
                }
            }
            state.active_selection = nodes.to_vec();
            state.snapshot(nodes)
        };
        // The real host notifies selection subscribers here too.
        self.selection_tx.send_replace(selected);
        Ok(())
    }

    async fn set_image(&self, image: &str) -> HostResult<()> {
        let mut state = self.state();
        let targets = state.active_selection.clone();
        state.calls.push(HostCall::SetImage {
            image: image.to_owned(),
            targets: targets.clone(),
        });
        for id in &targets {
            state.check("set_image", id)?;
            match &mut state.node_mut(id)?.kind {
                NodeKind::Frame {
                    background_image, ..
                } => *background_image = Some(image.to_owned()),
                NodeKind::ComponentInstance { image_controls } => {
                    if let Some(slot) = image_controls.values_mut().next() {
                        *slot = Some(image.to_owned());
                    }
                }
                NodeKind::Text { .. } | NodeKind::Other => {
                    debug!(node_id = %id, "Selected node cannot hold an image, skipping");
                }
            }
        }
        Ok(())
    }
}
