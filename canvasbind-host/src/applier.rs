//! Writes a chosen cell value into the selected node trees.
//!
//! The walk is depth-first and pre-order: a node is handled before its
//! children, and a node's whole subtree finishes before its next sibling
//! starts. Every host call is awaited before the next one is issued, because
//! image assignment acts on the host's active selection and any interleaving
//! would put an image on the wrong node.
//!
//! The active selection is left wherever the last image assignment put it.
//! Restoring the user's original selection afterwards is not attempted.

use crate::error::HostResult;
use crate::host::CanvasHost;
use crate::node::CanvasNode;
use canvasbind_types::NodeId;
use std::fmt;
use tracing::debug;

/// How nodes are matched against the chosen value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyMode {
    /// Nodes named after the column receive the value by capability
    /// (text, frame background image, instance image control); frames whose
    /// background color style is named after the column receive it as their
    /// background color. Both rules are checked on every node.
    MatchName { column: String },
    /// Every node receives the value by capability alone, regardless of name:
    /// text content, instance image control or frame background color.
    ByKind,
    /// Only frames whose background color style is named `style` receive the
    /// value as their background color.
    ColorStyle { style: String },
}

impl ApplyMode {
    pub fn match_name(column: impl Into<String>) -> Self {
        Self::MatchName {
            column: column.into(),
        }
    }

    pub fn color_style(style: impl Into<String>) -> Self {
        Self::ColorStyle {
            style: style.into(),
        }
    }
}

impl fmt::Display for ApplyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchName { column } => write!(f, "match-name({column})"),
            Self::ByKind => f.write_str("by-kind"),
            Self::ColorStyle { style } => write!(f, "color-style({style})"),
        }
    }
}

/// What one walk did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// Every node visited, in visit order.
    pub visited: Vec<NodeId>,
    pub texts_set: usize,
    pub images_set: usize,
    pub colors_set: usize,
}

impl ApplySummary {
    /// Total number of mutations issued.
    pub fn mutations(&self) -> usize {
        self.texts_set + self.images_set + self.colors_set
    }
}

/// Walks node trees through a [`CanvasHost`] and assigns one value.
pub struct NodeApplier<'a, H: CanvasHost + ?Sized> {
    host: &'a H,
}

impl<'a, H: CanvasHost + ?Sized> NodeApplier<'a, H> {
    pub fn new(host: &'a H) -> Self {
        Self { host }
    }

    /// Applies `target_value` to every node under `roots` that matches
    /// `target_column` by name or by background color style name.
    pub async fn apply(
        &self,
        roots: &[CanvasNode],
        target_column: &str,
        target_value: &str,
    ) -> HostResult<ApplySummary> {
        self.run(roots, &ApplyMode::match_name(target_column), target_value)
            .await
    }

    /// Walks `roots` in order and applies `value` according to `mode`.
    ///
    /// The first failing host call aborts the walk. Nodes mutated before the
    /// failure stay mutated.
    pub async fn run(
        &self,
        roots: &[CanvasNode],
        mode: &ApplyMode,
        value: &str,
    ) -> HostResult<ApplySummary> {
        let mut summary = ApplySummary::default();

        // Popped from the back: push in reverse to visit in order.
        let mut stack: Vec<CanvasNode> = roots.iter().rev().cloned().collect();
        while let Some(node) = stack.pop() {
            summary.visited.push(node.id.clone());
            self.apply_node(&node, mode, value, &mut summary).await?;

            let children = self.host.children(&node.id).await?;
            stack.extend(children.into_iter().rev());
        }

        debug!(
            mode = %mode,
            visited = summary.visited.len(),
            mutations = summary.mutations(),
            "Walk complete"
        );
        Ok(summary)
    }

    async fn apply_node(
        &self,
        node: &CanvasNode,
        mode: &ApplyMode,
        value: &str,
        summary: &mut ApplySummary,
    ) -> HostResult<()> {
        match mode {
            ApplyMode::MatchName { column } => {
                if node.is_named(column) {
                    if node.is_text() {
                        self.set_text(node, value, summary).await?;
                    } else if node.is_frame() && node.has_background_image() {
                        self.assign_image(node, value, summary).await?;
                    } else if node.is_component_instance() && node.has_image_control() {
                        self.assign_image(node, value, summary).await?;
                    }
                }
                self.apply_color_rule(node, column, value, summary).await
            }
            ApplyMode::ByKind => {
                if node.is_text() {
                    self.set_text(node, value, summary).await
                } else if node.has_image_control() {
                    self.assign_image(node, value, summary).await
                } else if node.is_frame() {
                    self.set_background_color(node, value, summary).await
                } else {
                    Ok(())
                }
            }
            ApplyMode::ColorStyle { style } => {
                self.apply_color_rule(node, style, value, summary).await
            }
        }
    }

    async fn apply_color_rule(
        &self,
        node: &CanvasNode,
        style: &str,
        value: &str,
        summary: &mut ApplySummary,
    ) -> HostResult<()> {
        if node.background_style_name() == Some(style) {
            self.set_background_color(node, value, summary).await?;
        }
        Ok(())
    }

    async fn set_text(
        &self,
        node: &CanvasNode,
        value: &str,
        summary: &mut ApplySummary,
    ) -> HostResult<()> {
        debug!(node_id = %node.id, "Setting text");
        self.host.set_text(&node.id, value).await?;
        summary.texts_set += 1;
        Ok(())
    }

    async fn set_background_color(
        &self,
        node: &CanvasNode,
        value: &str,
        summary: &mut ApplySummary,
    ) -> HostResult<()> {
        debug!(node_id = %node.id, color = value, "Setting background color");
        self.host.set_background_color(&node.id, value).await?;
        summary.colors_set += 1;
        Ok(())
    }

    // The host assigns images to whatever is selected, so select exactly
    // this node right before the call.
    async fn assign_image(
        &self,
        node: &CanvasNode,
        value: &str,
        summary: &mut ApplySummary,
    ) -> HostResult<()> {
        debug!(node_id = %node.id, "Selecting node for image assignment");
        self.host.set_selection(std::slice::from_ref(&node.id)).await?;
        self.host.set_image(value).await?;
        summary.images_set += 1;
        Ok(())
    }
}
