//! Snapshots of host-owned canvas nodes.
//!
//! The host owns the node tree. These types are read-only copies taken when
//! the host reports a node; mutations go back through
//! [`CanvasHost`](crate::CanvasHost) calls, never through these structs.

use canvasbind_types::{ColorValue, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node on the design canvas, as last reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasNode {
    /// Fixture nodes written without an id get a fresh one on load.
    #[serde(default = "NodeId::generate")]
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// Capability-specific attributes of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Frame {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_color: Option<ColorValue>,
        /// URL of the background image, if one is assigned.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_image: Option<String>,
    },
    /// An instance of a component; maps image control names to the current
    /// image URL (`None` when the control is empty).
    #[serde(rename_all = "camelCase")]
    ComponentInstance {
        #[serde(default)]
        image_controls: BTreeMap<String, Option<String>>,
    },
    /// Any node kind the plugin cannot write to (vectors, SVGs, ...).
    Other,
}

impl CanvasNode {
    pub fn new(id: impl Into<String>, name: Option<&str>, kind: NodeKind) -> Self {
        Self {
            id: NodeId::new(id),
            name: name.map(str::to_owned),
            kind,
        }
    }

    pub fn text(id: impl Into<String>, name: &str, text: &str) -> Self {
        Self::new(id, Some(name), NodeKind::Text { text: Some(text.to_owned()) })
    }

    pub fn frame(id: impl Into<String>, name: &str) -> Self {
        Self::new(
            id,
            Some(name),
            NodeKind::Frame {
                background_color: None,
                background_image: None,
            },
        )
    }

    /// Sets the frame background color; no-op for other kinds.
    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<ColorValue>) -> Self {
        if let NodeKind::Frame { background_color, .. } = &mut self.kind {
            *background_color = Some(color.into());
        }
        self
    }

    /// Sets the frame background image; no-op for other kinds.
    #[must_use]
    pub fn with_background_image(mut self, url: &str) -> Self {
        if let NodeKind::Frame { background_image, .. } = &mut self.kind {
            *background_image = Some(url.to_owned());
        }
        self
    }

    pub fn component_instance(id: impl Into<String>, name: &str, controls: &[&str]) -> Self {
        let image_controls = controls.iter().map(|c| ((*c).to_owned(), None)).collect();
        Self::new(id, Some(name), NodeKind::ComponentInstance { image_controls })
    }

    /// True if the node's name equals `name`. Unnamed nodes never match.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text { .. })
    }

    pub fn is_frame(&self) -> bool {
        matches!(self.kind, NodeKind::Frame { .. })
    }

    pub fn is_component_instance(&self) -> bool {
        matches!(self.kind, NodeKind::ComponentInstance { .. })
    }

    /// Frame that currently has a background image assigned.
    pub fn has_background_image(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Frame {
                background_image: Some(_),
                ..
            }
        )
    }

    /// Component instance exposing at least one image control.
    pub fn has_image_control(&self) -> bool {
        match &self.kind {
            NodeKind::ComponentInstance { image_controls } => !image_controls.is_empty(),
            _ => false,
        }
    }

    /// Name of the color style used as this frame's background, if any.
    pub fn background_style_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Frame {
                background_color: Some(color),
                ..
            } => color.style_name(),
            _ => None,
        }
    }
}
