//! Tracks the user's canvas selection as pushed by the host.

use crate::node::CanvasNode;
use tokio::sync::watch;

/// Latest-value view over the host's selection subscription.
pub struct SelectionTracker {
    rx: watch::Receiver<Vec<CanvasNode>>,
}

impl SelectionTracker {
    pub fn new(rx: watch::Receiver<Vec<CanvasNode>>) -> Self {
        Self { rx }
    }

    /// Copies the current selection so a walk is unaffected by later
    /// selection changes, including ones the walk itself causes.
    pub fn snapshot(&self) -> Vec<CanvasNode> {
        self.rx.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.rx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.borrow().is_empty()
    }

    /// Waits for the next selection change. Returns `false` once the host
    /// has dropped its end of the subscription.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Human-readable count, e.g. "You have 2 layers selected.".
    pub fn summary(&self) -> String {
        let count = self.len();
        let noun = if count == 1 { "layer" } else { "layers" };
        format!("You have {count} {noun} selected.")
    }
}
