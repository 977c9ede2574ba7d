//! Host abstraction and canvas binding logic for canvasbind.
//!
//! The design tool that embeds the plugin is modelled as a [`CanvasHost`]:
//! an async service that lists collections, reports the user's selection,
//! walks the node tree and accepts mutation requests. On top of it:
//!
//! - [`NodeApplier`] walks selected node trees depth-first and writes one
//!   cell value into matching text, image and background-color attributes
//! - [`PluginSession`] holds the collection/item/column choices the user
//!   made and exposes the apply handlers
//! - [`mock::MemoryCanvas`] is an in-memory host for tests and fixtures
//!
//! All host calls are awaited one at a time. Image assignment acts on the
//! host's active selection, so nothing here ever runs two host calls
//! concurrently.

mod applier;
mod config;
mod error;
mod host;
pub mod mock;
mod node;
mod selection;
mod session;

pub use applier::{ApplyMode, ApplySummary, NodeApplier};
pub use config::{DefaultMode, PluginConfig, UiOptions, UiPosition};
pub use error::{HostError, HostResult, SessionError, SessionResult};
pub use host::CanvasHost;
pub use node::{CanvasNode, NodeKind};
pub use selection::SelectionTracker;
pub use session::PluginSession;
