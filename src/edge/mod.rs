//! Edge traversal contracts and their implementations.
//!
//! [`EdgeState`] is what every search consumes. [`ShortcutEdgeState`] adds the
//! metadata a contraction-hierarchy search probes for. Stored edges
//! ([`DetachedEdge`]) support both fully; query-time edges
//! ([`VirtualEdgeState`]) support the traversal view and answer hierarchy
//! questions with [`crate::OverlayError::CapabilityNotSupported`].

mod detached;
mod key;
mod shortcut;
mod state;
mod virtual_edge;

pub use detached::DetachedEdge;
pub use key::{PropertyKey, TraversalKey};
pub use shortcut::{shortcut_children, ShortcutEdgeState};
pub use state::EdgeState;
pub use virtual_edge::VirtualEdgeState;
