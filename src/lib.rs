//! Query-time virtual edges for road-network routing.
//!
//! When a query's start or end point snaps onto the interior of a stored
//! edge, the query graph splits that edge into in-memory [`VirtualEdgeState`]s.
//! They implement the same [`EdgeState`] contract as stored edges, so searches
//! never branch on where an edge came from, and the stored graph is never
//! touched.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod edge;
/// Error type shared by every module.
pub mod error;
pub mod geometry;
/// Search tunables and their TOML loader.
pub mod options;
/// Path-level helpers over sequences of edges.
pub mod path;
/// Identifier and flag newtypes.
pub mod types;
/// Edge cost functions.
pub mod weighting;

pub use edge::{
    shortcut_children, DetachedEdge, EdgeState, PropertyKey, ShortcutEdgeState, TraversalKey,
    VirtualEdgeState,
};
pub use error::{OverlayError, Result};
pub use geometry::{FetchMode, GeoPoint, PointList};
pub use options::OverlayOptions;
pub use path::{assemble_geometry, total_distance};
pub use types::{EdgeFlags, EdgeId, NodeId};
pub use weighting::{ShortestWeighting, Weighting};
