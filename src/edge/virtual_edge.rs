use std::fmt;

use tracing::trace;

use crate::error::{OverlayError, Result};
use crate::geometry::{FetchMode, PointList};
use crate::types::{EdgeFlags, EdgeId, NodeId};

use super::{EdgeState, PropertyKey, ShortcutEdgeState, TraversalKey};

const NOT_ON_VIRTUAL: &str = "hierarchy metadata on a virtual edge";

/// A directed, query-scoped edge created by snapping a point onto the interior
/// of a stored edge.
///
/// The state lives entirely in memory and is owned by one query. A
/// bidirectional virtual edge is two instances, one per direction; the
/// overlay builder creates both up front because [`EdgeState::detach`] is not
/// available here.
///
/// The unfavored flags are set while the overlay is built and must not change
/// once a search has started. Nothing enforces this; the type has no interior
/// mutability, so sharing it across search threads only ever hands out `&self`.
#[derive(Clone, Debug)]
pub struct VirtualEdgeState {
    original_traversal_key: TraversalKey,
    edge_id: EdgeId,
    base_node: NodeId,
    adj_node: NodeId,
    distance: f64,
    flags: EdgeFlags,
    name: String,
    geometry: PointList,
    unfavored: bool,
    unfavored_reverse: bool,
}

impl VirtualEdgeState {
    /// Creates a virtual edge. `geometry` is moved in and never handed out by
    /// reference afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        original_traversal_key: TraversalKey,
        edge_id: EdgeId,
        base_node: NodeId,
        adj_node: NodeId,
        distance: f64,
        flags: EdgeFlags,
        name: impl Into<String>,
        geometry: PointList,
    ) -> Self {
        trace!(
            edge = %edge_id,
            base = %base_node,
            adj = %adj_node,
            original = %original_traversal_key,
            points = geometry.len(),
            "virtual edge created"
        );
        Self {
            original_traversal_key,
            edge_id,
            base_node,
            adj_node,
            distance,
            flags,
            name: name.into(),
            geometry,
            unfavored: false,
            unfavored_reverse: false,
        }
    }

    /// The stored edge and direction this edge was cut from.
    pub fn original_traversal_key(&self) -> TraversalKey {
        self.original_traversal_key
    }

    /// Marks the forward (`reverse == false`) or reverse direction as
    /// unfavored for leaving or entering a snapped point.
    pub fn set_virtual_edge_preference(&mut self, unfavored: bool, reverse: bool) {
        if reverse {
            self.unfavored_reverse = unfavored;
        } else {
            self.unfavored = unfavored;
        }
    }
}

impl EdgeState for VirtualEdgeState {
    fn edge(&self) -> EdgeId {
        self.edge_id
    }

    fn base_node(&self) -> NodeId {
        self.base_node
    }

    fn adj_node(&self) -> NodeId {
        self.adj_node
    }

    fn distance(&self) -> f64 {
        self.distance
    }

    fn flags(&self) -> EdgeFlags {
        self.flags
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_way_geometry(&self, mode: FetchMode) -> PointList {
        mode.extract(&self.geometry)
    }

    fn get_bool(&self, key: PropertyKey, reverse: bool, default: bool) -> bool {
        if key == PropertyKey::UNFAVORED_EDGE {
            return if reverse {
                self.unfavored_reverse
            } else {
                self.unfavored
            };
        }
        default
    }

    fn set_way_geometry(&mut self, _points: PointList) -> Result<()> {
        Err(OverlayError::CapabilityNotSupported(
            "way geometry of a virtual edge is fixed at creation",
        ))
    }

    fn set_distance(&mut self, distance: f64) -> &mut Self {
        self.distance = distance;
        self
    }

    fn set_flags(&mut self, flags: EdgeFlags) -> &mut Self {
        self.flags = flags;
        self
    }

    fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    fn detach(&self, _reverse: bool) -> Result<Self> {
        Err(OverlayError::CapabilityNotSupported("detach on a virtual edge"))
    }

    fn copy_properties_to(&self, _target: &mut Self) -> Result<()> {
        Err(OverlayError::CapabilityNotSupported(
            "property copy from a virtual edge",
        ))
    }
}

impl ShortcutEdgeState for VirtualEdgeState {
    fn is_shortcut(&self) -> bool {
        false
    }

    fn skipped_edge1(&self) -> Result<EdgeId> {
        Err(OverlayError::CapabilityNotSupported(NOT_ON_VIRTUAL))
    }

    fn skipped_edge2(&self) -> Result<EdgeId> {
        Err(OverlayError::CapabilityNotSupported(NOT_ON_VIRTUAL))
    }

    fn set_skipped_edges(&mut self, _edge1: EdgeId, _edge2: EdgeId) -> Result<()> {
        Err(OverlayError::CapabilityNotSupported(NOT_ON_VIRTUAL))
    }

    fn weight(&self) -> Result<f64> {
        Err(OverlayError::CapabilityNotSupported(NOT_ON_VIRTUAL))
    }

    fn set_weight(&mut self, _weight: f64) -> Result<&mut Self> {
        Err(OverlayError::CapabilityNotSupported(NOT_ON_VIRTUAL))
    }

    fn additional_field(&self) -> Result<i32> {
        Err(OverlayError::CapabilityNotSupported(NOT_ON_VIRTUAL))
    }

    fn set_additional_field(&mut self, _value: i32) -> Result<&mut Self> {
        Err(OverlayError::CapabilityNotSupported(NOT_ON_VIRTUAL))
    }
}

impl fmt::Display for VirtualEdgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.base_node, self.adj_node)
    }
}
