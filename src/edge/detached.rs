use std::fmt;

use crate::error::{OverlayError, Result};
use crate::geometry::{FetchMode, PointList};
use crate::types::{EdgeFlags, EdgeId, NodeId};

use super::{EdgeState, PropertyKey, ShortcutEdgeState, TraversalKey};

/// Owned snapshot of a stored edge as a search sees it.
///
/// Unlike [`super::VirtualEdgeState`] it supports the whole contract: it can be
/// flipped with [`EdgeState::detach`], receive new geometry, copy its
/// properties and carry shortcut metadata.
#[derive(Clone, Debug)]
pub struct DetachedEdge {
    edge_id: EdgeId,
    base_node: NodeId,
    adj_node: NodeId,
    distance: f64,
    flags: EdgeFlags,
    name: String,
    geometry: PointList,
    unfavored: bool,
    unfavored_reverse: bool,
    skipped: Option<(EdgeId, EdgeId)>,
    weight: Option<f64>,
    additional_field: i32,
}

impl DetachedEdge {
    /// Creates a plain (non-shortcut) edge with empty geometry and cleared
    /// unfavored flags.
    pub fn new(
        edge_id: EdgeId,
        base_node: NodeId,
        adj_node: NodeId,
        distance: f64,
        flags: EdgeFlags,
        name: impl Into<String>,
    ) -> Self {
        Self {
            edge_id,
            base_node,
            adj_node,
            distance,
            flags,
            name: name.into(),
            geometry: PointList::empty(),
            unfavored: false,
            unfavored_reverse: false,
            skipped: None,
            weight: None,
            additional_field: 0,
        }
    }

    /// Builder-style geometry assignment used when the edge is first loaded.
    pub fn with_geometry(mut self, geometry: PointList) -> Self {
        self.geometry = geometry;
        self
    }

    /// Key of this edge traversed from `base_node` to `adj_node`.
    pub fn traversal_key(&self) -> TraversalKey {
        TraversalKey::new(self.base_node, self.adj_node, self.edge_id, false)
    }

    /// Same semantics as the virtual edge preference; stored edges may be
    /// unfavored too when a query starts on one of their end nodes.
    pub fn set_unfavored(&mut self, unfavored: bool, reverse: bool) {
        if reverse {
            self.unfavored_reverse = unfavored;
        } else {
            self.unfavored = unfavored;
        }
    }
}

impl EdgeState for DetachedEdge {
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

    fn set_way_geometry(&mut self, points: PointList) -> Result<()> {
        self.geometry = points;
        Ok(())
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

    fn detach(&self, reverse: bool) -> Result<Self> {
        let mut view = self.clone();
        if reverse {
            std::mem::swap(&mut view.base_node, &mut view.adj_node);
            std::mem::swap(&mut view.unfavored, &mut view.unfavored_reverse);
            view.geometry = self.geometry.reversed();
        }
        Ok(view)
    }

    fn copy_properties_to(&self, target: &mut Self) -> Result<()> {
        target.distance = self.distance;
        target.flags = self.flags;
        target.name.clone_from(&self.name);
        target.geometry = self.geometry.clone();
        Ok(())
    }
}

impl ShortcutEdgeState for DetachedEdge {
    fn is_shortcut(&self) -> bool {
        self.skipped.is_some()
    }

    fn skipped_edge1(&self) -> Result<EdgeId> {
        self.skipped
            .map(|(first, _)| first)
            .ok_or_else(|| not_a_shortcut(self.edge_id))
    }

    fn skipped_edge2(&self) -> Result<EdgeId> {
        self.skipped
            .map(|(_, second)| second)
            .ok_or_else(|| not_a_shortcut(self.edge_id))
    }

    fn set_skipped_edges(&mut self, edge1: EdgeId, edge2: EdgeId) -> Result<()> {
        if edge1 == self.edge_id || edge2 == self.edge_id {
            return Err(OverlayError::InvalidArgument(format!(
                "shortcut {} cannot skip itself",
                self.edge_id
            )));
        }
        self.skipped = Some((edge1, edge2));
        Ok(())
    }

    fn weight(&self) -> Result<f64> {
        Ok(self.weight.unwrap_or(self.distance))
    }

    fn set_weight(&mut self, weight: f64) -> Result<&mut Self> {
        if weight.is_nan() || weight < 0.0 {
            return Err(OverlayError::InvalidArgument(format!(
                "shortcut weight must be non-negative, got {weight}"
            )));
        }
        self.weight = Some(weight);
        Ok(self)
    }

    fn additional_field(&self) -> Result<i32> {
        Ok(self.additional_field)
    }

    fn set_additional_field(&mut self, value: i32) -> Result<&mut Self> {
        self.additional_field = value;
        Ok(self)
    }
}

fn not_a_shortcut(edge: EdgeId) -> OverlayError {
    OverlayError::InvalidArgument(format!("edge {edge} is not a shortcut"))
}

impl fmt::Display for DetachedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.edge_id, self.base_node, self.adj_node)
    }
}
