use std::fmt;

use crate::error::Result;
use crate::geometry::{FetchMode, PointList};
use crate::types::{EdgeFlags, EdgeId, NodeId};

use super::PropertyKey;

/// The traversal view of one directed edge, real or virtual.
///
/// Read accessors are object safe, so a search can hold `&dyn EdgeState` for a
/// mix of stored and query-time edges. Setters and the `Self`-returning
/// operations are only available on concrete types.
pub trait EdgeState: fmt::Debug {
    /// Edge identifier.
    fn edge(&self) -> EdgeId;

    /// Node this view is traversed from.
    fn base_node(&self) -> NodeId;

    /// Node this view leads to.
    fn adj_node(&self) -> NodeId;

    /// Length in meters.
    fn distance(&self) -> f64;

    /// Opaque encoded properties.
    fn flags(&self) -> EdgeFlags;

    /// Display name, possibly empty.
    fn name(&self) -> &str;

    /// Returns a freshly owned copy of the way geometry sliced by `mode`.
    fn fetch_way_geometry(&self, mode: FetchMode) -> PointList;

    /// Like [`EdgeState::fetch_way_geometry`] but takes the raw integer mode.
    fn way_geometry(&self, mode: i32) -> Result<PointList> {
        Ok(self.fetch_way_geometry(FetchMode::try_from(mode)?))
    }

    /// Generic boolean lookup. Keys the implementation does not know return
    /// `default`.
    fn get_bool(&self, key: PropertyKey, reverse: bool, default: bool) -> bool;

    /// Replaces the stored way geometry.
    fn set_way_geometry(&mut self, points: PointList) -> Result<()>;

    /// Sets the length in meters. No sign validation; callers own that.
    fn set_distance(&mut self, distance: f64) -> &mut Self
    where
        Self: Sized;

    /// Replaces the encoded properties.
    fn set_flags(&mut self, flags: EdgeFlags) -> &mut Self
    where
        Self: Sized;

    /// Replaces the display name.
    fn set_name(&mut self, name: impl Into<String>) -> &mut Self
    where
        Self: Sized;

    /// Returns an owned view of this edge. With `reverse` the view is
    /// traversed from the adjacent node back to the base node.
    fn detach(&self, reverse: bool) -> Result<Self>
    where
        Self: Sized;

    /// Copies the mutable properties (distance, flags, name, geometry) onto
    /// `target`, leaving its topology untouched.
    fn copy_properties_to(&self, target: &mut Self) -> Result<()>
    where
        Self: Sized;
}
