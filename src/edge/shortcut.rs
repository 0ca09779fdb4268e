use crate::error::Result;
use crate::types::EdgeId;

use super::EdgeState;

/// Edge view with the metadata a contraction-hierarchy search needs.
pub trait ShortcutEdgeState: EdgeState {
    /// Whether this edge bypasses a contracted sub-path.
    fn is_shortcut(&self) -> bool;

    /// First bypassed edge of a shortcut.
    fn skipped_edge1(&self) -> Result<EdgeId>;

    /// Second bypassed edge of a shortcut.
    fn skipped_edge2(&self) -> Result<EdgeId>;

    /// Records the two edges this shortcut bypasses.
    fn set_skipped_edges(&mut self, edge1: EdgeId, edge2: EdgeId) -> Result<()>;

    /// Precomputed weight used by the hierarchical search.
    fn weight(&self) -> Result<f64>;

    /// Stores the precomputed weight.
    fn set_weight(&mut self, weight: f64) -> Result<&mut Self>
    where
        Self: Sized;

    /// General purpose integer slot owned by the hierarchy preparation.
    fn additional_field(&self) -> Result<i32>;

    /// Stores the general purpose integer slot.
    fn set_additional_field(&mut self, value: i32) -> Result<&mut Self>
    where
        Self: Sized;
}

/// Returns the two bypassed edges when `edge` is a shortcut, `None` otherwise.
///
/// Edges that do not support hierarchy metadata at all answer `None` as well;
/// any other error is propagated.
pub fn shortcut_children(edge: &dyn ShortcutEdgeState) -> Result<Option<(EdgeId, EdgeId)>> {
    if !edge.is_shortcut() {
        return Ok(None);
    }
    let first = match edge.skipped_edge1() {
        Ok(id) => id,
        Err(err) if err.is_capability_not_supported() => return Ok(None),
        Err(err) => return Err(err),
    };
    let second = match edge.skipped_edge2() {
        Ok(id) => id,
        Err(err) if err.is_capability_not_supported() => return Ok(None),
        Err(err) => return Err(err),
    };
    Ok(Some((first, second)))
}
