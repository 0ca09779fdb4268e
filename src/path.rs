use tracing::debug;

use crate::edge::EdgeState;
use crate::geometry::{FetchMode, PointList};

/// Concatenates the geometry of consecutive path edges.
///
/// The first edge contributes its full geometry and every following edge
/// drops its base point, so a node shared by two edges appears once.
pub fn assemble_geometry<'a, I>(edges: I) -> PointList
where
    I: IntoIterator<Item = &'a dyn EdgeState>,
{
    let mut points = PointList::empty();
    let mut edge_count = 0usize;
    for edge in edges {
        let mode = if edge_count == 0 {
            FetchMode::All
        } else {
            FetchMode::PillarsAndAdj
        };
        points.extend_from(&edge.fetch_way_geometry(mode));
        edge_count += 1;
    }
    debug!(edges = edge_count, points = points.len(), "path geometry assembled");
    points
}

/// Sum of edge distances along a path.
pub fn total_distance<'a, I>(edges: I) -> f64
where
    I: IntoIterator<Item = &'a dyn EdgeState>,
{
    edges.into_iter().map(|edge| edge.distance()).sum()
}
