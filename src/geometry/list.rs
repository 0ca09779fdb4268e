use std::fmt;
use std::ops::Index;

use smallvec::SmallVec;

use super::GeoPoint;

/// Inline capacity; snapped edges rarely carry more pillar points than this.
const INLINE_POINTS: usize = 4;

/// Owned, ordered sequence of coordinates.
///
/// `Clone` is a deep copy. There is deliberately no shared backing buffer:
/// two lists never observe each other's mutations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointList {
    points: SmallVec<[GeoPoint; INLINE_POINTS]>,
}

impl PointList {
    /// Returns the canonical empty list.
    pub fn empty() -> Self {
        Self {
            points: SmallVec::new(),
        }
    }

    /// Creates an empty list with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: SmallVec::with_capacity(capacity),
        }
    }

    /// Appends a point.
    pub fn push(&mut self, point: impl Into<GeoPoint>) {
        self.points.push(point.into());
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the list holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&GeoPoint> {
        self.points.get(index)
    }

    /// First point, i.e. the base node's coordinate for a full geometry.
    pub fn first(&self) -> Option<&GeoPoint> {
        self.points.first()
    }

    /// Last point, i.e. the adjacent node's coordinate for a full geometry.
    pub fn last(&self) -> Option<&GeoPoint> {
        self.points.last()
    }

    /// Iterates the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }

    /// Read-only view of the points.
    pub fn as_slice(&self) -> &[GeoPoint] {
        &self.points
    }

    /// True when the list is non-empty and every point carries elevation.
    pub fn is_3d(&self) -> bool {
        !self.points.is_empty() && self.points.iter().all(GeoPoint::is_3d)
    }

    /// Copies the half-open range `from..to` into a new list.
    ///
    /// Out-of-range bounds are clamped to the list, and an inverted range
    /// yields an empty list.
    pub fn copy_range(&self, from: usize, to: usize) -> PointList {
        let to = to.min(self.points.len());
        if from >= to {
            return PointList::empty();
        }
        self.points[from..to].iter().copied().collect()
    }

    /// Returns a copy with the point order reversed.
    pub fn reversed(&self) -> PointList {
        self.points.iter().rev().copied().collect()
    }

    /// Appends copies of every point in `other`.
    pub fn extend_from(&mut self, other: &PointList) {
        self.points.extend(other.points.iter().copied());
    }
}

impl FromIterator<GeoPoint> for PointList {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointList {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Index<usize> for PointList {
    type Output = GeoPoint;

    fn index(&self, index: usize) -> &GeoPoint {
        &self.points[index]
    }
}

impl fmt::Display for PointList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{point}")?;
        }
        Ok(())
    }
}
