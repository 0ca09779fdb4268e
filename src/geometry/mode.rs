use crate::error::{OverlayError, Result};

use super::PointList;

/// Which endpoints to include when extracting an edge's way geometry.
///
/// Bit 0 of the raw value selects the base node, bit 1 the adjacent node.
/// Pillar (interior) points are always included.
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FetchMode {
    /// Interior points only.
    Pillars = 0,
    /// Base node and interior points; adjacent node excluded.
    BaseAndPillars = 1,
    /// Interior points and adjacent node; base node excluded.
    PillarsAndAdj = 2,
    /// Full geometry including both endpoints.
    All = 3,
}

impl FetchMode {
    /// Raw integer form of this mode.
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Whether the base node's point is part of the result.
    pub const fn includes_base(self) -> bool {
        (self as i32) & 0b01 != 0
    }

    /// Whether the adjacent node's point is part of the result.
    pub const fn includes_adj(self) -> bool {
        (self as i32) & 0b10 != 0
    }

    /// Slices `points` according to this mode into a freshly owned list.
    pub fn extract(self, points: &PointList) -> PointList {
        let len = points.len();
        if len == 0 {
            return PointList::empty();
        }
        match self {
            FetchMode::All => points.clone(),
            FetchMode::BaseAndPillars => points.copy_range(0, len - 1),
            FetchMode::PillarsAndAdj => points.copy_range(1, len),
            FetchMode::Pillars => {
                if len == 1 {
                    return PointList::empty();
                }
                points.copy_range(1, len - 1)
            }
        }
    }
}

impl TryFrom<i32> for FetchMode {
    type Error = OverlayError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(FetchMode::Pillars),
            1 => Ok(FetchMode::BaseAndPillars),
            2 => Ok(FetchMode::PillarsAndAdj),
            3 => Ok(FetchMode::All),
            other => Err(OverlayError::InvalidArgument(format!(
                "illegal geometry fetch mode: {other}"
            ))),
        }
    }
}

impl From<FetchMode> for i32 {
    fn from(mode: FetchMode) -> Self {
        mode.as_i32()
    }
}
