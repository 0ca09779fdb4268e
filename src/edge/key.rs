use std::fmt;

use crate::types::{EdgeId, NodeId};

/// Edge id plus traversal direction packed into one integer.
///
/// The low bit records the direction relative to node ordering, so the same
/// physical edge yields two distinct keys, one per direction. The key is one
/// bit wider than [`EdgeId`], so every edge id maps back to itself.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct TraversalKey(pub u64);

impl TraversalKey {
    /// Builds the key for traversing `edge` from `base` to `adj`.
    ///
    /// `reverse` selects the opposite traversal of the same orientation, which
    /// flips the direction bit.
    pub fn new(base: NodeId, adj: NodeId, edge: EdgeId, reverse: bool) -> Self {
        let key = u64::from(edge.0) << 1;
        let descending = base > adj;
        if descending != reverse {
            TraversalKey(key + 1)
        } else {
            TraversalKey(key)
        }
    }

    /// The real edge this key refers to.
    ///
    /// Keys built with [`TraversalKey::new`] always round-trip; a hand-built
    /// raw value above `u32::MAX << 1 | 1` keeps only the low 32 id bits.
    pub const fn edge(self) -> EdgeId {
        EdgeId((self.0 >> 1) as u32)
    }

    /// Direction bit; set when the traversal runs against node-id order.
    pub const fn direction_bit(self) -> bool {
        self.0 & 1 == 1
    }

    /// Key of the same edge traversed the other way.
    pub const fn reversed(self) -> Self {
        TraversalKey(self.0 ^ 1)
    }

    /// The packed integer.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TraversalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key for [`super::EdgeState::get_bool`] lookups.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct PropertyKey(pub i32);

impl PropertyKey {
    /// Reserved key for the per-direction "unfavored as start/stop edge" flag.
    pub const UNFAVORED_EDGE: PropertyKey = PropertyKey(-1);
}
