use crate::edge::{EdgeState, PropertyKey};
use crate::error::Result;
use crate::options::OverlayOptions;

/// Turns an edge traversal into a search cost.
pub trait Weighting: Send + Sync {
    /// Cost of traversing `edge`; `reverse` selects the direction flag that
    /// applies (backward search frontiers pass `true`).
    fn calc_weight(&self, edge: &dyn EdgeState, reverse: bool) -> f64;
}

/// Weight equals distance, plus the heading penalty on unfavored directions.
#[derive(Clone, Debug)]
pub struct ShortestWeighting {
    heading_penalty: f64,
}

impl ShortestWeighting {
    /// Creates the weighting from validated options.
    ///
    /// A negative or non-finite heading penalty is rejected, since it would
    /// make unfavored directions cheaper than favored ones.
    pub fn new(options: &OverlayOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            heading_penalty: options.heading_penalty,
        })
    }
}

impl Weighting for ShortestWeighting {
    fn calc_weight(&self, edge: &dyn EdgeState, reverse: bool) -> f64 {
        let mut weight = edge.distance();
        if edge.get_bool(PropertyKey::UNFAVORED_EDGE, reverse, false) {
            weight += self.heading_penalty;
        }
        weight
    }
}
