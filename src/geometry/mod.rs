//! Edge geometry: coordinates, owned point sequences and extraction modes.
//!
//! Every geometry handed out by an edge state is a fresh [`PointList`]; no
//! caller ever holds a mutable view of another edge's stored points.

mod list;
mod mode;
mod point;

pub use list::PointList;
pub use mode::FetchMode;
pub use point::GeoPoint;
