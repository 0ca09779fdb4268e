use std::fmt;

/// A WGS84 coordinate with optional elevation in meters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Elevation, present only for 3D geometries.
    pub ele: Option<f64>,
}

impl GeoPoint {
    /// Creates a 2D point.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ele: None,
        }
    }

    /// Creates a 3D point.
    pub const fn with_ele(lat: f64, lon: f64, ele: f64) -> Self {
        Self {
            lat,
            lon,
            ele: Some(ele),
        }
    }

    /// Whether the point carries an elevation.
    pub fn is_3d(&self) -> bool {
        self.ele.is_some()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        GeoPoint::new(lat, lon)
    }
}

impl From<(f64, f64, f64)> for GeoPoint {
    fn from((lat, lon, ele): (f64, f64, f64)) -> Self {
        GeoPoint::with_ele(lat, lon, ele)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ele {
            Some(ele) => write!(f, "({},{},{})", self.lat, self.lon, ele),
            None => write!(f, "({},{})", self.lat, self.lon),
        }
    }
}
