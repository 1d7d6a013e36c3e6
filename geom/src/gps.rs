use std::fmt;

use serde::{Deserialize, Serialize};

/// longitude is x, latitude is y
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LonLat {
    longitude: f64,
    latitude: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> LonLat {
        LonLat {
            longitude: lon,
            latitude: lat,
        }
    }

    pub fn x(&self) -> f64 {
        self.longitude
    }

    pub fn y(&self) -> f64 {
        self.latitude
    }

    /// True if both axes are strictly within `epsilon` of `other`. The axes are checked
    /// independently, so this describes a square around the point, not a circle.
    pub fn within_per_axis(&self, other: LonLat, epsilon: f64) -> bool {
        (self.longitude - other.longitude).abs() < epsilon
            && (self.latitude - other.latitude).abs() < epsilon
    }

    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }

    /// A GeoJSON position: `[longitude, latitude]`
    pub fn to_position(&self) -> Vec<f64> {
        vec![self.longitude, self.latitude]
    }

    /// Only accepts exactly two finite numbers. Altitude isn't supported.
    pub fn from_position(pos: &[f64]) -> Option<LonLat> {
        if pos.len() != 2 {
            return None;
        }
        let pt = LonLat::new(pos[0], pos[1]);
        if pt.is_finite() {
            Some(pt)
        } else {
            None
        }
    }

    pub fn to_geojson(&self) -> geojson::Geometry {
        geojson::Geometry::new(geojson::Value::Point(self.to_position()))
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LonLat({0}, {1})", self.longitude, self.latitude)
    }
}
