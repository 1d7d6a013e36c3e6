use serde::{Deserialize, Serialize};

use crate::LonLat;

/// The axis-aligned box covering some set of GPS points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GPSBounds {
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
}

impl GPSBounds {
    pub fn new() -> GPSBounds {
        GPSBounds {
            min_lon: f64::MAX,
            min_lat: f64::MAX,
            max_lon: f64::MIN,
            max_lat: f64::MIN,
        }
    }

    pub fn from<I: IntoIterator<Item = LonLat>>(pts: I) -> GPSBounds {
        let mut b = GPSBounds::new();
        for pt in pts {
            b.update(pt);
        }
        b
    }

    pub fn update(&mut self, pt: LonLat) {
        self.min_lon = self.min_lon.min(pt.x());
        self.max_lon = self.max_lon.max(pt.x());
        self.min_lat = self.min_lat.min(pt.y());
        self.max_lat = self.max_lat.max(pt.y());
    }

    /// True until the first point is added.
    pub fn is_empty(&self) -> bool {
        self.min_lon > self.max_lon
    }

    /// In the `[west, south, east, north]` order GeoJSON expects. None if nothing was added.
    pub fn to_geojson_bbox(&self) -> Option<geojson::Bbox> {
        if self.is_empty() {
            return None;
        }
        Some(vec![self.min_lon, self.min_lat, self.max_lon, self.max_lat])
    }
}

impl Default for GPSBounds {
    fn default() -> GPSBounds {
        GPSBounds::new()
    }
}
