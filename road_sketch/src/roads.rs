use geo::HaversineDistance;
use serde::{Deserialize, Serialize};

use geom::{GPSBounds, LonLat};

/// One clicked-to-clicked piece of road. Never modified after it's created.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    start: LonLat,
    end: LonLat,
}

impl Segment {
    pub fn new(start: LonLat, end: LonLat) -> Segment {
        Segment { start, end }
    }

    pub fn start(&self) -> LonLat {
        self.start
    }

    pub fn end(&self) -> LonLat {
        self.end
    }

    /// Start, then end. This is the order snapping scans in.
    pub fn endpoints(&self) -> [LonLat; 2] {
        [self.start, self.end]
    }

    /// Both clicks landed on the same stored vertex.
    pub fn is_zero_length(&self) -> bool {
        self.start == self.end
    }

    pub fn length_meters(&self) -> f64 {
        let start = geo::Point::new(self.start.x(), self.start.y());
        let end = geo::Point::new(self.end.x(), self.end.y());
        start.haversine_distance(&end)
    }

    pub fn to_geojson(&self) -> geojson::Geometry {
        geojson::Geometry::new(geojson::Value::LineString(vec![
            self.start.to_position(),
            self.end.to_position(),
        ]))
    }
}

/// All of the roads sketched so far, in the order they were created.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadCollection {
    segments: Vec<Segment>,
}

impl RoadCollection {
    pub fn new() -> RoadCollection {
        RoadCollection {
            segments: Vec::new(),
        }
    }

    pub fn from_segments(segments: Vec<Segment>) -> RoadCollection {
        RoadCollection { segments }
    }

    /// Returns the index of the new segment.
    pub fn push(&mut self, segment: Segment) -> usize {
        self.segments.push(segment);
        self.segments.len() - 1
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Every endpoint of every segment, duplicates included, in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = LonLat> + '_ {
        self.segments.iter().flat_map(|seg| seg.endpoints())
    }

    pub fn get_bounds(&self) -> GPSBounds {
        GPSBounds::from(self.vertices())
    }

    /// Indices of segments with an endpoint exactly at `pt`. A zero-length segment is listed
    /// once.
    pub fn segments_touching(&self, pt: LonLat) -> Vec<usize> {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, seg)| seg.start == pt || seg.end == pt)
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn total_length_meters(&self) -> f64 {
        self.segments.iter().map(|seg| seg.length_meters()).sum()
    }
}

impl<'a> IntoIterator for &'a RoadCollection {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
