use geom::LonLat;

use crate::RoadCollection;

/// In degrees, applied to longitude and latitude independently. Smaller requires more accurate
/// clicking.
pub const SNAP_EPSILON: f64 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

/// The existing vertex that a candidate point collapses onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapTarget {
    pub segment: usize,
    pub endpoint: Endpoint,
    pub pt: LonLat,
}

/// Scans every segment in creation order, start before end, and returns the first vertex within
/// `epsilon` of `candidate` on both axes.
///
/// This is deliberately the first match, not the nearest one. If a click is close to two vertices
/// that aren't close to each other, the older one wins, no matter which is really closer.
pub fn find_snap_target(
    candidate: LonLat,
    roads: &RoadCollection,
    epsilon: f64,
) -> Option<SnapTarget> {
    for (idx, segment) in roads.iter().enumerate() {
        for (endpoint, pt) in [
            (Endpoint::Start, segment.start()),
            (Endpoint::End, segment.end()),
        ] {
            if candidate.within_per_axis(pt, epsilon) {
                return Some(SnapTarget {
                    segment: idx,
                    endpoint,
                    pt,
                });
            }
        }
    }
    None
}

/// If `candidate` is "near" an existing vertex, return an exact copy of that vertex instead.
/// Otherwise the candidate comes back unchanged. Never fails.
pub fn snap_vertex(candidate: LonLat, roads: &RoadCollection, epsilon: f64) -> LonLat {
    match find_snap_target(candidate, roads, epsilon) {
        Some(target) => {
            debug!(
                "Snapped {} to {:?} of segment {} at {}",
                candidate, target.endpoint, target.segment, target.pt
            );
            target.pt
        }
        None => candidate,
    }
}
