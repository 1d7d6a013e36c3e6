use geom::LonLat;

use crate::{RoadCollection, SketchError};

/// Every distinct segment endpoint, in the order first seen.
///
/// Points are compared exactly, not with the snapping tolerance. This relies on snapping having
/// already collapsed nearby clicks onto the same stored coordinate; two roads that are a hair
/// apart produce two separate intersections here.
pub fn extract_intersections(roads: &RoadCollection) -> Result<Vec<LonLat>, SketchError> {
    let first = roads.segments().first().ok_or(SketchError::EmptyGeometry)?;

    let mut intersections = vec![first.start()];
    for segment in roads {
        for pt in segment.endpoints() {
            if is_new_intersection(&intersections, pt) {
                intersections.push(pt);
            } else {
                trace!("{} already exists, not adding it again", pt);
            }
        }
    }
    Ok(intersections)
}

fn is_new_intersection(intersections: &[LonLat], pt: LonLat) -> bool {
    !intersections.iter().any(|existing| *existing == pt)
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::Segment;

    fn pt(x: f64, y: f64) -> LonLat {
        LonLat::new(x, y)
    }

    #[test]
    fn empty_roads() {
        assert_eq!(
            extract_intersections(&RoadCollection::new()),
            Err(SketchError::EmptyGeometry)
        );
        assert_eq!(
            SketchError::EmptyGeometry.to_string(),
            "no geometry to extract intersections from"
        );
    }

    #[test]
    fn single_segment() {
        let roads = RoadCollection::from_segments(vec![Segment::new(pt(0.0, 0.0), pt(1.0, 1.0))]);
        assert_eq!(
            extract_intersections(&roads).unwrap(),
            vec![pt(0.0, 0.0), pt(1.0, 1.0)]
        );
    }

    #[test]
    fn shared_endpoint_appears_once() {
        let roads = RoadCollection::from_segments(vec![
            Segment::new(pt(0.0, 0.0), pt(1.0, 1.0)),
            Segment::new(pt(1.0, 1.0), pt(2.0, 2.0)),
        ]);
        assert_eq!(
            extract_intersections(&roads).unwrap(),
            vec![pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)]
        );
    }

    #[test]
    fn first_seen_order() {
        let roads = RoadCollection::from_segments(vec![
            Segment::new(pt(3.0, 3.0), pt(1.0, 1.0)),
            Segment::new(pt(2.0, 2.0), pt(3.0, 3.0)),
            Segment::new(pt(1.0, 1.0), pt(2.0, 2.0)),
        ]);
        assert_eq!(
            extract_intersections(&roads).unwrap(),
            vec![pt(3.0, 3.0), pt(1.0, 1.0), pt(2.0, 2.0)]
        );
    }

    #[test]
    fn zero_length_segment() {
        let roads = RoadCollection::from_segments(vec![Segment::new(pt(0.0, 0.0), pt(0.0, 0.0))]);
        assert_eq!(extract_intersections(&roads).unwrap(), vec![pt(0.0, 0.0)]);
    }

    #[test]
    fn near_misses_are_not_merged() {
        let roads = RoadCollection::from_segments(vec![
            Segment::new(pt(0.0, 0.0), pt(1.0, 1.0)),
            Segment::new(pt(1.0000001, 1.0), pt(2.0, 2.0)),
        ]);
        assert_eq!(extract_intersections(&roads).unwrap().len(), 4);
    }

    #[test]
    fn bounded_by_endpoints() {
        let mut rng = XorShiftRng::seed_from_u64(42);
        for _ in 0..50 {
            let num_segments = 1 + rng.gen_range(0..20);
            // A tiny grid, so lots of endpoints repeat
            let mut grid_pt = || pt(rng.gen_range(0..4) as f64, rng.gen_range(0..4) as f64);
            let roads = RoadCollection::from_segments(
                (0..num_segments)
                    .map(|_| Segment::new(grid_pt(), grid_pt()))
                    .collect(),
            );

            let intersections = extract_intersections(&roads).unwrap();
            assert!(intersections.len() <= 2 * roads.len());
            for (idx, i) in intersections.iter().enumerate() {
                assert!(roads.vertices().any(|v| v == *i));
                assert!(!intersections[idx + 1..].contains(i));
            }
            for v in roads.vertices() {
                assert!(intersections.contains(&v));
            }
        }
    }
}
