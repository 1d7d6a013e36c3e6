//! Reading and writing the GeoJSON documents that the map UI loads and downloads.

use geojson::{Feature, FeatureCollection, GeoJson, JsonObject, Value};

use geom::LonLat;

use crate::{RoadCollection, Segment, SketchError};

/// Parses a FeatureCollection of two-point LineStrings. Anything else, including a single stray
/// feature of the wrong shape, fails the whole document.
pub fn parse_roads(raw: &str) -> Result<RoadCollection, SketchError> {
    if raw.trim().is_empty() {
        return Err(SketchError::EmptyInput);
    }
    let gj = raw
        .parse::<GeoJson>()
        .map_err(|err| SketchError::Parse(err.to_string()))?;
    let collection = match gj {
        GeoJson::FeatureCollection(collection) => collection,
        _ => return Err(SketchError::NotAFeatureCollection),
    };

    let mut segments = Vec::new();
    for (idx, feature) in collection.features.iter().enumerate() {
        segments.push(parse_segment(idx, feature)?);
    }
    Ok(RoadCollection::from_segments(segments))
}

fn parse_segment(idx: usize, feature: &Feature) -> Result<Segment, SketchError> {
    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| SketchError::invalid_feature(idx, "no geometry"))?;
    let positions = match &geometry.value {
        Value::LineString(positions) => positions,
        other => {
            return Err(SketchError::invalid_feature(
                idx,
                format!("expected a LineString, got a {}", geometry_kind(other)),
            ));
        }
    };
    if positions.len() != 2 {
        return Err(SketchError::invalid_feature(
            idx,
            format!("expected 2 positions, got {}", positions.len()),
        ));
    }

    let mut pts = Vec::new();
    for pos in positions {
        pts.push(LonLat::from_position(pos).ok_or_else(|| {
            SketchError::invalid_feature(idx, format!("{:?} isn't a [lon, lat] pair", pos))
        })?);
    }
    Ok(Segment::new(pts[0], pts[1]))
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// One LineString feature per road, in creation order. The collection's bbox is filled out when
/// there's at least one road.
pub fn roads_to_geojson(roads: &RoadCollection) -> GeoJson {
    let features = roads
        .iter()
        .map(|segment| feature(segment.to_geojson()))
        .collect();
    GeoJson::FeatureCollection(FeatureCollection {
        bbox: roads.get_bounds().to_geojson_bbox(),
        features,
        foreign_members: None,
    })
}

pub fn intersections_to_geojson(intersections: &[LonLat]) -> GeoJson {
    let features = intersections
        .iter()
        .map(|pt| feature(pt.to_geojson()))
        .collect();
    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn feature(geometry: geojson::Geometry) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        // Always write an empty object; some consumers choke on a missing properties member
        properties: Some(JsonObject::new()),
        foreign_members: None,
    }
}
