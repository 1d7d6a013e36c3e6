use std::io::Read;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use geom::LonLat;
use road_sketch::{ClickOutcome, Session, SketchOptions};

pub fn run(
    clicks_path: String,
    input: Option<String>,
    roads_output: Option<String>,
    intersections_output: Option<String>,
    opts: SketchOptions,
) -> Result<()> {
    let mut session = Session::new(opts);
    debug!("Replaying with {:?}", session.options());
    if let Some(path) = input {
        let raw = sketchutil::slurp_file(&path)?;
        // The session shrugs off a bad document, but here there's no user to try again
        session
            .load_document(&raw)
            .with_context(|| format!("loading roads from {}", path))?;
    }

    let file = fs_err::File::open(&clicks_path)?;
    let clicks = parse_clicks(file).with_context(|| format!("reading clicks {}", clicks_path))?;

    let mut rejected = 0;
    for click in &clicks {
        match click {
            Some(pt) => {
                if session.click(*pt) == ClickOutcome::RejectedZeroLength {
                    rejected += 1;
                }
            }
            None => session.finish_chain(),
        }
    }
    info!(
        "Replayed {} clicks, now there are {} ({} zero-length segments dropped)",
        clicks.iter().filter(|c| c.is_some()).count(),
        crate::describe(session.roads()),
        rejected
    );

    crate::emit(session.export_roads(), roads_output)?;
    match session.export_intersections() {
        Ok(intersections) => crate::emit(intersections, intersections_output)?,
        Err(err) => warn!("Not writing intersections: {}", err),
    }
    Ok(())
}

#[derive(Deserialize)]
struct Record {
    lng: Option<f64>,
    lat: Option<f64>,
}

/// Each entry is a click, or None where a chain ends.
fn parse_clicks<R: Read>(reader: R) -> Result<Vec<Option<LonLat>>> {
    let mut clicks = Vec::new();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    for (idx, rec) in reader.deserialize().enumerate() {
        let rec: Record = rec?;
        match (rec.lng, rec.lat) {
            (Some(lng), Some(lat)) => clicks.push(Some(LonLat::new(lng, lat))),
            (None, None) => clicks.push(None),
            // The header is line 1
            _ => bail!("line {} needs both lng and lat, or neither", idx + 2),
        }
    }
    Ok(clicks)
}

#[cfg(test)]
mod tests {
    use super::*;

    use road_sketch::{parse_roads, Continuation, Segment};

    struct Scratch {
        dir: std::path::PathBuf,
    }

    impl Scratch {
        fn new(name: &str) -> Scratch {
            let dir =
                std::env::temp_dir().join(format!("sketch_replay_{}_{}", name, std::process::id()));
            fs_err::create_dir_all(&dir).unwrap();
            Scratch { dir }
        }

        fn path(&self, file: &str) -> String {
            self.dir.join(file).display().to_string()
        }

        fn write(&self, file: &str, contents: &str) -> String {
            let path = self.path(file);
            fs_err::write(&path, contents).unwrap();
            path
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = fs_err::remove_dir_all(&self.dir);
        }
    }

    #[test]
    fn replay_writes_both_documents() {
        let scratch = Scratch::new("both");
        let clicks = scratch.write(
            "clicks.csv",
            "lng,lat\n0.0,0.0\n1.0,1.0\n,\n1.0004,0.9996\n2.0,2.0\n",
        );
        let roads_path = scratch.path("out/roads.geojson");
        let intersections_path = scratch.path("out/intersections.geojson");
        run(
            clicks,
            None,
            Some(roads_path.clone()),
            Some(intersections_path.clone()),
            SketchOptions::default(),
        )
        .unwrap();

        let roads = parse_roads(&fs_err::read_to_string(&roads_path).unwrap()).unwrap();
        assert_eq!(
            roads.segments(),
            &[
                Segment::new(LonLat::new(0.0, 0.0), LonLat::new(1.0, 1.0)),
                Segment::new(LonLat::new(1.0, 1.0), LonLat::new(2.0, 2.0)),
            ]
        );
        let intersections = fs_err::read_to_string(&intersections_path).unwrap();
        assert_eq!(intersections.matches("\"Point\"").count(), 3);
    }

    #[test]
    fn replay_continues_from_input_roads() {
        let scratch = Scratch::new("input");
        let input = scratch.write(
            "input.geojson",
            r#"{"type": "FeatureCollection", "features": [{"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[5.0, 5.0], [6.0, 6.0]]}, "properties": {}}]}"#,
        );
        let clicks = scratch.write("clicks.csv", "lng,lat\n6.0005,6.0005\n7.0,7.0\n");
        let roads_path = scratch.path("roads.geojson");
        let opts = SketchOptions {
            continuation: Continuation::SnappedEnd,
            ..Default::default()
        };
        run(
            clicks,
            Some(input),
            Some(roads_path.clone()),
            Some(scratch.path("intersections.geojson")),
            opts,
        )
        .unwrap();

        let roads = parse_roads(&fs_err::read_to_string(&roads_path).unwrap()).unwrap();
        assert_eq!(roads.len(), 2);
        assert_eq!(roads.segments()[1].start(), LonLat::new(6.0, 6.0));
    }

    #[test]
    fn replay_without_roads_skips_intersections() {
        let scratch = Scratch::new("empty");
        // A single click never makes a segment
        let clicks = scratch.write("clicks.csv", "lng,lat\n0.0,0.0\n");
        let roads_path = scratch.path("roads.geojson");
        let intersections_path = scratch.path("intersections.geojson");
        run(
            clicks,
            None,
            Some(roads_path.clone()),
            Some(intersections_path.clone()),
            SketchOptions::default(),
        )
        .unwrap();

        assert!(parse_roads(&fs_err::read_to_string(&roads_path).unwrap())
            .unwrap()
            .is_empty());
        assert!(!std::path::Path::new(&intersections_path).exists());
    }

    #[test]
    fn replay_refuses_a_bad_input_document() {
        let scratch = Scratch::new("bad_input");
        let input = scratch.write("input.geojson", "not json");
        let clicks = scratch.write("clicks.csv", "lng,lat\n0.0,0.0\n");
        let err = run(clicks, Some(input.clone()), None, None, SketchOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains(&input));
    }

    #[test]
    fn chains_separated_by_empty_rows() {
        let raw = "lng,lat\n0.0,0.0\n1.0, 1.0\n,\n-80.375,25.756\n";
        assert_eq!(
            parse_clicks(raw.as_bytes()).unwrap(),
            vec![
                Some(LonLat::new(0.0, 0.0)),
                Some(LonLat::new(1.0, 1.0)),
                None,
                Some(LonLat::new(-80.375, 25.756)),
            ]
        );
    }

    #[test]
    fn half_a_click() {
        let err = parse_clicks("lng,lat\n0.0,0.0\n1.0,\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 3 needs both lng and lat, or neither");

        assert!(parse_clicks("lng,lat\nabc,1.0\n".as_bytes()).is_err());
    }
}
