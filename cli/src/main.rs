//! Tools for sketching road networks without a map in front of you: replay a recording of clicks,
//! pull the intersections out of an existing document, or check where a point would snap.

#[macro_use]
extern crate log;

mod replay;

use anyhow::{bail, Context, Result};
use structopt::StructOpt;

use geom::LonLat;
use road_sketch::{
    extract_intersections, find_snap_target, intersections_to_geojson, parse_roads,
    RoadCollection, SketchOptions,
};

#[derive(StructOpt)]
#[structopt(name = "sketch", about = "Sketch road networks as GeoJSON")]
enum Command {
    /// Feeds a CSV of clicks through an editing session, then writes the roads and intersections
    /// as GeoJSON.
    Replay {
        /// A CSV file with `lng,lat` columns. A row with both columns empty finishes the current
        /// chain of roads, so the next click starts a new one.
        #[structopt(long)]
        clicks: String,
        /// Start from the roads in this GeoJSON file, instead of an empty map
        #[structopt(long)]
        input: Option<String>,
        /// Where to write the roads. Printed to STDOUT if omitted.
        #[structopt(long)]
        roads_output: Option<String>,
        /// Where to write the intersections. Printed to STDOUT if omitted.
        #[structopt(long)]
        intersections_output: Option<String>,
        #[structopt(flatten)]
        opts: OptionsArgs,
    },
    /// Reads a GeoJSON file of roads and writes every distinct endpoint as a Point feature.
    Intersections {
        /// The path to a GeoJSON file of roads
        #[structopt()]
        input: String,
        /// Where to write the intersections. Printed to STDOUT if omitted.
        #[structopt(long)]
        output: Option<String>,
    },
    /// Reports which existing vertex, if any, a click at this point would snap onto.
    Snap {
        /// The path to a GeoJSON file of roads
        #[structopt()]
        input: String,
        #[structopt(long, allow_hyphen_values = true)]
        lng: f64,
        #[structopt(long, allow_hyphen_values = true)]
        lat: f64,
        #[structopt(flatten)]
        opts: OptionsArgs,
    },
}

#[derive(StructOpt)]
struct OptionsArgs {
    /// Read all sketching options from this JSON file, ignoring the flags below
    #[structopt(long)]
    options: Option<String>,
    #[structopt(flatten)]
    flags: SketchOptions,
}

impl OptionsArgs {
    fn resolve(self) -> Result<SketchOptions> {
        let opts = match self.options {
            Some(path) => sketchutil::read_json::<SketchOptions>(&path)?,
            None => self.flags,
        };
        if !opts.snap_epsilon.is_finite() || opts.snap_epsilon <= 0.0 {
            bail!("snap_epsilon must be positive, not {}", opts.snap_epsilon);
        }
        Ok(opts)
    }
}

fn main() -> Result<()> {
    sketchutil::logger::setup();

    match Command::from_args() {
        Command::Replay {
            clicks,
            input,
            roads_output,
            intersections_output,
            opts,
        } => replay::run(
            clicks,
            input,
            roads_output,
            intersections_output,
            opts.resolve()?,
        )?,
        Command::Intersections { input, output } => intersections(input, output)?,
        Command::Snap {
            input,
            lng,
            lat,
            opts,
        } => snap(input, LonLat::new(lng, lat), opts.resolve()?)?,
    }
    Ok(())
}

fn load_roads(path: &str) -> Result<RoadCollection> {
    let raw = sketchutil::slurp_file(path)?;
    let roads = parse_roads(&raw).with_context(|| format!("loading roads from {}", path))?;
    info!("Read {} roads from {}", roads.len(), path);
    Ok(roads)
}

fn describe(roads: &RoadCollection) -> String {
    format!(
        "{} roads, {:.3}km in total",
        roads.len(),
        roads.total_length_meters() / 1000.0
    )
}

/// Writes to a file if there's a path, otherwise STDOUT.
fn emit(contents: String, path: Option<String>) -> Result<()> {
    match path {
        Some(path) => sketchutil::write_file(&path, &contents),
        None => {
            println!("{}", contents);
            Ok(())
        }
    }
}

fn intersections(input: String, output: Option<String>) -> Result<()> {
    let roads = load_roads(&input)?;
    let intersections = extract_intersections(&roads)?;
    info!(
        "{} have {} distinct endpoints",
        describe(&roads),
        intersections.len()
    );
    emit(intersections_to_geojson(&intersections).to_string(), output)
}

fn snap(input: String, pt: LonLat, opts: SketchOptions) -> Result<()> {
    if !pt.is_finite() {
        bail!("{} isn't a real point", pt);
    }
    let roads = load_roads(&input)?;
    match find_snap_target(pt, &roads, opts.snap_epsilon) {
        Some(target) => println!(
            "{} snaps to {}, the {:?} of road {}",
            pt, target.pt, target.endpoint, target.segment
        ),
        None => println!(
            "{} isn't within {} of any vertex; it stays where it is",
            pt, opts.snap_epsilon
        ),
    }
    Ok(())
}
