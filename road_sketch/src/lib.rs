//! Sketch a road network by clicking points on a map. Each click after the first in a chain adds
//! a two-point road segment. New points snap onto vertices that already exist, so roads meeting at
//! an intersection share exactly the same coordinate, and the intersections can later be found by
//! plain equality.
//!
//! The map UI is someone else's problem; it feeds clicks into a [`Session`] and renders or exports
//! the GeoJSON that comes back.

#[macro_use]
extern crate log;

mod assembler;
mod document;
mod error;
mod intersections;
mod options;
mod roads;
mod session;
mod snap;

pub use crate::assembler::{Assembler, ClickOutcome, ClickState};
pub use crate::document::{intersections_to_geojson, parse_roads, roads_to_geojson};
pub use crate::error::SketchError;
pub use crate::intersections::extract_intersections;
pub use crate::options::{Continuation, SketchOptions};
pub use crate::roads::{RoadCollection, Segment};
pub use crate::session::Session;
pub use crate::snap::{find_snap_target, snap_vertex, Endpoint, SnapTarget, SNAP_EPSILON};
