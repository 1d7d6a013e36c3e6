use serde::{Deserialize, Serialize};
use structopt::StructOpt;

use crate::SNAP_EPSILON;

/// Options controlling how clicks turn into roads. The defaults snap the raw continuation click
/// again and allow zero-length segments.
#[derive(Clone, Debug, PartialEq, StructOpt, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchOptions {
    /// A click within this many degrees of an existing vertex, on both the longitude and latitude
    /// axis, reuses that vertex.
    #[structopt(long, default_value = "0.001")]
    pub snap_epsilon: f64,
    /// Where the next segment of a chain starts: `resnap`, `raw` or `snapped-end`.
    #[structopt(long, default_value = "resnap")]
    pub continuation: Continuation,
    /// Drop segments whose start and end snap onto the same vertex, instead of keeping them.
    #[structopt(long)]
    pub reject_zero_length: bool,
}

impl Default for SketchOptions {
    fn default() -> SketchOptions {
        SketchOptions {
            snap_epsilon: SNAP_EPSILON,
            continuation: Continuation::Resnap,
            reject_zero_length: false,
        }
    }
}

/// After a segment is added, the point the next segment in the chain starts from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Continuation {
    /// The raw click, snapped again against the roads when the next segment is made.
    Resnap,
    /// The raw click exactly as it was, never snapped.
    Raw,
    /// The snapped end of the previous segment, so the chain is always connected.
    SnappedEnd,
}

impl std::str::FromStr for Continuation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resnap" => Ok(Continuation::Resnap),
            "raw" => Ok(Continuation::Raw),
            "snapped-end" => Ok(Continuation::SnappedEnd),
            _ => Err(format!(
                "{} isn't a valid continuation; try resnap, raw or snapped-end",
                s
            )),
        }
    }
}
