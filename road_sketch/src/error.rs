use std::{error, fmt};

/// Everything that can go wrong while editing a sketch. None of these are fatal; the caller
/// reports them and carries on with the previous state.
#[derive(Clone, Debug, PartialEq)]
pub enum SketchError {
    /// The document to load was empty or only whitespace
    EmptyInput,
    /// The document isn't valid JSON or GeoJSON
    Parse(String),
    /// Valid GeoJSON, but the top level isn't a FeatureCollection
    NotAFeatureCollection,
    /// One feature isn't a two-point LineString
    InvalidFeature { index: usize, reason: String },
    /// There are no roads yet
    EmptyGeometry,
}

impl SketchError {
    pub(crate) fn invalid_feature<S: Into<String>>(index: usize, reason: S) -> SketchError {
        SketchError::InvalidFeature {
            index,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SketchError::EmptyInput => write!(f, "no input"),
            SketchError::Parse(msg) => write!(f, "couldn't parse GeoJSON: {}", msg),
            SketchError::NotAFeatureCollection => write!(f, "input isn't a FeatureCollection"),
            SketchError::InvalidFeature { index, reason } => {
                write!(f, "feature {} isn't a road: {}", index, reason)
            }
            SketchError::EmptyGeometry => write!(f, "no geometry to extract intersections from"),
        }
    }
}

impl error::Error for SketchError {}
