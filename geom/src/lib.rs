//! Geometry primitives for sketched road networks. Everything here is in WGS84 degrees; nothing
//! is projected into world space.

mod bounds;
mod gps;

pub use crate::bounds::GPSBounds;
pub use crate::gps::LonLat;
