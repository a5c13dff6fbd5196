use serde::{Deserialize, Serialize};

use crate::domain::Bounds;

/// Axis-aligned bounding envelope, corners as `[x, y]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub srs_name: String,
    pub lower_corner: [f64; 2],
    pub upper_corner: [f64; 2],
}

impl Envelope {
    pub fn from_bounds(bounds: &Bounds, srs_name: &str) -> Self {
        Self {
            srs_name: srs_name.to_string(),
            lower_corner: [bounds.min_x, bounds.min_y],
            upper_corner: [bounds.max_x, bounds.max_y],
        }
    }
}

/// A point geometry with its own sub-element identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointProperty {
    pub id: String,
    pub srs_name: String,
    pub pos: [f64; 2],
}

/// A curve geometry as an ordered list of positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveProperty {
    pub id: String,
    pub srs_name: String,
    pub pos_list: Vec<[f64; 2]>,
}

/// A surface geometry as the positions of its exterior ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceProperty {
    pub id: String,
    pub srs_name: String,
    pub exterior: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeometryProperty {
    Point(PointProperty),
    Curve(CurveProperty),
    Surface(SurfaceProperty),
}

