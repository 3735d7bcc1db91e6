use thiserror::Error;

use crate::validation::TopologyViolation;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No segment endpoint found near the reference point")]
    NoAnchorPoint,
    #[error("No segment contains the anchor point")]
    NoAnchorSegment,
    #[error("A segment touches the current junction with both endpoints, placement is ambiguous")]
    AmbiguousPlacement,
    #[error("{count} segment(s) could not be placed into the tree")]
    UnplacedSegments { count: usize },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Topology violation: {0}")]
    Topology(#[from] TopologyViolation),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
