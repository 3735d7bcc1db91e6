// Re-export key components
pub use crate::building::{build_edge_tree, create_tap_network};
pub use crate::locate::{
    fault_locations_to_geojson, fault_locations_to_geojson_string, locate_faults, sweep_faults,
};
pub use crate::model::{Edge, EdgeNode};
pub use crate::validation::{TopologyViolation, validate_network};

// Core types
pub use crate::Error;
pub use crate::Meters; // geodesic meters over WGS84
