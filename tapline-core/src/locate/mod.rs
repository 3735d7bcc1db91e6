//! Fault location along the constructed feeder tree

mod fault;
mod to_geojson;

pub use fault::{locate_faults, sweep_faults};
pub use to_geojson::{fault_locations_to_geojson, fault_locations_to_geojson_string};
