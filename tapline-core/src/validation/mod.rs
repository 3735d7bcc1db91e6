//! Topology rules for tapped line networks

mod rules;

pub use rules::{TopologyViolation, validate_network};
