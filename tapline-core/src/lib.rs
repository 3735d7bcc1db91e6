//! Core library for locating faults on tapped (branching) feeder lines.
//!
//! A tapped feeder is a tree-shaped physical network: one source, branches
//! ("taps") splitting off downstream, no loops. Given the unordered line
//! segments of such a network and a reference point for the source, this
//! crate builds a rooted edge tree, checks that the input really has tree
//! topology, and answers "where on the network is a point `d` meters from
//! the source?" across every branch.
//!
//! Junction detection relies on exact coordinate equality: segments that
//! meet must share bit-identical endpoint coordinates. Inputs that do not
//! satisfy this precondition are rejected, never fuzzily joined.
//!
//! The tree is immutable once built and may be shared across threads for
//! concurrent fault-location queries.

pub mod building;
pub mod error;
pub mod geodesy;
pub mod locate;
pub mod model;
pub mod prelude;
pub mod validation;

pub use error::Error;

/// Distances are geodesic meters over WGS84.
pub type Meters = f64;
