//! Construction of the rooted edge tree from unordered feeder geometry

mod builder;

pub use builder::{build_edge_tree, create_tap_network};
