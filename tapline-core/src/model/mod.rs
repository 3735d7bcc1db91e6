//! Data model for tapped feeder networks
//!
//! Contains the oriented edge and the owned recursive tree node. The types
//! carry no behavior beyond construction; building, validation and fault
//! location live in their own modules.

pub mod components;

pub use components::{Edge, EdgeNode};
