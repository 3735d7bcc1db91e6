//! Distance-based fault location
//!
//! Walks the finished tree and reports every point that sits at a given
//! cumulative distance from the root. Multiple branches can terminate at
//! exactly the same distance, so a single query yields 0, 1, or many points.

use geo::Point;
use log::{debug, warn};
use rayon::prelude::*;

use crate::geodesy;
use crate::model::EdgeNode;
use crate::{Error, Meters};

/// Every point reached by walking `distance_meters` from the root along all
/// branches of the tree.
///
/// The result has set semantics under exact point equality. A distance of 0
/// yields an empty result, as does a distance beyond every branch. A branch
/// whose point cannot be resolved contributes nothing; its siblings are
/// unaffected.
pub fn locate_faults(root: &EdgeNode, distance_meters: Meters) -> Vec<Point<f64>> {
    let mut locations = Vec::new();
    walk_tree(root, distance_meters, &mut locations);

    locations
}

fn walk_tree(node: &EdgeNode, remaining: Meters, locations: &mut Vec<Point<f64>>) {
    // No more distance to walk on this branch.
    if remaining <= 0.0 {
        return;
    }

    let edge_length = geodesy::line_length(node.edge().line());
    debug!("Walking edge of {edge_length:.1} m with {remaining:.1} m remaining");

    // The fault sits on this edge.
    if remaining <= edge_length {
        match geodesy::point_at_distance(node.edge().line(), remaining) {
            Some(point) => {
                if !locations.contains(&point) {
                    locations.push(point);
                }
            }
            None => warn!("Could not resolve a point {remaining:.1} m along the edge"),
        }
        return;
    }

    // Walk whatever distance is left into every tap off this edge's end.
    for child in node.children() {
        walk_tree(child, remaining - edge_length, locations);
    }
}

/// Samples [`locate_faults`] over an inclusive distance range.
///
/// Every sample is an independent read of the immutable tree, so samples are
/// computed in parallel. Returns one `(distance, locations)` pair per sample,
/// in sweep order.
///
/// # Errors
///
/// Returns an error if `step_meters` is not strictly positive or the range
/// is reversed.
pub fn sweep_faults(
    root: &EdgeNode,
    start_meters: Meters,
    end_meters: Meters,
    step_meters: Meters,
) -> Result<Vec<(Meters, Vec<Point<f64>>)>, Error> {
    if step_meters <= 0.0 {
        return Err(Error::InvalidData(format!(
            "sweep step must be positive, got {step_meters}"
        )));
    }
    if end_meters < start_meters {
        return Err(Error::InvalidData(format!(
            "sweep range is reversed: {start_meters}..{end_meters}"
        )));
    }

    let mut distances = Vec::new();
    let mut distance = start_meters;
    while distance <= end_meters {
        distances.push(distance);
        distance += step_meters;
    }

    Ok(distances
        .into_par_iter()
        .map(|distance| (distance, locate_faults(root, distance)))
        .collect())
}
