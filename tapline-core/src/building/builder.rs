//! Builds a rooted edge tree out of an unordered set of line segments.
//!
//! The input is assumed to be a tapped feeder: many segments, all connected
//! into a single tree. E.g. the end of segment A splits into the start of
//! segments B and C, B splits into D and E, and so on. Segments may be
//! supplied in either direction; the builder reverses them as needed so
//! every edge points away from the root.

use geo::{LineString, MultiLineString, Point};
use log::{debug, info};

use crate::Error;
use crate::geodesy;
use crate::model::{Edge, EdgeNode};
use crate::validation::validate_network;

/// Builds the edge tree and gates it behind the tapped-line topology rules.
///
/// This is the main entry point: the returned root is validated and safe to
/// hand to the fault locator.
///
/// # Errors
///
/// Returns an error if tree construction fails or the input violates the
/// topology rules.
pub fn create_tap_network(
    lines: &MultiLineString<f64>,
    reference: Point<f64>,
) -> Result<EdgeNode, Error> {
    let root = build_edge_tree(lines, reference)?;
    validate_network(lines, Some(&root))?;
    info!("Edge tree passes the tapped-line rules");

    Ok(root)
}

/// Builds a rooted tree from the segments, anchored at the endpoint nearest
/// the reference point.
///
/// Every returned edge is oriented away from the root, so a node's end
/// equals the start of each of its children.
///
/// # Errors
///
/// Returns an error if the input is empty, a segment has fewer than two
/// coordinates, no segment contains the anchor point, a segment touches a
/// junction with both endpoints, or any segment remains unplaced.
pub fn build_edge_tree(
    lines: &MultiLineString<f64>,
    reference: Point<f64>,
) -> Result<EdgeNode, Error> {
    for line in &lines.0 {
        if line.0.len() < 2 {
            return Err(Error::InvalidData(
                "every segment needs at least two coordinates".to_string(),
            ));
        }
    }

    // Each construction owns its private pool of unplaced segments.
    let mut remaining: Vec<LineString<f64>> = lines.0.clone();

    let anchor = find_anchor_point(&remaining, reference).ok_or(Error::NoAnchorPoint)?;
    info!("Anchor point nearest the reference: {:?}", anchor.x_y());

    let position = remaining
        .iter()
        .position(|line| {
            let (first, last) = endpoints(line);
            first == anchor || last == anchor
        })
        .ok_or(Error::NoAnchorSegment)?;

    // Orient the anchor segment so its start sits at the anchor point.
    let mut anchor_line = remaining.remove(position);
    let (_, last) = endpoints(&anchor_line);
    if last == anchor {
        anchor_line.0.reverse();
    }

    let mut root = EdgeNode::new(Edge::new(anchor_line)?);
    grow(&mut root, &mut remaining)?;

    if !remaining.is_empty() {
        return Err(Error::UnplacedSegments {
            count: remaining.len(),
        });
    }

    log_edge_tree(&root, 0);

    Ok(root)
}

/// The segment endpoint with minimum geodesic distance to the reference
/// point, ties broken by first-encountered order.
fn find_anchor_point(segments: &[LineString<f64>], reference: Point<f64>) -> Option<Point<f64>> {
    let mut anchor = None;
    let mut closest = f64::MAX;

    for line in segments {
        let (first, last) = endpoints(line);

        let start_distance = geodesy::distance(first, reference);
        if start_distance < closest {
            anchor = Some(first);
            closest = start_distance;
        }

        let end_distance = geodesy::distance(last, reference);
        if end_distance < closest {
            anchor = Some(last);
            closest = end_distance;
        }
    }

    anchor
}

/// Attaches every unplaced segment that touches this node's end, reversing
/// segments whose last point sits at the junction, and expands each new
/// child the same way.
fn grow(node: &mut EdgeNode, remaining: &mut Vec<LineString<f64>>) -> Result<(), Error> {
    let junction = node.edge().end();

    let mut index = 0;
    while index < remaining.len() {
        let (first, last) = endpoints(&remaining[index]);

        if first == junction && last == junction {
            return Err(Error::AmbiguousPlacement);
        }

        if first == junction || last == junction {
            let mut line = remaining.remove(index);
            if last == junction {
                line.0.reverse();
            }

            let mut child = EdgeNode::new(Edge::new(line)?);
            grow(&mut child, remaining)?;
            node.add_child(child);

            // The recursion may have consumed segments anywhere in the
            // pool; rescan from the front.
            index = 0;
        } else {
            index += 1;
        }
    }

    Ok(())
}

fn endpoints(line: &LineString<f64>) -> (Point<f64>, Point<f64>) {
    (
        Point::from(line.0[0]),
        Point::from(line.0[line.0.len() - 1]),
    )
}

fn log_edge_tree(node: &EdgeNode, depth: usize) {
    debug!(
        "{}edge {:?} -> {:?}",
        "  ".repeat(depth),
        node.edge().start().x_y(),
        node.edge().end().x_y()
    );

    for child in node.children() {
        log_edge_tree(child, depth + 1);
    }
}
