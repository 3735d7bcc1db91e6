//! Tapped-line topology rules
//!
//! The rules run over the original, unoriented segment set; edge orientation
//! inside the tree does not affect any of them. Validation is read-only and
//! stops at the first violated rule.

use geo::{LineString, MultiLineString};
use itertools::Itertools;
use log::error;
use thiserror::Error;

use crate::model::EdgeNode;

/// A rule the input segment set failed, with the offending segment indices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyViolation {
    #[error("segment {index} is a closed loop")]
    ClosedLoop { index: usize },
    #[error("segment {index} shares no endpoint with any other segment")]
    Disconnected { index: usize },
    #[error("segment {index} shares an interior point with segment {other}")]
    InteriorSharedPoint { index: usize, other: usize },
    #[error("tree construction produced no root")]
    MissingRoot,
}

/// Checks that the segment set describes a single tapped (tree-shaped) line.
///
/// Junctions must occur only at published segment endpoints, matched by
/// exact coordinate equality.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_network(
    lines: &MultiLineString<f64>,
    root: Option<&EdgeNode>,
) -> Result<(), TopologyViolation> {
    check_closed_loops(lines)?;
    check_connectivity(lines)?;
    check_interior_sharing(lines)?;

    if root.is_none() {
        error!("Tree construction produced no root");
        return Err(TopologyViolation::MissingRoot);
    }

    Ok(())
}

/// No segment may return to its own first coordinate.
fn check_closed_loops(lines: &MultiLineString<f64>) -> Result<(), TopologyViolation> {
    for (index, line) in lines.0.iter().enumerate() {
        if line.is_closed() {
            error!("Segment {index} is a closed loop");
            return Err(TopologyViolation::ClosedLoop { index });
        }
    }
    Ok(())
}

/// With more than one segment present, every segment must share at least one
/// endpoint with another. A single-segment network trivially passes.
fn check_connectivity(lines: &MultiLineString<f64>) -> Result<(), TopologyViolation> {
    let segments = &lines.0;
    if segments.len() < 2 {
        return Ok(());
    }

    for (index, line) in segments.iter().enumerate() {
        let connected = segments
            .iter()
            .enumerate()
            .any(|(other, candidate)| other != index && shares_endpoint(line, candidate));

        if !connected {
            error!("Segment {index} is not connected to the rest of the network");
            return Err(TopologyViolation::Disconnected { index });
        }
    }

    Ok(())
}

/// No coordinate interior to one segment may appear anywhere in another
/// segment. This disallows T-junctions in the middle of a polyline.
fn check_interior_sharing(lines: &MultiLineString<f64>) -> Result<(), TopologyViolation> {
    for ((index, line), (other, candidate)) in lines.0.iter().enumerate().tuple_combinations() {
        if interior_touches(line, candidate) {
            error!("Segment {index} shares an interior point with segment {other}");
            return Err(TopologyViolation::InteriorSharedPoint { index, other });
        }
        if interior_touches(candidate, line) {
            error!("Segment {other} shares an interior point with segment {index}");
            return Err(TopologyViolation::InteriorSharedPoint {
                index: other,
                other: index,
            });
        }
    }
    Ok(())
}

fn shares_endpoint(a: &LineString<f64>, b: &LineString<f64>) -> bool {
    if a.0.is_empty() || b.0.is_empty() {
        return false;
    }
    let ends_a = [a.0[0], a.0[a.0.len() - 1]];
    let ends_b = [b.0[0], b.0[b.0.len() - 1]];
    ends_a.iter().any(|end| ends_b.contains(end))
}

/// True when a coordinate interior to `a` appears anywhere in `b`.
fn interior_touches(a: &LineString<f64>, b: &LineString<f64>) -> bool {
    a.0.iter()
        .skip(1)
        .take(a.0.len().saturating_sub(2))
        .any(|coord| b.0.contains(coord))
}

#[cfg(test)]
mod tests {
    use geo::{MultiLineString, line_string};

    use super::*;
    use crate::model::Edge;

    fn dummy_root(lines: &MultiLineString<f64>) -> EdgeNode {
        EdgeNode::new(Edge::new(lines.0[0].clone()).unwrap())
    }

    #[test]
    fn single_open_segment_passes() {
        let lines = MultiLineString::new(vec![line_string![
            (x: 0.0, y: 0.0),
            (x: 0.001, y: 0.0)
        ]]);
        let root = dummy_root(&lines);

        assert!(validate_network(&lines, Some(&root)).is_ok());
    }

    #[test]
    fn closed_loop_is_rejected() {
        let lines = MultiLineString::new(vec![line_string![
            (x: 0.0, y: 0.0),
            (x: 0.001, y: 0.0),
            (x: 0.001, y: 0.001),
            (x: 0.0, y: 0.0)
        ]]);
        let root = dummy_root(&lines);

        assert_eq!(
            validate_network(&lines, Some(&root)),
            Err(TopologyViolation::ClosedLoop { index: 0 })
        );
    }

    #[test]
    fn disconnected_pair_is_rejected() {
        let lines = MultiLineString::new(vec![
            line_string![(x: 0.0, y: 0.0), (x: 0.001, y: 0.0)],
            line_string![(x: 0.5, y: 0.5), (x: 0.501, y: 0.5)],
        ]);
        let root = dummy_root(&lines);

        assert_eq!(
            validate_network(&lines, Some(&root)),
            Err(TopologyViolation::Disconnected { index: 0 })
        );
    }

    #[test]
    fn interior_junction_is_rejected() {
        // The second segment connects at an endpoint but also lands on the
        // first segment's middle coordinate.
        let lines = MultiLineString::new(vec![
            line_string![(x: 0.0, y: 0.0), (x: 0.001, y: 0.0), (x: 0.002, y: 0.0)],
            line_string![(x: 0.002, y: 0.0), (x: 0.001, y: 0.0)],
        ]);
        let root = dummy_root(&lines);

        assert_eq!(
            validate_network(&lines, Some(&root)),
            Err(TopologyViolation::InteriorSharedPoint { index: 0, other: 1 })
        );
    }

    #[test]
    fn missing_root_is_rejected() {
        let lines = MultiLineString::new(vec![line_string![
            (x: 0.0, y: 0.0),
            (x: 0.001, y: 0.0)
        ]]);

        assert_eq!(
            validate_network(&lines, None),
            Err(TopologyViolation::MissingRoot)
        );
    }
}
