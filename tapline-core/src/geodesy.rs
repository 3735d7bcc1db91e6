//! Geodesic measurement over WGS84
//!
//! Thin wrappers around the `geo` line-measure traits, shared by the tree
//! builder and the fault locator. All distances are in meters.

use geo::{Bearing, Destination, Distance, Geodesic, Length, LineString, Point};
use itertools::Itertools;

use crate::Meters;

/// Geodesic distance between two points in meters.
pub fn distance(a: Point<f64>, b: Point<f64>) -> Meters {
    Geodesic.distance(a, b)
}

/// Cumulative geodesic length of a line in meters.
pub fn line_length(line: &LineString<f64>) -> Meters {
    Geodesic.length(line)
}

/// The point reached by walking `meters` from the start of `line` along its
/// vertices, or `None` if `meters` exceeds the total line length.
pub fn point_at_distance(line: &LineString<f64>, meters: Meters) -> Option<Point<f64>> {
    let mut remaining = meters;

    for (from, to) in line.points().tuple_windows() {
        let leg = Geodesic.distance(from, to);
        // The comparison is exact. On multi-leg lines the running
        // subtraction rounds, so a query at exactly the total length can
        // land just past the final leg and fail to resolve.
        if remaining <= leg {
            let azimuth = Geodesic.bearing(from, to);
            return Some(Geodesic.destination(from, azimuth, remaining));
        }
        remaining -= leg;
    }

    None
}

#[cfg(test)]
mod tests {
    use geo::{Point, line_string};

    use super::*;

    #[test]
    fn distance_of_one_degree_along_the_equator() {
        let d = distance(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert!((d - 111_319.49).abs() < 1.0, "got {d}");
    }

    #[test]
    fn line_length_sums_all_legs() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 0.001, y: 0.0), (x: 0.002, y: 0.0)];
        let legs = distance(Point::new(0.0, 0.0), Point::new(0.001, 0.0))
            + distance(Point::new(0.001, 0.0), Point::new(0.002, 0.0));
        assert!((line_length(&line) - legs).abs() < 1e-6);
    }

    #[test]
    fn point_midway_along_a_single_leg() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 0.001, y: 0.0)];
        let halfway = line_length(&line) / 2.0;

        let point = point_at_distance(&line, halfway).unwrap();
        assert!((point.x() - 0.0005).abs() < 1e-7, "got {}", point.x());
        assert!(point.y().abs() < 1e-9);
    }

    #[test]
    fn point_at_exactly_one_leg_length_is_the_leg_end() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 0.001, y: 0.0)];

        let point = point_at_distance(&line, line_length(&line)).unwrap();
        assert!((point.x() - 0.001).abs() < 1e-7, "got {}", point.x());
    }

    #[test]
    fn point_in_the_second_leg() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 0.001, y: 0.0), (x: 0.002, y: 0.0)];
        let leg = distance(Point::new(0.0, 0.0), Point::new(0.001, 0.0));

        let point = point_at_distance(&line, leg * 1.5).unwrap();
        assert!((point.x() - 0.0015).abs() < 1e-7, "got {}", point.x());
    }

    #[test]
    fn point_beyond_the_line_is_not_found() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 0.001, y: 0.0)];
        assert!(point_at_distance(&line, 1_000.0).is_none());
    }
}
