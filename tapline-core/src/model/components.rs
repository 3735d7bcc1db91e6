//! Feeder network components - oriented edges and tree nodes

use geo::{LineString, Point};

use crate::Error;

/// A segment bound to a fixed traversal direction within the tree.
///
/// `start` and `end` are derived once at construction and never change.
/// Their exact coordinate equality is the only join key used by the builder
/// and the locator; junction coordinates must match bit-exactly.
#[derive(Debug, Clone)]
pub struct Edge {
    line: LineString<f64>,
    start: Point<f64>,
    end: Point<f64>,
}

impl Edge {
    /// Binds a line to the direction given by its coordinate order.
    ///
    /// # Errors
    ///
    /// Returns an error if the line has fewer than two coordinates.
    pub fn new(line: LineString<f64>) -> Result<Self, Error> {
        if line.0.len() < 2 {
            return Err(Error::InvalidData(
                "a segment needs at least two coordinates".to_string(),
            ));
        }

        let start = Point::from(line.0[0]);
        let end = Point::from(line.0[line.0.len() - 1]);
        Ok(Self { line, start, end })
    }

    pub fn line(&self) -> &LineString<f64> {
        &self.line
    }

    pub fn start(&self) -> Point<f64> {
        self.start
    }

    pub fn end(&self) -> Point<f64> {
        self.end
    }
}

/// A node of the feeder tree: one edge plus the edges tapped off its end.
///
/// Children are exclusively owned, so the tree is acyclic by construction
/// and needs no parent back-references. Every child's `start` equals this
/// node's `end` once the builder has applied any necessary reversal.
#[derive(Debug, Clone)]
pub struct EdgeNode {
    edge: Edge,
    children: Vec<EdgeNode>,
}

impl EdgeNode {
    pub fn new(edge: Edge) -> Self {
        Self {
            edge,
            children: Vec::new(),
        }
    }

    pub fn edge(&self) -> &Edge {
        &self.edge
    }

    pub fn children(&self) -> &[EdgeNode] {
        &self.children
    }

    pub(crate) fn add_child(&mut self, child: EdgeNode) {
        self.children.push(child);
    }
}
