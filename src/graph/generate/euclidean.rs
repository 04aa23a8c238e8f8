use super::Generate;
use crate::graph::{GraphError, WeightedGraph};
use crate::util::Point;

use oorandom::Rand64;

/// Generates a symmetric complete graph from random points in a square.
/// The cost of an edge is the euclidean distance between its points.
pub struct Euclidean<'a> {
    size: usize,
    side_length: f64,
    rng: &'a mut Rand64,
    points: Vec<Point>,
}

impl<'a> Euclidean<'a> {
    pub fn new(size: usize, side_length: f64, rng: &'a mut Rand64) -> Euclidean<'a> {
        Euclidean {
            size,
            side_length,
            rng,
            points: Vec::new(),
        }
    }

    /// The points of the last generated graph. Node i sits at points[i - 1].
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl<'a> Generate for Euclidean<'a> {
    fn generate(&mut self) -> Result<WeightedGraph, GraphError> {
        let side_length = self.side_length;
        let rng = &mut self.rng;
        self.points = (0..self.size)
            .map(|_| Point {
                x: rng.rand_float() * side_length,
                y: rng.rand_float() * side_length,
            })
            .collect();

        let mut graph = WeightedGraph::with_order(self.size);
        for (i, p1) in self.points.iter().enumerate() {
            for (j, p2) in self.points.iter().enumerate().skip(i + 1) {
                // coincident points would yield a zero cost
                let cost = p1.distance(p2).max(f64::EPSILON);
                graph.add_edge((i + 1, j + 1), cost)?;
                graph.add_edge((j + 1, i + 1), cost)?;
            }
        }

        Ok(graph)
    }
}
