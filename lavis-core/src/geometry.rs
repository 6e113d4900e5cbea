/// Point sets and wireframes
use nalgebra::{Point2, Point3};

use crate::error::{Error, Result};

/// Vertices joined by straight edges
#[derive(Debug, Clone, PartialEq)]
pub struct Wireframe<P> {
    pub vertices: Vec<P>,
    pub edges: Vec<[usize; 2]>,
}

impl<P> Wireframe<P> {
    /// Build a wireframe, rejecting edges that point past the vertex list
    pub fn new(vertices: Vec<P>, edges: Vec<[usize; 2]>) -> Result<Self> {
        for (edge, pair) in edges.iter().enumerate() {
            for &index in pair {
                if index >= vertices.len() {
                    return Err(Error::EdgeOutOfBounds {
                        edge,
                        index,
                        len: vertices.len(),
                    });
                }
            }
        }

        Ok(Self { vertices, edges })
    }

    /// Endpoints of every edge, in edge order
    pub fn segments(&self) -> impl Iterator<Item = (&P, &P)> + '_ {
        self.edges
            .iter()
            .map(|&[a, b]| (&self.vertices[a], &self.vertices[b]))
    }

    /// Transform every vertex, keeping the edge list
    pub fn map<Q>(&self, f: impl FnMut(&P) -> Q) -> Wireframe<Q> {
        Wireframe {
            vertices: self.vertices.iter().map(f).collect(),
            edges: self.edges.clone(),
        }
    }
}

impl Wireframe<Point2<f64>> {
    /// The reference triangle drawn by the vectors demo
    pub fn triangle() -> Result<Self> {
        Self::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 2.0),
                Point2::new(2.0, 1.0),
            ],
            vec![[0, 1], [1, 2], [2, 0]],
        )
    }
}

impl Wireframe<Point3<f64>> {
    /// The house-shaped polyhedron drawn by the isometric demo
    pub fn house() -> Result<Self> {
        Self::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(2.0, 2.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
                Point3::new(1.0, 1.0, 2.0),
                Point3::new(1.0, 0.0, 2.0),
                Point3::new(0.0, 1.0, 2.0),
                Point3::new(2.0, 1.0, 2.0),
            ],
            vec![
                [0, 1],
                [1, 2],
                [2, 3],
                [3, 0],
                [0, 6],
                [1, 5],
                [2, 7],
                [3, 4],
                [4, 5],
                [5, 6],
                [6, 4],
                [4, 7],
                [7, 1],
                [7, 2],
                [6, 3],
            ],
        )
    }

    /// Distances between every unordered vertex pair `(i, j)` with `i < j`
    pub fn pairwise_distances(&self) -> Vec<f64> {
        let n = self.vertices.len();
        let mut distances = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                distances.push(nalgebra::distance(&self.vertices[i], &self.vertices[j]));
            }
        }
        distances
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` when empty
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(lo, hi), p| {
            (lo.inf(p), hi.sup(p))
        }))
    }
}
