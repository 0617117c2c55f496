// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! A dense square adjacency matrix.
//!
//! A cell holds `Some(w)` if the directed edge exists with weight `w` and
//! `None` otherwise. There is no reserved numeric value for "no edge", so
//! zero-weight and negative edges are representable without restriction.

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A square matrix of optional edge weights.
///
/// Vertices are indexed `0..n`. The matrix is always fully initialized:
/// every cell of a freshly created matrix is `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SquareMatrix<W> {
    n: usize,
    cells: Vec<Option<W>>,
}

impl<W> SquareMatrix<W> {
    /// Create an `n`×`n` matrix with no edges.
    pub fn new(n: usize) -> Self {
        let mut cells = Vec::new();
        cells.resize_with(n * n, || None);
        SquareMatrix { n, cells }
    }

    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.n
    }

    fn index(&self, u: usize, v: usize) -> usize {
        assert!(u < self.n && v < self.n, "vertex index out of range");
        u * self.n + v
    }

    /// Set the weight of the directed edge `u` → `v`.
    ///
    /// An existing weight is overwritten unconditionally.
    pub fn set_weight(&mut self, u: usize, v: usize, w: W) {
        let i = self.index(u, v);
        self.cells[i] = Some(w);
    }

    /// Remove the directed edge `u` → `v` if it exists.
    pub fn clear_weight(&mut self, u: usize, v: usize) {
        let i = self.index(u, v);
        self.cells[i] = None;
    }
}

impl<W: Copy> SquareMatrix<W> {
    /// Return the weight of the directed edge `u` → `v` or `None` if there
    /// is no such edge.
    pub fn get_weight(&self, u: usize, v: usize) -> Option<W> {
        self.cells[self.index(u, v)]
    }

    /// Iterate over all edges as `(u, v, w)` triples with *1-based*
    /// endpoints, in row-major order.
    ///
    /// The iterator scans the matrix anew each time it is created.
    ///
    /// # Example
    ///
    /// ```
    /// use apsp::SquareMatrix;
    ///
    /// let mut g = SquareMatrix::new(3);
    /// g.set_weight(0, 2, 5);
    /// g.set_weight(1, 0, -1);
    ///
    /// let edges: Vec<_> = g.edges().collect();
    /// assert_eq!(edges, vec![(1, 3, 5), (2, 1, -1)]);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        let n = self.n;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.map(|w| (i / n + 1, i % n + 1, w)))
    }

    /// Build an `n`×`n` matrix from `(u, v, w)` triples with 1-based
    /// endpoints, as produced by [`edges`](SquareMatrix::edges).
    ///
    /// Later triples overwrite earlier ones for the same edge.
    pub fn from_edges<I>(n: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut g = SquareMatrix::new(n);
        for (u, v, w) in edges {
            assert!(u >= 1 && v >= 1, "vertex index out of range");
            g.set_weight(u - 1, v - 1, w);
        }
        g
    }
}

impl<W: PartialEq> SquareMatrix<W> {
    /// Return `true` if the matrix equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|u| (u + 1..self.n).all(|v| self.cells[u * self.n + v] == self.cells[v * self.n + u]))
    }
}

#[cfg(test)]
mod tests {
    use super::SquareMatrix;

    #[test]
    fn new_matrix_has_no_edges() {
        let g = SquareMatrix::<i32>::new(4);
        assert_eq!(g.num_vertices(), 4);
        for u in 0..4 {
            for v in 0..4 {
                assert_eq!(g.get_weight(u, v), None);
            }
        }
        assert_eq!(g.edges().count(), 0);
    }

    #[test]
    fn set_get_and_overwrite() {
        let mut g = SquareMatrix::new(3);
        g.set_weight(0, 1, 7);
        assert_eq!(g.get_weight(0, 1), Some(7));
        assert_eq!(g.get_weight(1, 0), None);

        g.set_weight(0, 1, -2);
        assert_eq!(g.get_weight(0, 1), Some(-2));

        g.clear_weight(0, 1);
        assert_eq!(g.get_weight(0, 1), None);
    }

    #[test]
    fn diagonal_is_ordinary() {
        let mut g = SquareMatrix::new(2);
        g.set_weight(1, 1, 3);
        assert_eq!(g.get_weight(1, 1), Some(3));
        assert_eq!(g.get_weight(0, 0), None);
    }

    #[test]
    fn edges_row_major_one_based() {
        let mut g = SquareMatrix::new(3);
        g.set_weight(2, 0, 9);
        g.set_weight(0, 1, 1);
        g.set_weight(0, 2, 2);

        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(1, 2, 1), (1, 3, 2), (3, 1, 9)]);

        // restartable
        assert_eq!(g.edges().collect::<Vec<_>>(), edges);
    }

    #[test]
    fn from_edges_roundtrip() {
        let mut g = SquareMatrix::new(4);
        g.set_weight(0, 1, 4);
        g.set_weight(1, 2, -2);
        g.set_weight(3, 3, 1);

        let h = SquareMatrix::from_edges(4, g.edges());
        assert_eq!(g, h);
    }

    #[test]
    fn symmetry() {
        let mut g = SquareMatrix::new(3);
        g.set_weight(0, 1, 2);
        assert!(!g.is_symmetric());
        g.set_weight(1, 0, 2);
        assert!(g.is_symmetric());
    }

    #[test]
    #[should_panic]
    fn out_of_range_panics() {
        let g = SquareMatrix::<i32>::new(2);
        let _ = g.get_weight(0, 2);
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use super::SquareMatrix;

        #[test]
        fn test_serde() {
            let mut g = SquareMatrix::new(3);
            g.set_weight(0, 1, 4);
            g.set_weight(2, 0, -1);

            let serialized = serde_json::to_string(&g).unwrap();
            let h: SquareMatrix<i32> = serde_json::from_str(&serialized).unwrap();
            assert_eq!(g, h);
        }
    }
}
