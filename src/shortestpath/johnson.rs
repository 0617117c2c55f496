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

//! All-pairs shortest paths by repeated Bellman-Ford relaxation.
//!
//! Following Johnson's scheme the graph is first extended by one auxiliary
//! vertex and each source is then relaxed on the extended graph. The
//! auxiliary vertex carries no edges at all, so it never influences the
//! distances (a proper re-weighting pass would give it zero-weight edges
//! to every vertex; without one the per-source runs remain plain
//! Bellman-Ford). The extension is kept because the distances it yields
//! are the same and dropping it would change nothing but the matrix size
//! passed to the inner runs.

use crate::num::traits::NumAssign;

use super::{bellmanford, NegativeCycle};
use crate::matrix::SquareMatrix;

/// Compute the matrix of shortest distances between all vertex pairs.
///
/// Entry `(s, t)` of the result is the length of a shortest path from `s`
/// to `t` or `None` if `t` is not reachable from `s`. If the graph
/// contains a negative cycle, the computation stops at the first source
/// that reaches it and fails with [`NegativeCycle`]; no partial distance
/// matrix is returned.
///
/// # Example
///
/// ```
/// use apsp::SquareMatrix;
/// use apsp::shortestpath::johnson;
///
/// let mut g = SquareMatrix::new(3);
/// g.set_weight(0, 1, 4);
/// g.set_weight(1, 2, -2);
/// g.set_weight(0, 2, 1);
///
/// let dist = johnson::solve(&g).unwrap();
/// assert_eq!(dist.get_weight(0, 2), Some(1));
/// assert_eq!(dist.get_weight(1, 2), Some(-2));
/// assert_eq!(dist.get_weight(0, 0), Some(0));
/// assert_eq!(dist.get_weight(2, 0), None);
/// ```
pub fn solve<W>(g: &SquareMatrix<W>) -> Result<SquareMatrix<W>, NegativeCycle>
where
    W: NumAssign + Ord + Copy,
{
    let n = g.num_vertices();
    let ext = extend(g);

    let mut dist = SquareMatrix::new(n);
    for s in 0..n {
        let row = bellmanford::solve(&ext, s)?;
        for (t, d) in row.into_iter().take(n).enumerate() {
            if let Some(d) = d {
                dist.set_weight(s, t, d);
            }
        }
    }
    Ok(dist)
}

/// Append the auxiliary vertex `n` with no incident edges.
fn extend<W: Copy>(g: &SquareMatrix<W>) -> SquareMatrix<W> {
    let n = g.num_vertices();
    let mut ext = SquareMatrix::new(n + 1);
    for u in 0..n {
        for v in 0..n {
            if let Some(w) = g.get_weight(u, v) {
                ext.set_weight(u, v, w);
            }
        }
    }
    ext
}

#[cfg(test)]
mod tests {
    use super::{extend, solve};
    use crate::matrix::SquareMatrix;
    use crate::NegativeCycle;

    fn example_graph() -> SquareMatrix<i64> {
        let mut g = SquareMatrix::new(5);
        for &(u, v, w) in &[
            (0, 1, 6),
            (0, 2, 5),
            (1, 2, 7),
            (1, 3, 3),
            (1, 4, -2),
            (2, 3, -4),
            (3, 4, 8),
            (3, 1, -1),
            (4, 0, 2),
            (4, 3, 7),
        ] {
            g.set_weight(u, v, w);
        }
        g
    }

    #[test]
    fn all_pairs_distances() {
        let dist = solve(&example_graph()).unwrap();

        let expected = [
            [0, 0, 5, 1, -2],
            [0, 0, 5, 1, -2],
            [-5, -5, 0, -4, -7],
            [-1, -1, 4, 0, -3],
            [2, 2, 7, 3, 0],
        ];
        for s in 0..5 {
            for t in 0..5 {
                assert_eq!(dist.get_weight(s, t), Some(expected[s][t]), "pair ({}, {})", s, t);
            }
        }
    }

    #[test]
    fn unreachable_pairs_stay_unset() {
        let mut g = SquareMatrix::new(3);
        g.set_weight(0, 1, 2);

        let dist = solve(&g).unwrap();
        assert_eq!(dist.get_weight(0, 1), Some(2));
        assert_eq!(dist.get_weight(1, 0), None);
        assert_eq!(dist.get_weight(0, 2), None);
        assert_eq!(dist.get_weight(2, 0), None);
        assert_eq!(dist.get_weight(2, 2), Some(0));
    }

    #[test]
    fn negative_cycle_aborts() {
        let mut g = example_graph();
        g.set_weight(4, 1, -1);

        assert_eq!(solve(&g), Err(NegativeCycle));
    }

    #[test]
    fn empty_graph() {
        let g = SquareMatrix::<i64>::new(0);
        let dist = solve(&g).unwrap();
        assert_eq!(dist.num_vertices(), 0);
    }

    #[test]
    fn extension_adds_isolated_vertex() {
        let g = example_graph();
        let ext = extend(&g);

        assert_eq!(ext.num_vertices(), 6);
        for u in 0..6 {
            assert_eq!(ext.get_weight(u, 5), None);
            assert_eq!(ext.get_weight(5, u), None);
        }
        assert_eq!(ext.edges().count(), g.edges().count());
    }
}
