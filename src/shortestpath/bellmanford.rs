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

//! The single-source shortest-path algorithm of Bellman and Ford on a
//! dense adjacency matrix.
//!
//! Edge weights may be negative. The algorithm performs `n - 1` relaxation
//! rounds, each scanning every cell of the matrix, so a run takes Θ(n³)
//! time independently of the number of edges.

use crate::num::traits::NumAssign;

use super::NegativeCycle;
use crate::matrix::SquareMatrix;

/// Compute the shortest distances from `src` to all vertices of `g`.
///
/// Returns one distance per vertex, `None` for vertices that are not
/// reachable from `src`. If a negative cycle is reachable from `src`, the
/// function fails with [`NegativeCycle`] and no distances are returned.
///
/// # Example
///
/// ```
/// use apsp::SquareMatrix;
/// use apsp::shortestpath::bellmanford;
///
/// let mut g = SquareMatrix::new(4);
/// g.set_weight(0, 1, 4);
/// g.set_weight(1, 2, -2);
/// g.set_weight(0, 2, 1);
///
/// let dist = bellmanford::solve(&g, 0).unwrap();
/// assert_eq!(dist, vec![Some(0), Some(4), Some(1), None]);
/// ```
///
/// A reachable negative cycle is reported as an error:
///
/// ```
/// use apsp::{NegativeCycle, SquareMatrix};
/// use apsp::shortestpath::bellmanford;
///
/// let mut g = SquareMatrix::new(2);
/// g.set_weight(0, 1, 1);
/// g.set_weight(1, 0, -2);
///
/// assert_eq!(bellmanford::solve(&g, 0), Err(NegativeCycle));
/// ```
pub fn solve<W>(g: &SquareMatrix<W>, src: usize) -> Result<Vec<Option<W>>, NegativeCycle>
where
    W: NumAssign + Ord + Copy,
{
    let n = g.num_vertices();
    let mut dist = vec![None; n];
    dist[src] = Some(W::zero());

    for _ in 1..n {
        for u in 0..n {
            for v in 0..n {
                let w = match g.get_weight(u, v) {
                    Some(w) => w,
                    None => continue,
                };
                // a vertex not reached yet cannot relax its neighbors
                let du = match dist[u] {
                    Some(d) => d,
                    None => continue,
                };
                let d = du + w;
                if dist[v].map_or(true, |dv| d < dv) {
                    dist[v] = Some(d);
                }
            }
        }
    }

    // any still improvable edge lies on or behind a negative cycle
    for u in 0..n {
        for v in 0..n {
            if let (Some(w), Some(du)) = (g.get_weight(u, v), dist[u]) {
                if dist[v].map_or(true, |dv| du + w < dv) {
                    return Err(NegativeCycle);
                }
            }
        }
    }

    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::solve;
    use crate::matrix::SquareMatrix;
    use crate::NegativeCycle;

    #[test]
    fn single_source_distances() {
        let mut g = SquareMatrix::new(5);
        for &(u, v, w) in &[(0, 1, 6), (0, 2, 5), (1, 3, 3), (2, 3, -4), (3, 4, 8), (1, 4, -2)] {
            g.set_weight(u, v, w);
        }

        let dist = solve(&g, 0).unwrap();
        assert_eq!(dist, vec![Some(0), Some(6), Some(5), Some(1), Some(4)]);
    }

    #[test]
    fn unreachable_vertices_stay_unset() {
        let mut g = SquareMatrix::new(3);
        g.set_weight(1, 2, 1);

        let dist = solve(&g, 0).unwrap();
        assert_eq!(dist, vec![Some(0), None, None]);
    }

    #[test]
    fn source_distance_is_zero() {
        let g = SquareMatrix::<i64>::new(1);
        assert_eq!(solve(&g, 0).unwrap(), vec![Some(0)]);
    }

    #[test]
    fn negative_edges_without_cycle() {
        let mut g = SquareMatrix::new(3);
        g.set_weight(0, 1, -5);
        g.set_weight(1, 2, -5);

        let dist = solve(&g, 0).unwrap();
        assert_eq!(dist, vec![Some(0), Some(-5), Some(-10)]);
    }

    #[test]
    fn negative_cycle_fails() {
        let mut g = SquareMatrix::new(3);
        g.set_weight(0, 1, -1);
        g.set_weight(1, 2, -1);
        g.set_weight(2, 0, -1);

        assert_eq!(solve(&g, 0), Err(NegativeCycle));
    }

    #[test]
    fn negative_self_loop_fails() {
        let mut g = SquareMatrix::new(2);
        g.set_weight(0, 0, -1);

        assert_eq!(solve(&g, 0), Err(NegativeCycle));
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let mut g = SquareMatrix::new(4);
        g.set_weight(0, 1, 1);
        // cycle among vertices 2 and 3, not reachable from 0
        g.set_weight(2, 3, -1);
        g.set_weight(3, 2, -1);

        let dist = solve(&g, 0).unwrap();
        assert_eq!(dist, vec![Some(0), Some(1), None, None]);
    }

    #[test]
    fn zero_weight_edge() {
        let mut g = SquareMatrix::new(2);
        g.set_weight(0, 1, 0);

        assert_eq!(solve(&g, 0).unwrap(), vec![Some(0), Some(0)]);
    }
}
