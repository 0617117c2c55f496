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

//! A library for all-pairs shortest paths on dense graphs.
//!
//! The graph is stored as a dense adjacency matrix, edge weights may be
//! negative. The all-pairs computation runs a Bellman-Ford relaxation from
//! every vertex and fails if a negative cycle is reachable.

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod matrix;
pub use self::matrix::SquareMatrix;

// # Algorithms

pub mod shortestpath;
pub use self::shortestpath::NegativeCycle;

// # File formats

pub mod formats;
