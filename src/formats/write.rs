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

//! Writing matrices in the output format of the original tool.

use crate::SquareMatrix;

use std::fmt;
use std::io::{self, Write};

/// Write the matrix with one row per line, `inf` for missing edges.
pub fn write_matrix<T, W>(out: &mut T, g: &SquareMatrix<W>) -> io::Result<()>
where
    T: Write,
    W: fmt::Display + Copy,
{
    let n = g.num_vertices();
    for u in 0..n {
        for v in 0..n {
            if v > 0 {
                write!(out, " ")?;
            }
            match g.get_weight(u, v) {
                Some(w) => write!(out, "{}", w)?,
                None => write!(out, "inf")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write one `u - v: d` line for every ordered pair `u` ≠ `v` with a
/// finite distance, 1-based.
pub fn write_distances<T, W>(out: &mut T, dist: &SquareMatrix<W>) -> io::Result<()>
where
    T: Write,
    W: fmt::Display + Copy,
{
    let n = dist.num_vertices();
    for u in 0..n {
        for v in 0..n {
            if u != v {
                if let Some(d) = dist.get_weight(u, v) {
                    writeln!(out, "{} - {}: {}", u + 1, v + 1, d)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_distances, write_matrix};
    use crate::SquareMatrix;

    #[test]
    fn matrix_output() {
        let mut g = SquareMatrix::new(2);
        g.set_weight(0, 1, 4);
        g.set_weight(1, 0, -2);

        let mut out = Vec::new();
        write_matrix(&mut out, &g).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "inf 4\n-2 inf\n");
    }

    #[test]
    fn distances_output_skips_diagonal_and_unreachable() {
        let mut dist = SquareMatrix::new(3);
        dist.set_weight(0, 0, 0);
        dist.set_weight(0, 1, 7);
        dist.set_weight(1, 1, 0);
        dist.set_weight(2, 2, 0);

        let mut out = Vec::new();
        write_distances(&mut out, &dist).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 - 2: 7\n");
    }
}
