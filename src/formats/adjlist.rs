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

//! Reading adjacency-list files.
//!
//! Line `i` of the file lists the 1-based neighbors of vertex `i`; the
//! number of lines determines the number of vertices and a blank line is
//! an isolated vertex. All edges are directed and have weight 1, the
//! format cannot express other weights.

use super::{Error, Result, Tokens};
use crate::num::traits::One;
use crate::SquareMatrix;

use std::fs;
use std::io::{BufRead, BufReader};

/// Read an adjacency-list file.
pub fn read<W>(fname: &str) -> Result<SquareMatrix<W>>
where
    W: One + Copy,
{
    read_from_buf(&mut BufReader::new(fs::File::open(fname)?))
}

/// Read an adjacency-list file from a buffered reader.
///
/// # Example
///
/// ```
/// use apsp::formats::adjlist::read_from_buf;
/// use std::io::Cursor;
///
/// let g = read_from_buf::<_, i64>(&mut Cursor::new("2 3\n3\n\n")).unwrap();
/// assert_eq!(g.num_vertices(), 3);
/// assert_eq!(g.get_weight(0, 1), Some(1));
/// assert_eq!(g.get_weight(1, 2), Some(1));
/// assert_eq!(g.edges().count(), 3);
/// ```
pub fn read_from_buf<R, W>(buf: &mut R) -> Result<SquareMatrix<W>>
where
    R: BufRead,
    W: One + Copy,
{
    let lines = buf.lines().collect::<std::io::Result<Vec<_>>>()?;
    let n = lines.len();

    let mut g = SquareMatrix::new(n);
    for (u, line) in lines.iter().enumerate() {
        let mut toks = Tokens::new(line, u + 1);
        while let Some(tok) = toks.next() {
            let v: usize = tok.parse().map_err(|e| Error::Format {
                line: u + 1,
                msg: format!("{}", e),
            })?;
            if v < 1 || v > n {
                return Err(Error::Data {
                    line: u + 1,
                    msg: format!("invalid neighbor {} (must be between 1 and {})", v, n),
                });
            }
            g.set_weight(u, v - 1, W::one());
        }
    }
    Ok(g)
}
