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

//! Reading edge-list files.
//!
//! Each non-blank line holds one edge as `u v` (weight 1) or `u v w`.
//! The number of vertices is the largest index occurring in the file.

use super::{Error, Result, Tokens};
use crate::num::traits::One;
use crate::SquareMatrix;

use std::fmt;
use std::fs;
use std::io::{BufRead, BufReader};
use std::str::FromStr;

/// Whether an edge record stands for one directed edge or for both
/// directions.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EdgeDirection {
    Directed,
    Undirected,
}

/// Read an edge-list file.
pub fn read<W>(fname: &str, dir: EdgeDirection) -> Result<SquareMatrix<W>>
where
    W: One + FromStr + Copy,
    W::Err: fmt::Display,
{
    read_from_buf(&mut BufReader::new(fs::File::open(fname)?), dir)
}

/// Read an edge-list file from a buffered reader.
///
/// # Example
///
/// ```
/// use apsp::formats::edgelist::{read_from_buf, EdgeDirection};
/// use std::io::Cursor;
///
/// let g = read_from_buf::<_, i64>(&mut Cursor::new("1 2 4\n2 3 -2\n1 3 1\n"),
///                                 EdgeDirection::Directed).unwrap();
/// assert_eq!(g.num_vertices(), 3);
/// assert_eq!(g.get_weight(0, 1), Some(4));
/// assert_eq!(g.get_weight(1, 0), None);
/// ```
pub fn read_from_buf<R, W>(buf: &mut R, dir: EdgeDirection) -> Result<SquareMatrix<W>>
where
    R: BufRead,
    W: One + FromStr + Copy,
    W::Err: fmt::Display,
{
    let mut edges = vec![];
    let mut n = 0;

    for (i, line) in buf.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut toks = Tokens::new(&line, i + 1);

        let u = toks.vertex()?;
        let v = toks.vertex()?;
        let w = match toks.next() {
            Some(tok) => tok.parse().map_err(|e| Error::Format {
                line: i + 1,
                msg: format!("{}", e),
            })?,
            None => W::one(),
        };
        toks.end()?;

        n = n.max(u).max(v);
        edges.push((u - 1, v - 1, w));
    }

    let mut g = SquareMatrix::new(n);
    for (u, v, w) in edges {
        g.set_weight(u, v, w);
        if dir == EdgeDirection::Undirected {
            g.set_weight(v, u, w);
        }
    }
    Ok(g)
}
