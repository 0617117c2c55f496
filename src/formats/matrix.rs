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

//! Reading adjacency-matrix files.
//!
//! The file holds one matrix row per line; the number of lines determines
//! the number of vertices and every row must have exactly that many
//! entries. The tokens `inf` and `-` denote a missing edge.

use super::{Error, Result, Tokens};
use crate::num::traits::Zero;
use crate::SquareMatrix;

use std::fmt;
use std::fs;
use std::io::{BufRead, BufReader};
use std::str::FromStr;

/// How a literal 0 entry is interpreted.
///
/// The original file format had no way to mark a missing edge and used 0
/// for it, which makes zero-weight edges unrepresentable.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ZeroPolicy {
    /// Legacy interpretation: 0 means "no edge".
    NoEdge,
    /// 0 is an ordinary edge weight; only `inf` and `-` mean "no edge".
    Weight,
}

/// Read an adjacency-matrix file.
pub fn read<W>(fname: &str, zeros: ZeroPolicy) -> Result<SquareMatrix<W>>
where
    W: Zero + FromStr + Copy,
    W::Err: fmt::Display,
{
    read_from_buf(&mut BufReader::new(fs::File::open(fname)?), zeros)
}

/// Read an adjacency-matrix file from a buffered reader.
///
/// # Example
///
/// ```
/// use apsp::formats::matrix::{read_from_buf, ZeroPolicy};
/// use std::io::Cursor;
///
/// let g = read_from_buf::<_, i64>(&mut Cursor::new("0 4\n-2 0\n"),
///                                 ZeroPolicy::NoEdge).unwrap();
/// assert_eq!(g.get_weight(0, 1), Some(4));
/// assert_eq!(g.get_weight(0, 0), None);
/// ```
pub fn read_from_buf<R, W>(buf: &mut R, zeros: ZeroPolicy) -> Result<SquareMatrix<W>>
where
    R: BufRead,
    W: Zero + FromStr + Copy,
    W::Err: fmt::Display,
{
    let lines = buf.lines().collect::<std::io::Result<Vec<_>>>()?;
    let n = lines.len();

    let mut g = SquareMatrix::new(n);
    for (u, line) in lines.iter().enumerate() {
        let mut toks = Tokens::new(line, u + 1);
        for v in 0..n {
            match toks.next() {
                Some("inf") | Some("-") => {}
                Some(tok) => {
                    let w: W = tok.parse().map_err(|e| Error::Format {
                        line: u + 1,
                        msg: format!("{}", e),
                    })?;
                    if !(zeros == ZeroPolicy::NoEdge && w.is_zero()) {
                        g.set_weight(u, v, w);
                    }
                }
                None => {
                    return Err(Error::Format {
                        line: u + 1,
                        msg: format!("row has too few entries (expected {})", n),
                    });
                }
            }
        }
        toks.end()?;
    }
    Ok(g)
}
