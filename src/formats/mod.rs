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

//! Reading and writing graph files.
//!
//! Three textual formats are supported, selected by the keys of the
//! original command-line tool:
//!
//! - `-e`: a list of edges, one `u v [w]` record per line,
//! - `-m`: a full adjacency matrix, one row per line,
//! - `-l`: an adjacency list, line `i` holding the neighbors of vertex `i`.
//!
//! Vertices are 1-based in all files and 0-based in the resulting
//! [`SquareMatrix`](crate::SquareMatrix).

pub mod adjlist;
pub mod edgelist;
pub mod matrix;

mod write;
pub use self::write::{write_distances, write_matrix};

pub use self::edgelist::EdgeDirection;
pub use self::matrix::ZeroPolicy;

use crate::num::traits::NumAssign;
use crate::SquareMatrix;

use std::error;
use std::fmt;
use std::fs;
use std::io::{self, BufReader};
use std::str::{FromStr, SplitWhitespace};

/// Error when reading a graph file.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    /// A line could not be parsed (wrong token count, non-numeric value).
    Format { line: usize, msg: String },
    /// A line was well-formed but inconsistent (e.g. vertex out of range).
    Data { line: usize, msg: String },
    /// An unrecognized format selector.
    UnknownFormat(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            Io(err) => err.fmt(fmt),
            Format { line, msg } => write!(fmt, "Format error on line {}: {}", line, msg),
            Data { line, msg } => write!(fmt, "Data error on line {}: {}", line, msg),
            UnknownFormat(key) => write!(fmt, "Unknown format selector: {}", key),
        }
    }
}

impl error::Error for Error {
    fn cause(&self) -> Option<&dyn error::Error> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The supported input formats.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Format {
    EdgeList,
    Matrix,
    AdjacencyList,
}

impl FromStr for Format {
    type Err = Error;

    /// Parse a format selector, with or without the leading dash.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "-e" | "e" => Ok(Format::EdgeList),
            "-m" | "m" => Ok(Format::Matrix),
            "-l" | "l" => Ok(Format::AdjacencyList),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Read a graph file in the given format.
///
/// Edge lists are read as undirected and a literal 0 in a matrix file is
/// taken as "no edge", both matching the behavior of the original tool.
/// Use the per-format functions for the directed and zero-preserving
/// variants.
pub fn read_graph<W>(fname: &str, format: Format) -> Result<SquareMatrix<W>>
where
    W: NumAssign + FromStr + Copy,
    W::Err: fmt::Display,
{
    let mut buf = BufReader::new(fs::File::open(fname)?);
    match format {
        Format::EdgeList => edgelist::read_from_buf(&mut buf, EdgeDirection::Undirected),
        Format::Matrix => matrix::read_from_buf(&mut buf, ZeroPolicy::NoEdge),
        Format::AdjacencyList => adjlist::read_from_buf(&mut buf),
    }
}

/// Iterates over the tokens of one input line.
pub(self) struct Tokens<'a> {
    it: SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(s: &'a str, line: usize) -> Self {
        Tokens {
            it: s.split_whitespace(),
            line,
        }
    }

    fn next(&mut self) -> Option<&'a str> {
        self.it.next()
    }

    /// Returns the next token converted to a number.
    fn number<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let tok = self.it.next().ok_or_else(|| Error::Format {
            line: self.line,
            msg: "expected number".to_string(),
        })?;
        tok.parse().map_err(|e| Error::Format {
            line: self.line,
            msg: format!("{}", e),
        })
    }

    /// Returns the next token as a 1-based vertex index.
    fn vertex(&mut self) -> Result<usize> {
        let v: usize = self.number()?;
        if v == 0 {
            return Err(Error::Data {
                line: self.line,
                msg: "vertex indices start at 1".to_string(),
            });
        }
        Ok(v)
    }

    /// Ensures that there is no next token.
    fn end(&mut self) -> Result<()> {
        if let Some(s) = self.it.next() {
            Err(Error::Format {
                line: self.line,
                msg: format!("unexpected token at end of line: {}", s),
            })
        } else {
            Ok(())
        }
    }
}
