/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

use time::OffsetDateTime;

use rustop::opts;

use apsp::formats::{self, write_distances, write_matrix, Format};
use apsp::shortestpath::johnson;
use apsp::SquareMatrix;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::exit;

fn main() {
    let (args, _) = opts! {
        synopsis "Compute all-pairs shortest paths on a dense graph.";
        opt format:String=String::from("e"),
            desc:"Input format: e (edge list), m (adjacency matrix), l (adjacency list).";
        opt output:String=String::from("output.txt"),
            desc:"File the adjacency matrix is written to.";
        param file:String, desc:"Graph file name";
    }
    .parse_or_exit();

    let format = match args.format.parse::<Format>() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    let g: SquareMatrix<i64> = match formats::read_graph(&args.file, format) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{}: {}", args.file, e);
            exit(1);
        }
    };

    println!("  number of vertices: {}", g.num_vertices());
    println!("  number of edges: {}", g.edges().count());

    let tstart = OffsetDateTime::now_utc();
    let result = johnson::solve(&g);
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());

    match &result {
        Ok(dist) => {
            println!("Shortest paths lengths:");
            write_distances(&mut io::stdout(), dist).unwrap();
        }
        Err(e) => println!("{}", e),
    }

    if let Err(e) = write_output(&args.output, &g) {
        eprintln!("{}: {}", args.output, e);
        exit(1);
    }
    println!("\nAdjacency matrix written to {}", args.output);
}

fn write_output(fname: &str, g: &SquareMatrix<i64>) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(fname)?);
    writeln!(out, "Adjacency matrix:")?;
    write_matrix(&mut out, g)?;
    Ok(())
}
