// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 The trisubdiv developers
// This file is part of the trisubdiv crate.
#[cfg(test)]
mod tests;

use crate::TriSubdivError;
use itertools::Itertools;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path,
};
use tracing::debug;
use vector_traits::GenericVector2;

/// Reads a point file, see [`parse_points`] for the format
pub fn read_points<T: GenericVector2>(
    filename: impl AsRef<path::Path> + std::fmt::Debug,
) -> Result<Vec<T>, TriSubdivError> {
    let file = File::open(filename.as_ref())?;
    let points = parse_points(BufReader::new(file))?;
    debug!(?filename, points = points.len(), "read point file");
    Ok(points)
}

/// Parses whitespace separated numbers as `x y` pairs.
///
/// Line breaks carry no meaning, `1 2 3\n4` is the two points (1,2) and (3,4).
/// Parsing stops quietly at the first token that is not a number (a line that is not valid
/// UTF-8 counts as one), and a trailing unpaired number is dropped. Only read failures of
/// `reader` itself are reported as errors.
pub fn parse_points<T: GenericVector2, R: BufRead>(reader: R) -> Result<Vec<T>, TriSubdivError> {
    let mut numbers = Vec::<T::Scalar>::new();
    'lines: for line in reader.split(b'\n') {
        let line = line?;
        let Ok(line) = std::str::from_utf8(&line) else {
            break 'lines;
        };
        for token in line.split_whitespace() {
            match token.parse() {
                Ok(value) => numbers.push(value),
                Err(_) => break 'lines,
            }
        }
    }
    Ok(numbers
        .into_iter()
        .tuples()
        .map(|(x, y)| T::new_2d(x, y))
        .collect())
}
