//! Errors raised while building a [`HeightMap`](crate::HeightMap).

use std::io;

use thiserror::Error;

use crate::geom::Point;

/// The input does not describe a valid elevation grid.
///
/// Positions in messages are reported as zero-based `row`/`col`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedGridError {
    #[error("grid is empty")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid character {ch:?} at row {row}, col {col}")]
    InvalidChar { ch: char, row: usize, col: usize },
    #[error("elevation {elevation} at {pos} is outside 0..=25")]
    ElevationOutOfRange { pos: Point, elevation: u8 },
    #[error("{pos} lies outside the grid")]
    OutOfBounds { pos: Point },
    #[error("no start marker 'S'")]
    MissingStart,
    #[error("no end marker 'E'")]
    MissingEnd,
    #[error("start marker 'S' found at both {first} and {second}")]
    DuplicateStart { first: Point, second: Point },
    #[error("end marker 'E' found at both {first} and {second}")]
    DuplicateEnd { first: Point, second: Point },
}

/// Failure to load a grid from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("error reading grid file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Malformed(#[from] MalformedGridError),
}
