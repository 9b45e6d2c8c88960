//! The [`HeightMap`] type — an immutable grid of elevations.
//!
//! Elevations run from [`MIN_ELEVATION`] (`a`, and the start marker `S`)
//! to [`MAX_ELEVATION`] (`z`, and the end marker `E`).

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{LoadError, MalformedGridError};
use crate::geom::{Point, Range};

pub const MIN_ELEVATION: u8 = 0;
pub const MAX_ELEVATION: u8 = 25;

const START_MARKER: char = 'S';
const END_MARKER: char = 'E';

/// A rectangular elevation grid with one start and one end cell.
///
/// A `HeightMap` is always non-empty and rectangular; every constructor
/// validates this and returns [`MalformedGridError`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    cells: Vec<u8>,
    bounds: Range,
    start: Point,
    end: Point,
}

impl HeightMap {
    /// Build a map from numeric rows. `start` and `end` must lie inside the
    /// grid; their elevations are taken as given.
    pub fn from_rows(
        rows: Vec<Vec<u8>>,
        start: Point,
        end: Point,
    ) -> Result<Self, MalformedGridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MalformedGridError::Empty);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MalformedGridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &elevation) in row.iter().enumerate() {
                if elevation > MAX_ELEVATION {
                    return Err(MalformedGridError::ElevationOutOfRange {
                        pos: Point::new(x as i32, y as i32),
                        elevation,
                    });
                }
            }
            cells.extend(row);
        }
        let bounds = Range::new(0, 0, width as i32, height as i32);
        for pos in [start, end] {
            if !bounds.contains(pos) {
                return Err(MalformedGridError::OutOfBounds { pos });
            }
        }
        Ok(Self {
            cells,
            bounds,
            start,
            end,
        })
    }

    /// Read and parse a grid file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path)?;
        Ok(text.parse::<Self>()?)
    }

    /// The bounding range of the grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The cell marked `S`.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The cell marked `E`.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Elevation at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<u8> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[p.y as usize * self.width() as usize + p.x as usize])
    }

    /// Whether a single move from `from` to the orthogonal neighbour `to`
    /// is legal: both inside the grid and climbing at most one unit.
    pub fn can_step(&self, from: Point, to: Point) -> bool {
        if !from.is_adjacent(to) {
            return false;
        }
        match (self.at(from), self.at(to)) {
            (Some(a), Some(b)) => i32::from(b) - i32::from(a) <= 1,
            _ => false,
        }
    }

    /// Every cell at [`MIN_ELEVATION`], in row-major order.
    pub fn lowest_cells(&self) -> Vec<Point> {
        self.iter()
            .filter(|&(_, e)| e == MIN_ELEVATION)
            .map(|(p, _)| p)
            .collect()
    }

    /// Row-major iterator over `(Point, elevation)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u8)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl FromStr for HeightMap {
    type Err = MalformedGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let mut start: Option<Point> = None;
        let mut end: Option<Point> = None;
        let mut rows = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let mut elevations = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::from_row_col(row as i32, col as i32);
                let elevation = match ch {
                    'a'..='z' => ch as u8 - b'a',
                    START_MARKER => {
                        if let Some(first) = start {
                            return Err(MalformedGridError::DuplicateStart { first, second: pos });
                        }
                        start = Some(pos);
                        MIN_ELEVATION
                    }
                    END_MARKER => {
                        if let Some(first) = end {
                            return Err(MalformedGridError::DuplicateEnd { first, second: pos });
                        }
                        end = Some(pos);
                        MAX_ELEVATION
                    }
                    _ => return Err(MalformedGridError::InvalidChar { ch, row, col }),
                };
                elevations.push(elevation);
            }
            rows.push(elevations);
        }

        // Shape problems take precedence over missing markers.
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MalformedGridError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(MalformedGridError::Ragged {
                row,
                expected: width,
                found: r.len(),
            });
        }
        let start = start.ok_or(MalformedGridError::MissingStart)?;
        let end = end.ok_or(MalformedGridError::MissingEnd)?;
        Self::from_rows(rows, start, end)
    }
}
